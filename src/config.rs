//! # Debouncer Configuration
//!
//! Builder-style configuration consumed by [`Debouncer::new`].
//!
//! [`Debouncer::new`]: crate::debouncer::Debouncer::new

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::priority::Priority;

/// Callback supplied with a single dispatched event.
///
/// Invoked at most once, when (and only when) that event wins its debounce
/// burst. A callback superseded by a later admission, or supplied with a
/// rejected event, is silently dropped.
pub type DispatchCallback = Box<dyn FnOnce() + Send + 'static>;

/// Callback invoked on every firing, regardless of which event won.
///
/// Runs strictly before the winning event's own [`DispatchCallback`].
pub type GlobalCallback = Arc<dyn Fn() + Send + Sync + 'static>;

/// Configuration for a [`Debouncer`].
///
/// Only the quiet-period duration is required. Without a priority policy the
/// debouncer degrades to pass-through mode (every event fires), which is
/// diagnosed with a warning at construction time.
///
/// [`Debouncer`]: crate::debouncer::Debouncer
///
/// # Example
///
/// ```rust
/// use eventweave::{DebouncerConfig, Priority};
/// use std::time::Duration;
///
/// let config = DebouncerConfig::new(Duration::from_millis(180))
///   .with_priority(Priority::ranked(["save", "keyup", "blur", "keydown"]))
///   .with_global_callback(|| println!("burst settled"));
/// ```
#[derive(Clone)]
pub struct DebouncerConfig {
  /// Quiet period that must elapse after the last admission before firing.
  pub duration: Duration,
  /// Priority policy; `None` means pass-through (no debouncing).
  pub priority: Option<Priority>,
  /// Callback invoked on every firing, before the winning event's own.
  pub global_callback: Option<GlobalCallback>,
}

impl DebouncerConfig {
  /// Creates a configuration with the given quiet-period duration and no
  /// priority policy.
  pub fn new(duration: Duration) -> Self {
    Self {
      duration,
      priority: None,
      global_callback: None,
    }
  }

  /// Sets the priority policy.
  pub fn with_priority(mut self, priority: Priority) -> Self {
    self.priority = Some(priority);
    self
  }

  /// Sets the callback invoked on every firing.
  pub fn with_global_callback<F>(mut self, callback: F) -> Self
  where
    F: Fn() + Send + Sync + 'static,
  {
    self.global_callback = Some(Arc::new(callback));
    self
  }
}

impl fmt::Debug for DebouncerConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DebouncerConfig")
      .field("duration", &self.duration)
      .field("priority", &self.priority)
      .field("global_callback", &self.global_callback.as_ref().map(|_| "<fn>"))
      .finish()
  }
}
