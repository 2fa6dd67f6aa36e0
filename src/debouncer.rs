//! # Debouncer
//!
//! The debouncer proper: a dispatch entry point closing over one pending
//! window, an admission check driven by the configured [`Priority`] policy,
//! and a single-shot timer task that fires the winning event's callbacks
//! once the quiet period elapses.
//!
//! ## Behavior
//!
//! - Dispatching an event runs the admission check against the currently
//!   pending label (if any).
//! - An admitted event cancels any outstanding timer, records itself as the
//!   pending winner, and starts a fresh timer for the configured duration.
//! - A rejected event changes nothing; its callback is silently dropped.
//! - When the timer fires, the pending state is cleared first, then the
//!   global callback runs (if configured), then the winning event's own
//!   callback (if supplied).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use crate::config::{DebouncerConfig, DispatchCallback, GlobalCallback};
use crate::priority::Priority;

/// Mutable window state, one instance per constructed [`Debouncer`].
///
/// Invariant: `last_admitted` is `Some` iff `active_timer` is `Some`. Both
/// are set together on admission and cleared together when the timer fires.
#[derive(Default)]
struct PendingState {
  active_timer: Option<JoinHandle<()>>,
  last_admitted: Option<String>,
}

/// Arbitrates a burst of named events down to a single winner.
///
/// Built from a [`DebouncerConfig`]; each constructed instance owns one
/// pending window. Cloning is cheap and clones share that window, so a
/// `Debouncer` can be handed to event sources on several tasks.
///
/// # Example
///
/// ```rust,no_run
/// use eventweave::{Debouncer, DebouncerConfig, Priority};
/// use std::time::Duration;
///
/// # async fn demo() {
/// let debouncer = Debouncer::new(
///   DebouncerConfig::new(Duration::from_millis(180))
///     .with_priority(Priority::ranked(["save", "keyup", "blur", "keydown"])),
/// );
///
/// // Within a burst, only the highest-priority event's callback fires.
/// debouncer.dispatch("keyup", Some(Box::new(|| println!("keyup won")))).await;
/// debouncer.dispatch("save", Some(Box::new(|| println!("save won")))).await;
/// # }
/// ```
#[derive(Clone)]
pub struct Debouncer {
  duration: Duration,
  priority: Option<Priority>,
  global_callback: Option<GlobalCallback>,
  state: Arc<Mutex<PendingState>>,
}

impl Debouncer {
  /// Builds a debouncer from the given configuration.
  ///
  /// Emits a single warning when no priority policy is configured, since
  /// that degrades the instance to pass-through mode: every dispatched
  /// event is admitted and fires after its own quiet period.
  pub fn new(config: DebouncerConfig) -> Self {
    if config.priority.is_none() {
      warn!("no priority configured, debouncing disabled: every event will fire");
    }
    Self {
      duration: config.duration,
      priority: config.priority,
      global_callback: config.global_callback,
      state: Arc::new(Mutex::new(PendingState::default())),
    }
  }

  /// Dispatches a named event into the debounce window.
  ///
  /// If the event is admitted, any outstanding timer is cancelled and a new
  /// one is started for the configured duration; `callback` will run iff
  /// this event is still the pending winner when that timer fires. If the
  /// event is rejected, nothing changes and `callback` is dropped without
  /// ever being invoked.
  ///
  /// Must be called from within a Tokio runtime. Calls serialize on the
  /// window state; callbacks run with that lock released, so a dispatch
  /// initiated from inside a callback (via a spawned task) cannot deadlock.
  pub async fn dispatch(&self, label: &str, callback: Option<DispatchCallback>) {
    let mut state = self.state.lock().await;

    let admitted = match &self.priority {
      Some(priority) => priority.admits(state.last_admitted.as_deref(), label),
      None => true,
    };
    if !admitted {
      trace!(label, pending = ?state.last_admitted, "event rejected");
      return;
    }

    if let Some(timer) = state.active_timer.take() {
      timer.abort();
    }
    state.last_admitted = Some(label.to_owned());

    let duration = self.duration;
    let window = Arc::clone(&self.state);
    let global_callback = self.global_callback.clone();
    let winner = label.to_owned();
    state.active_timer = Some(tokio::spawn(async move {
      tokio::time::sleep(duration).await;
      {
        // A dispatch that re-acquires the lock first aborts this task at
        // the await above; once we hold the lock the firing is committed.
        let mut state = window.lock().await;
        state.active_timer = None;
        state.last_admitted = None;
      }
      trace!(label = %winner, "quiet period elapsed, firing");
      if let Some(global) = global_callback {
        global();
      }
      if let Some(callback) = callback {
        callback();
      }
    }));
    trace!(label, "event admitted, timer reset");
  }

  /// Returns `true` while an admitted event is waiting on its timer.
  pub async fn is_pending(&self) -> bool {
    self.state.lock().await.active_timer.is_some()
  }

  /// Returns the label of the pending winner, or `None` when idle.
  pub async fn pending_label(&self) -> Option<String> {
    self.state.lock().await.last_admitted.clone()
  }
}
