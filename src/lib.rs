//! # EventWeave
//!
//! Priority-aware event debouncing in pure Rust.
//!
//! Given a burst of named events arriving within a short time window,
//! EventWeave selects exactly one winning event by a configured priority
//! order and invokes that event's callback once, after a quiet period with
//! no higher-priority arrival.
//!
//! ## Key Features
//!
//! - **Single winner**: at most one callback fires per quiet period
//! - **Priority policies**: a fixed winner, or a ranked label order where
//!   higher-priority events preempt pending lower-priority ones
//! - **Async-first**: timers are Tokio tasks; cancellation is a task abort
//! - **Self-contained**: one pending window per instance, no global state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eventweave::{Debouncer, DebouncerConfig, Priority};
//! use std::time::Duration;
//!
//! # async fn demo() {
//! let debouncer = Debouncer::new(
//!   DebouncerConfig::new(Duration::from_millis(180))
//!     .with_priority(Priority::ranked(["save", "keyup", "blur", "keydown"]))
//!     .with_global_callback(|| println!("burst settled")),
//! );
//!
//! debouncer.dispatch("keyup", None).await;
//! debouncer.dispatch("save", Some(Box::new(|| println!("saved")))).await;
//! // 180ms of quiet later: "burst settled", then "saved".
//! # }
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Builder-style configuration and callback type aliases.
pub mod config;
/// The debouncer: dispatch, admission, and the single-shot timer.
pub mod debouncer;
/// Priority policies and the admission decision.
pub mod priority;

pub use config::{DebouncerConfig, DispatchCallback, GlobalCallback};
pub use debouncer::Debouncer;
pub use priority::Priority;
