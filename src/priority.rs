//! # Priority Policies
//!
//! The priority policy decides which event wins a debounce burst. A policy is
//! consulted once per dispatched event, against the label currently pending
//! (if any), and either admits the event (resetting the quiet-period timer)
//! or rejects it (leaving the pending winner untouched).

/// Priority policy for event arbitration.
///
/// Two modes are supported:
///
/// - **Fixed-winner**: one label is the designated winner. While it is
///   pending, no other label may preempt it; the winner itself may always
///   re-admit to refresh the quiet period.
/// - **Ranked**: an ordered sequence of labels, earlier = higher priority.
///   An incoming event is blocked only when an equal-or-higher-priority
///   label is already pending; a strictly higher-priority event always
///   preempts.
///
/// Labels not present in a ranked sequence are unranked: they are never
/// blocked, and once pending they never block a later event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Priority {
  /// A single label that, once pending, cannot be preempted by any other.
  Fixed(String),
  /// An ordered sequence of labels; earlier entries have higher priority.
  Ranked(Vec<String>),
}

impl Priority {
  /// Creates a fixed-winner policy for the given label.
  pub fn fixed(label: impl Into<String>) -> Self {
    Self::Fixed(label.into())
  }

  /// Creates a ranked policy from an ordered sequence of labels.
  ///
  /// Earlier labels have higher priority. An empty sequence admits every
  /// event (equivalent to no debouncing).
  pub fn ranked<I, S>(labels: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Ranked(labels.into_iter().map(Into::into).collect())
  }

  /// Decides whether an incoming event may (re)schedule the pending action.
  ///
  /// `pending` is the label most recently admitted and still waiting on its
  /// timer, or `None` when the debouncer is idle.
  pub(crate) fn admits(&self, pending: Option<&str>, label: &str) -> bool {
    match self {
      Self::Fixed(winner) => label == winner || pending != Some(winner.as_str()),
      Self::Ranked(order) => {
        let evt_rank = order.iter().position(|l| l == label);
        let pending_rank = pending.and_then(|p| order.iter().position(|l| l == p));
        // Blocked only when both labels are ranked and the pending one is
        // of equal or higher priority (lower index).
        !matches!((pending_rank, evt_rank), (Some(p), Some(e)) if p <= e)
      }
    }
  }
}
