//! Pure transition functions for the counter.
//!
//! Each function takes a state by value and returns the next one. Nothing
//! here touches the view or the clock; the shell in
//! [`effects`](crate::effects) does that after the state has changed.

use super::action::Action;
use super::guard::can_decrement;
use super::state::CounterState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a single action did to the state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// Count went up by one.
    Incremented,
    /// Count went down by one.
    Decremented,
    /// Increment dismissed the error; count unchanged.
    ErrorCleared,
    /// Decrement at zero; the error flag is (or stays) raised.
    Rejected,
}

impl Outcome {
    /// Whether the count value changed.
    pub fn changed_count(&self) -> bool {
        matches!(self, Self::Incremented | Self::Decremented)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Incremented => "incremented",
            Self::Decremented => "decremented",
            Self::ErrorCleared => "error cleared",
            Self::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// Apply the increment button to `state`.
///
/// An active error is dismissed without counting. Clearing and counting
/// never happen in the same call.
///
/// ```rust
/// use tally::core::{apply_increment, CounterState};
///
/// assert_eq!(apply_increment(CounterState::with_count(7)).count(), 8);
/// ```
pub fn apply_increment(state: CounterState) -> CounterState {
    if state.error_active() {
        return CounterState::from_parts(state.count(), false);
    }
    CounterState::from_parts(state.count().saturating_add(1), false)
}

/// Apply the decrement button to `state`.
///
/// At zero the count is left alone and the error flag is raised.
///
/// ```rust
/// use tally::core::{apply_decrement, CounterState};
///
/// let state = apply_decrement(CounterState::new());
/// assert_eq!(state.count(), 0);
/// assert!(state.error_active());
/// ```
pub fn apply_decrement(state: CounterState) -> CounterState {
    if !can_decrement().check(&state) {
        return CounterState::from_parts(0, true);
    }
    CounterState::from_parts(state.count() - 1, state.error_active())
}

/// Apply `action` to `state`.
pub fn apply(state: CounterState, action: Action) -> CounterState {
    match action {
        Action::Increment => apply_increment(state),
        Action::Decrement => apply_decrement(state),
    }
}

/// Classify what `action` will do from `state` without applying it.
pub fn classify(state: &CounterState, action: Action) -> Outcome {
    match action {
        Action::Increment if state.error_active() => Outcome::ErrorCleared,
        Action::Increment => Outcome::Incremented,
        Action::Decrement if state.count() == 0 => Outcome::Rejected,
        Action::Decrement => Outcome::Decremented,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_state() -> CounterState {
        CounterState::from_parts(0, true)
    }

    #[test]
    fn transition_table_holds() {
        let rows = [
            (CounterState::new(), Action::Decrement, error_state()),
            (CounterState::new(), Action::Increment, CounterState::with_count(1)),
            (error_state(), Action::Decrement, error_state()),
            (error_state(), Action::Increment, CounterState::new()),
            (CounterState::with_count(5), Action::Decrement, CounterState::with_count(4)),
            (CounterState::with_count(5), Action::Increment, CounterState::with_count(6)),
        ];

        for (from, action, expected) in rows {
            assert_eq!(apply(from, action), expected, "{from} --{action}-->");
        }
    }

    #[test]
    fn increment_never_clears_and_counts_together() {
        let next = apply_increment(error_state());
        assert_eq!(next.count(), 0);
        assert!(!next.error_active());
    }

    #[test]
    fn repeated_decrement_at_zero_is_idempotent() {
        let once = apply_decrement(CounterState::new());
        let twice = apply_decrement(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn decrement_from_one_reaches_zero_without_error() {
        let next = apply_decrement(CounterState::with_count(1));
        assert_eq!(next, CounterState::new());
    }

    #[test]
    fn increment_saturates_at_max() {
        let next = apply_increment(CounterState::with_count(u64::MAX));
        assert_eq!(next.count(), u64::MAX);
    }

    #[test]
    fn classify_matches_apply() {
        assert_eq!(classify(&CounterState::new(), Action::Decrement), Outcome::Rejected);
        assert_eq!(classify(&error_state(), Action::Decrement), Outcome::Rejected);
        assert_eq!(classify(&error_state(), Action::Increment), Outcome::ErrorCleared);
        assert_eq!(
            classify(&CounterState::with_count(2), Action::Increment),
            Outcome::Incremented
        );
        assert_eq!(
            classify(&CounterState::with_count(2), Action::Decrement),
            Outcome::Decremented
        );
    }

    #[test]
    fn changed_count_only_for_counting_outcomes() {
        assert!(Outcome::Incremented.changed_count());
        assert!(Outcome::Decremented.changed_count());
        assert!(!Outcome::ErrorCleared.changed_count());
        assert!(!Outcome::Rejected.changed_count());
    }
}
