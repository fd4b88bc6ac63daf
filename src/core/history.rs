//! State transition history tracking.
//!
//! Every button press the widget handles is kept as an immutable record,
//! including presses that were rejected or only dismissed the error.

use super::action::Action;
use super::state::State;
use super::transition::Outcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single handled action.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CounterState, Outcome, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: CounterState::new(),
///     to: CounterState::with_count(1),
///     action: Action::Increment,
///     outcome: Outcome::Incremented,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.outcome.changed_count());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the action
    pub from: S,
    /// The state after the action
    pub to: S,
    /// The button that was pressed
    pub action: Action,
    /// What the press did
    pub outcome: Outcome,
    /// When the action was handled
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of handled actions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CounterState, Outcome, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: CounterState::new(),
///     to: CounterState::with_count(1),
///     action: Action::Increment,
///     outcome: Outcome::Incremented,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[1].count(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first `from` state followed by the `to` state of each
    /// transition. Rejected presses still appear, so a repeated state in
    /// the path is expected.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Number of decrements refused by the zero guard.
    pub fn rejected_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.outcome == Outcome::Rejected)
            .count()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::CounterState;
    use crate::core::transition::{apply, classify};

    fn press(from: CounterState, action: Action) -> StateTransition<CounterState> {
        StateTransition {
            from,
            to: apply(from, action),
            action,
            outcome: classify(&from, action),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<CounterState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.rejected_count(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(press(CounterState::new(), Action::Increment));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let start = CounterState::new();
        let first = press(start, Action::Decrement);
        let second = press(first.to, Action::Increment);
        let history = StateHistory::new().record(first).record(second);

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &CounterState::new());
        assert!(path[1].error_active());
        assert_eq!(path[2], &CounterState::new());
    }

    #[test]
    fn rejected_count_tracks_guarded_decrements() {
        let start = CounterState::new();
        let first = press(start, Action::Decrement);
        let second = press(first.to, Action::Decrement);
        let third = press(second.to, Action::Increment);
        let history = StateHistory::new().record(first).record(second).record(third);

        assert_eq!(history.rejected_count(), 2);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(press(CounterState::new(), Action::Increment));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(press(CounterState::with_count(1), Action::Increment));

        let duration = history.duration().unwrap();
        assert!(duration >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(press(CounterState::new(), Action::Decrement));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<CounterState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].outcome, Outcome::Rejected);
        assert!(deserialized.transitions()[0].to.error_active());
    }
}
