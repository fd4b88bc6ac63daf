//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether a transition
//! may change the state. The counter uses one: decrementing requires a
//! positive count.

use super::state::{CounterState, State};
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use tally::core::{CounterState, Guard};
///
/// let guard = Guard::new(|s: &CounterState| s.count() > 0);
///
/// assert!(guard.check(&CounterState::with_count(1)));
/// assert!(!guard.check(&CounterState::new()));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

/// The decrement guard: the count must stay non-negative.
pub fn can_decrement() -> Guard<CounterState> {
    Guard::new(|s: &CounterState| s.count() > 0)
}
