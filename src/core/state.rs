//! Counter state and the `State` trait it implements.
//!
//! States are plain values. Inspecting them has no side effects, and every
//! change goes through the pure transition functions in
//! [`transition`](super::transition).

use super::transition;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure. Implementors are small values that can be cloned
/// into history records and serialized for diagnostics.
///
/// # Example
///
/// ```rust
/// use tally::core::{CounterState, State};
///
/// let state = CounterState::new();
/// assert_eq!(state.name(), "Normal");
/// assert!(!state.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state is showing an error to the user.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Observable phase of the counter, derived from its two fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Displaying a count with no error.
    Normal(u64),
    /// A decrement at zero was rejected; the count is 0.
    ErrorShown,
}

/// The counter widget's complete state.
///
/// `count` is unsigned, so the non-negative invariant holds by type.
/// `error_active` is only ever true while `count` is 0: the only way to set
/// it is a rejected decrement at zero, and a seeded state starts without it.
///
/// # Example
///
/// ```rust
/// use tally::core::CounterState;
///
/// let mut state = CounterState::new();
/// state.decrement();
/// assert_eq!(state.count(), 0);
/// assert!(state.error_active());
///
/// state.increment();
/// assert_eq!(state.count(), 0);
/// assert!(!state.error_active());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(from = "StateRecord")]
pub struct CounterState {
    count: u64,
    error_active: bool,
}

/// Wire shape of [`CounterState`]; an error flag on a non-zero count is dropped.
#[derive(Deserialize)]
struct StateRecord {
    count: u64,
    #[serde(default)]
    error_active: bool,
}

impl From<StateRecord> for CounterState {
    fn from(record: StateRecord) -> Self {
        Self::from_parts(record.count, record.error_active && record.count == 0)
    }
}

impl CounterState {
    /// The initial state: count 0, no error.
    pub const fn new() -> Self {
        Self {
            count: 0,
            error_active: false,
        }
    }

    /// A state seeded at `count` with no error showing.
    pub const fn with_count(count: u64) -> Self {
        Self {
            count,
            error_active: false,
        }
    }

    pub(crate) const fn from_parts(count: u64, error_active: bool) -> Self {
        Self {
            count,
            error_active,
        }
    }

    /// Current count.
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Whether the error message should be visible.
    pub const fn error_active(&self) -> bool {
        self.error_active
    }

    pub fn phase(&self) -> Phase {
        if self.error_active {
            Phase::ErrorShown
        } else {
            Phase::Normal(self.count)
        }
    }

    /// Increment in place. Clears an active error instead of counting.
    pub fn increment(&mut self) {
        *self = transition::apply_increment(*self);
    }

    /// Decrement in place. At zero this raises the error flag instead.
    pub fn decrement(&mut self) {
        *self = transition::apply_decrement(*self);
    }
}

impl State for CounterState {
    fn name(&self) -> &str {
        match self.phase() {
            Phase::Normal(_) => "Normal",
            Phase::ErrorShown => "ErrorShown",
        }
    }

    fn is_error(&self) -> bool {
        self.error_active
    }
}

impl fmt::Display for CounterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.count, self.error_active)
    }
}
