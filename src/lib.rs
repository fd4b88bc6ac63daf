//! Tally: a guarded counter widget as a pure functional state machine
//!
//! The widget shows a count and two buttons. Decrementing at zero is refused
//! and raises an error message; the next increment dismisses the message
//! instead of counting.
//!
//! # Core Concepts
//!
//! - **State**: `CounterState` holds the count and the error flag
//! - **Transitions**: Pure `apply_increment` / `apply_decrement` functions
//! - **Guards**: `can_decrement` keeps the count non-negative
//! - **History**: Immutable record of every handled press
//! - **View**: `render` produces a `data-test` addressable snapshot
//! - **Effects**: `CounterWidget::dispatch` presents the view via Stillwater
//!
//! # Example
//!
//! ```rust
//! use tally::core::{apply_decrement, apply_increment, CounterState};
//!
//! let state = apply_decrement(CounterState::new());
//! assert_eq!((state.count(), state.error_active()), (0, true));
//!
//! let state = apply_increment(state);
//! assert_eq!((state.count(), state.error_active()), (0, false));
//!
//! let state = apply_increment(state);
//! assert_eq!(state.count(), 1);
//! ```

pub mod core;
pub mod effects;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Action, CounterState, Outcome, State, StateHistory};
pub use crate::effects::{CounterWidget, RenderError, Renderer};
pub use crate::view::{render, View, ViewConfig};
