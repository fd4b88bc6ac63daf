//! Core counter state machine.
//!
//! This module contains the pure functional core:
//! - `CounterState` and the `State` trait
//! - the `can_decrement` guard
//! - pure transition functions and their `Outcome`
//! - immutable history tracking
//!
//! Nothing in this module performs I/O or logging.

mod action;
mod guard;
mod history;
mod state;
mod transition;

pub use action::Action;
pub use guard::{can_decrement, Guard};
pub use history::{StateHistory, StateTransition};
pub use state::{CounterState, Phase, State};
pub use transition::{apply, apply_decrement, apply_increment, classify, Outcome};
