//! Effectful shell around the pure counter core.
//!
//! The widget applies transitions synchronously and hands the rendered
//! view to the environment through a Stillwater effect.
//!
//! # Key Concepts
//!
//! - **Renderer**: Environment capability that shows a view
//! - **CounterWidget**: Owns the state and history, logs each action
//! - **Effects**: `dispatch` returns `impl Effect` for zero-cost composition

mod renderer;
mod widget;

pub use renderer::{Headless, RenderError, Renderer};
pub use widget::CounterWidget;
