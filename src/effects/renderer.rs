//! The presenting side of the widget.

use crate::view::View;
use thiserror::Error;

/// Errors raised by the environment while showing a view.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    #[error("Presenting the view failed: {0}")]
    PresentFailed(String),
}

/// Capability the effect environment provides: put a rendered view in front
/// of the user.
///
/// Implementations are called once after every handled action.
pub trait Renderer {
    fn present(&self, view: &View) -> Result<(), RenderError>;
}

/// Environment that accepts every view and shows nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Renderer for Headless {
    fn present(&self, _view: &View) -> Result<(), RenderError> {
        Ok(())
    }
}
