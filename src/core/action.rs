//! User intents that drive the counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two buttons the view exposes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    /// Add one, or dismiss an active error.
    Increment,
    /// Subtract one, guarded at zero.
    Decrement,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
