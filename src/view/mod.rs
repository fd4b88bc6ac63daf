//! Rendering of the counter state.
//!
//! `render` turns a [`CounterState`] into a [`View`]: a flat list of nodes,
//! each addressable by its `data-test` attribute. Rendering is pure; showing
//! the result is the job of a [`Renderer`](crate::effects::Renderer).

mod config;

pub use config::{ConfigError, ViewConfig};

use crate::core::{Action, CounterState};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const COMPONENT_APP: &str = "component-app";
pub const COUNTER_DISPLAY: &str = "counter-display";
pub const ERROR_MESSAGE: &str = "error-message";
pub const INCREMENT_BUTTON: &str = "increment-button";
pub const DECREMENT_BUTTON: &str = "decrement-button";

/// What a node is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Container for the whole widget
    Root,
    /// The count display
    Heading,
    /// The error message
    Alert,
    /// A pressable button wired to an action
    Button(Action),
}

/// One rendered element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub test_attr: String,
    pub kind: NodeKind,
    pub text: String,
}

impl Node {
    fn new(test_attr: &str, kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            test_attr: test_attr.to_string(),
            kind,
            text: text.into(),
        }
    }

    /// The action a button node triggers; `None` for other nodes.
    pub fn action(&self) -> Option<Action> {
        match self.kind {
            NodeKind::Button(action) => Some(action),
            _ => None,
        }
    }
}

/// Snapshot of the widget for one state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    state: CounterState,
    nodes: Vec<Node>,
}

impl View {
    /// The state this view was rendered from.
    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Find the node whose `data-test` attribute equals `attr`.
    pub fn find_by_test_attr(&self, attr: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.test_attr == attr)
    }

    /// Text of the counter display.
    pub fn counter_text(&self) -> &str {
        self.find_by_test_attr(COUNTER_DISPLAY)
            .map(|node| node.text.as_str())
            .unwrap_or_default()
    }

    pub fn shows_error(&self) -> bool {
        self.find_by_test_attr(ERROR_MESSAGE).is_some()
    }

    /// Buttons in display order.
    pub fn buttons(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.action().is_some())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            match node.kind {
                NodeKind::Root => {}
                NodeKind::Heading => writeln!(f, "{}", node.text)?,
                NodeKind::Alert => writeln!(f, "! {}", node.text)?,
                NodeKind::Button(_) => write!(f, "[{}] ", node.text)?,
            }
        }
        Ok(())
    }
}

/// Render `state` with the labels from `config`.
///
/// The error node is present if and only if the error flag is set; the
/// count is always shown.
///
/// ```rust
/// use tally::core::CounterState;
/// use tally::view::{render, ViewConfig, ERROR_MESSAGE};
///
/// let view = render(&CounterState::with_count(1), &ViewConfig::default());
/// assert_eq!(view.counter_text(), "The counter is currently: 1");
/// assert!(view.find_by_test_attr(ERROR_MESSAGE).is_none());
/// ```
pub fn render(state: &CounterState, config: &ViewConfig) -> View {
    let mut nodes = vec![
        Node::new(COMPONENT_APP, NodeKind::Root, ""),
        Node::new(
            COUNTER_DISPLAY,
            NodeKind::Heading,
            format!("{} {}", config.heading, state.count()),
        ),
    ];
    if state.error_active() {
        nodes.push(Node::new(
            ERROR_MESSAGE,
            NodeKind::Alert,
            config.error_message.as_str(),
        ));
    }
    nodes.push(Node::new(
        INCREMENT_BUTTON,
        NodeKind::Button(Action::Increment),
        config.increment_label.as_str(),
    ));
    nodes.push(Node::new(
        DECREMENT_BUTTON,
        NodeKind::Button(Action::Decrement),
        config.decrement_label.as_str(),
    ));

    View {
        state: *state,
        nodes,
    }
}
