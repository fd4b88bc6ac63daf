//! Labels shown by the counter view.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a [`ViewConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("View configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("View label '{field}' must not be empty")]
    EmptyLabel { field: &'static str },
}

/// Literal text used when rendering the widget.
///
/// Every field is optional in JSON; missing fields take the defaults below.
///
/// ```rust
/// use tally::view::ViewConfig;
///
/// let config = ViewConfig::from_json(r#"{ "heading": "Clicks:" }"#).unwrap();
/// assert_eq!(config.heading, "Clicks:");
/// assert_eq!(config.increment_label, "Increment");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Prefix of the counter display, followed by the count
    pub heading: String,
    /// Text of the error message node
    pub error_message: String,
    pub increment_label: String,
    pub decrement_label: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            heading: "The counter is currently:".to_string(),
            error_message: "Error: counter should not be less than 0".to_string(),
            increment_label: "Increment".to_string(),
            decrement_label: "Decrement".to_string(),
        }
    }
}

impl ViewConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank labels; a blank button cannot be pressed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("heading", &self.heading),
            ("error_message", &self.error_message),
            ("increment_label", &self.increment_label),
            ("decrement_label", &self.decrement_label),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyLabel { field });
            }
        }
        Ok(())
    }
}
