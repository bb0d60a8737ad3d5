//! Class names used by the checkbox layout.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// CSS classes applied to each part of a [`CheckboxField`](crate::widgets::CheckboxField).
///
/// Missing keys fall back to the Tailwind defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxTheme {
    /// Outer wrapper.
    pub wrapper: String,
    /// Container around the input.
    pub control: String,
    /// The checkbox input.
    pub input: String,
    /// Container around label and sublabel.
    pub text: String,
    /// The `<label>` element.
    pub label: String,
    /// The sublabel `<p>` element.
    pub sublabel: String,
}

impl Default for CheckboxTheme {
    fn default() -> Self {
        Self {
            wrapper: "relative flex items-start".to_string(),
            control: "flex items-center h-5".to_string(),
            input: "focus:ring-blue-500 h-4 w-4 text-blue-600 border-gray-300 rounded".to_string(),
            text: "ml-3 text-sm".to_string(),
            label: "font-medium text-gray-900 dark:text-gray-100".to_string(),
            sublabel: "text-gray-500".to_string(),
        }
    }
}

impl CheckboxTheme {
    /// Creates the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a theme from JSON, keeping defaults for omitted keys.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Theme`](crate::FieldError::Theme) when the
    /// JSON is malformed or a key has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
