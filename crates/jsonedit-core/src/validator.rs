//! JSON syntax validation.
//!
//! Parse failures never escape this module as panics or propagated errors:
//! they become a [`ValidationState`] with the parser's message.

use serde::Serialize;
use serde_json::Value;

/// A JSON parse failure with the parser's human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    /// 1-based line of the failure, 0 when unknown.
    pub line: usize,
    /// 1-based column of the failure, 0 when unknown.
    pub column: usize,
}

impl From<serde_json::Error> for SyntaxError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        }
    }
}

impl From<SyntaxError> for jsonedit_common::EditorError {
    fn from(e: SyntaxError) -> Self {
        jsonedit_common::EditorError::Syntax(e.message)
    }
}

/// Result of checking a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationState {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationState {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

impl Default for ValidationState {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<&SyntaxError> for ValidationState {
    fn from(e: &SyntaxError) -> Self {
        Self::invalid(e.message.clone())
    }
}

/// Empty and whitespace-only buffers are never an error.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Parse `text` as a single JSON document.
pub fn parse(text: &str) -> Result<Value, SyntaxError> {
    serde_json::from_str(text).map_err(SyntaxError::from)
}

/// Check `text` for JSON syntax errors.
pub fn validate(text: &str) -> ValidationState {
    if is_blank(text) {
        return ValidationState::valid();
    }
    match parse(text) {
        Ok(_) => ValidationState::valid(),
        Err(e) => ValidationState::from(&e),
    }
}
