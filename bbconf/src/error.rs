//! Error types for the bbconf library.
//!
//! This module provides the error hierarchy for parsing, editing and
//! settings handling, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a bbconf error.
///
/// # Examples
///
/// ```
/// use bbconf::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bbconf library.
#[derive(Debug, Error)]
pub enum Error {
    /// The comment-stripped text is not a usable JSON object.
    ///
    /// Carries the underlying JSON parser's message.
    #[error("Invalid config format: {message}")]
    MalformedConfigText {
        /// The message reported by the JSON parser.
        message: String,
    },

    /// An edit referenced a key that is not present in the config data.
    #[error("unknown key '{key}'")]
    UnknownKey {
        /// The key that was not found.
        key: String,
    },

    /// An edit tried to replace an array or object with a scalar.
    #[error("key '{key}' holds a structured value and cannot be edited as a leaf")]
    NotALeaf {
        /// The key holding the structured value.
        key: String,
    },

    /// Input text could not be coerced to the type of the existing value.
    #[error("invalid value for '{key}': expected {expected}, got '{input}'")]
    InvalidValue {
        /// The key being edited.
        key: String,
        /// The expected value kind (e.g. "boolean").
        expected: &'static str,
        /// The rejected input text.
        input: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A settings file could not be parsed.
    #[error("settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Wraps a JSON parser failure as malformed config text.
    pub(crate) fn malformed(err: &serde_json::Error) -> Self {
        Self::MalformedConfigText {
            message: err.to_string(),
        }
    }
}
