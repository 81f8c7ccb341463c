//! Rendering of section views for display.
//!
//! Front ends pick an [`OutputFormat`] and get a formatter that turns the
//! rows of an [`EditSession`](crate::EditSession) into text.

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::SectionView;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter};

/// Formats section views into a string.
pub trait OutputFormatter {
    /// Format the given sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be produced.
    fn format(&self, sections: &[SectionView]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use bbconf::output::OutputFormat;
///
/// assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
/// assert_eq!(OutputFormat::Human.to_string(), "human");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled, indented text.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message for unknown names.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}
