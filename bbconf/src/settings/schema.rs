//! Settings schema definitions.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Backup suffix used when none is configured.
pub const DEFAULT_BACKUP_SUFFIX: &str = "bak";

/// Tool settings, as read from one settings file.
///
/// Every field is optional so that sources can be layered; the accessor
/// methods apply the built-in defaults.
///
/// # Examples
///
/// ```
/// use bbconf::settings::Settings;
/// use bbconf::output::OutputFormat;
///
/// let settings = Settings::default();
/// assert!(settings.backup_enabled());
/// assert_eq!(settings.backup_suffix(), "bak");
/// assert_eq!(settings.output_format(), OutputFormat::Human);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Copy a file aside before rewriting it in place.
    pub backup: Option<bool>,

    /// Suffix inserted into backup file names.
    pub backup_suffix: Option<String>,

    /// Default format for `show`.
    pub output_format: Option<OutputFormat>,
}

impl Settings {
    /// Whether in-place writes keep a backup (default: yes).
    #[must_use]
    pub fn backup_enabled(&self) -> bool {
        self.backup.unwrap_or(true)
    }

    /// Suffix for backup files (default: `bak`).
    #[must_use]
    pub fn backup_suffix(&self) -> &str {
        self.backup_suffix.as_deref().unwrap_or(DEFAULT_BACKUP_SUFFIX)
    }

    /// Output format for display commands (default: human).
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}
