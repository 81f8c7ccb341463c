//! Settings validation.

use crate::error::{Error, Result};
use crate::settings::schema::Settings;

/// Validates merged settings.
///
/// # Examples
///
/// ```
/// use bbconf::settings::{Settings, SettingsValidator};
///
/// SettingsValidator::validate(&Settings::default()).unwrap();
///
/// let bad = Settings { backup_suffix: Some("a/b".into()), ..Default::default() };
/// assert!(SettingsValidator::validate(&bad).is_err());
/// ```
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate a complete settings value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a backup suffix that is empty or
    /// contains whitespace or path separators.
    pub fn validate(settings: &Settings) -> Result<()> {
        if let Some(ref suffix) = settings.backup_suffix {
            Self::validate_suffix(suffix)?;
        }
        Ok(())
    }

    fn validate_suffix(suffix: &str) -> Result<()> {
        if suffix.is_empty() {
            return Err(Error::Validation {
                field: "backup_suffix".into(),
                message: "Suffix cannot be empty".into(),
            });
        }
        if suffix
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_whitespace())
        {
            return Err(Error::Validation {
                field: "backup_suffix".into(),
                message: format!("Suffix '{suffix}' must not contain whitespace or path separators"),
            });
        }
        Ok(())
    }
}
