//! `BBCONF_*` environment variable overrides.

use std::env;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::settings::schema::Settings;

/// Enables or disables backups.
pub const BACKUP_ENV: &str = "BBCONF_BACKUP";
/// Overrides the backup suffix.
pub const BACKUP_SUFFIX_ENV: &str = "BBCONF_BACKUP_SUFFIX";
/// Overrides the default output format.
pub const OUTPUT_FORMAT_ENV: &str = "BBCONF_OUTPUT_FORMAT";

/// Applies environment overrides on top of file settings.
///
/// # Examples
///
/// ```no_run
/// use bbconf::settings::{EnvironmentSettings, Settings};
///
/// let mut settings = Settings::default();
/// EnvironmentSettings::apply_overrides(&mut settings).unwrap();
/// ```
pub struct EnvironmentSettings;

impl EnvironmentSettings {
    /// Apply every `BBCONF_*` variable that is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a value that does not parse.
    pub fn apply_overrides(settings: &mut Settings) -> Result<()> {
        if let Ok(val) = env::var(BACKUP_ENV) {
            settings.backup = Some(Self::parse_bool(BACKUP_ENV, &val)?);
        }

        if let Ok(suffix) = env::var(BACKUP_SUFFIX_ENV) {
            settings.backup_suffix = Some(suffix);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            let format = OutputFormat::parse(&format).map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            settings.output_format = Some(format);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
