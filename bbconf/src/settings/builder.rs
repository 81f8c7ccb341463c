//! Layered settings construction.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::settings::environment::EnvironmentSettings;
use crate::settings::loader::SettingsLoader;
use crate::settings::merger::SettingsMerger;
use crate::settings::schema::Settings;
use crate::settings::validator::SettingsValidator;

/// Builds [`Settings`] from files, environment, and explicit overrides.
///
/// # Examples
///
/// ```
/// use bbconf::settings::{Settings, SettingsBuilder};
///
/// let settings = SettingsBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_settings(Settings { backup: Some(false), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert!(!settings.backup_enabled());
/// ```
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Settings>,
}

impl SettingsBuilder {
    /// Start with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to search for `bbconf.yaml` from (default: current dir).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignore settings files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `BBCONF_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Highest-precedence overrides.
    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.overrides = Some(settings);
        self
    }

    /// Merge all enabled sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file is unreadable or invalid, an
    /// environment value does not parse, or the merged settings fail
    /// validation.
    pub fn build(self) -> Result<Settings> {
        let mut settings = if self.skip_files {
            Settings::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = SettingsLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            SettingsMerger::merge(&sources)
        };

        if !self.skip_env {
            EnvironmentSettings::apply_overrides(&mut settings)?;
        }

        if let Some(ref overrides) = self.overrides {
            SettingsMerger::merge_into(&mut settings, overrides);
        }

        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}
