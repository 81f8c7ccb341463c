//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::settings::schema::Settings;

/// File name of the user settings file inside the data directory.
pub const USER_SETTINGS_FILE: &str = "config.yaml";

/// File name of a project settings file.
pub const PROJECT_SETTINGS_FILE: &str = "bbconf.yaml";

/// Default data directory, `~/.bbconf`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".bbconf"))
}

/// One loaded settings file.
#[derive(Debug, Clone)]
pub struct SettingsSource {
    /// Where the settings came from.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed settings.
    pub settings: Settings,
}

/// Loads settings files.
///
/// # Examples
///
/// ```no_run
/// use bbconf::settings::SettingsLoader;
/// use std::path::Path;
///
/// let sources = SettingsLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} settings files", sources.len());
/// ```
pub struct SettingsLoader;

impl SettingsLoader {
    /// Discover and load all settings files, lowest precedence first.
    ///
    /// Looks for the user file `config.yaml` in `data_dir` (or
    /// [`default_data_dir`]) at precedence 1, then the nearest
    /// `bbconf.yaml` walking up from `working_dir` at precedence 2.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or
    /// parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<SettingsSource>> {
        let mut sources = Vec::new();

        let user_path = match data_dir {
            Some(dir) => dir.join(USER_SETTINGS_FILE),
            None => default_data_dir()?.join(USER_SETTINGS_FILE),
        };
        if user_path.exists() {
            let settings = Self::load_file(&user_path)?;
            sources.push(SettingsSource {
                path: user_path,
                precedence: 1,
                settings,
            });
        }

        if let Some(project_path) = Self::find_project_file(working_dir) {
            let settings = Self::load_file(&project_path)?;
            sources.push(SettingsSource {
                path: project_path,
                precedence: 2,
                settings,
            });
        }

        for source in &sources {
            log::debug!("settings loaded from {}", source.path.display());
        }
        Ok(sources)
    }

    /// Nearest `bbconf.yaml` at or above `start_dir`.
    #[must_use]
    pub fn find_project_file(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(PROJECT_SETTINGS_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Load and parse one YAML settings file. An empty file gives defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Settings`] if its YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Settings> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read settings file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| {
            log::warn!("invalid settings file {}", path.display());
            Error::from(e)
        })
    }
}
