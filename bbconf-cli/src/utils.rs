//! Utility functions for CLI operations.
//!
//! Settings loading, config file reading and writing, and backups.

use crate::error::CliError;
use bbconf::{EditSession, Settings, SettingsBuilder};
use chrono::NaiveDateTime;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the directory holding the user settings file.
    pub data_dir: Option<PathBuf>,
}

/// Load layered settings.
///
/// Precedence, highest first: environment variables, project
/// `bbconf.yaml`, user `config.yaml`, built-in defaults.
pub fn load_settings(global: &GlobalOptions) -> Result<Settings, CliError> {
    let mut builder = SettingsBuilder::new();
    if let Some(ref dir) = global.data_dir {
        builder = builder.with_data_dir(dir);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Read a config file.
pub fn read_config(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CliError::InvalidArguments(format!("File not found: {}", path.display()))
        } else {
            CliError::Io(e)
        }
    })
}

/// Read and parse a config file into an edit session.
pub fn read_session(path: &Path) -> Result<(String, EditSession), CliError> {
    let source = read_config(path)?;
    let session = EditSession::parse(&source)?;
    log::debug!(
        "parsed {}: {} keys in {} sections",
        path.display(),
        session.data().len(),
        session.sections().len()
    );
    Ok((source, session))
}

/// Accept keys with or without the leading `$`.
pub fn normalize_key(key: &str) -> String {
    if key.starts_with('$') {
        key.to_string()
    } else {
        format!("${key}")
    }
}

/// Whether `source` already equals the serialized `text`, ignoring one
/// final newline.
pub fn is_canonical(source: &str, text: &str) -> bool {
    let source = source.strip_suffix('\n').unwrap_or(source);
    let source = source.strip_suffix('\r').unwrap_or(source);
    source == text
}

/// Backup file name for `path`: `<file>.<suffix>-<YYYYmmddHHMMSS>`.
pub fn backup_path(path: &Path, suffix: &str, timestamp: NaiveDateTime) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{suffix}-{}", timestamp.format("%Y%m%d%H%M%S")));
    path.with_file_name(name)
}

/// Where and how to write serialized text.
#[derive(Debug, Clone)]
pub struct WriteTarget<'a> {
    /// The file that was read.
    pub source: &'a Path,
    /// Alternative destination; `None` rewrites `source` in place.
    pub output: Option<&'a Path>,
    /// Skip the backup even if settings enable it.
    pub no_backup: bool,
}

/// Write `text` (plus a final newline), backing up the original first
/// when rewriting in place with backups enabled.
///
/// Returns the backup path, if one was made.
pub fn write_output(
    target: &WriteTarget<'_>,
    text: &str,
    settings: &Settings,
) -> Result<Option<PathBuf>, CliError> {
    let mut backup = None;
    let destination = match target.output {
        Some(path) => path,
        None => {
            if settings.backup_enabled() && !target.no_backup {
                let now = chrono::Local::now().naive_local();
                let path = backup_path(target.source, settings.backup_suffix(), now);
                fs::copy(target.source, &path)?;
                log::info!("Backed up {} to {}", target.source.display(), path.display());
                backup = Some(path);
            }
            target.source
        }
    };

    fs::write(destination, format!("{text}\n"))?;
    log::info!("Wrote {}", destination.display());
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 45)
            .unwrap()
    }

    #[test]
    fn test_backup_path() {
        let path = backup_path(Path::new("/cfg/bb_config.json"), "bak", timestamp());
        assert_eq!(path, PathBuf::from("/cfg/bb_config.json.bak-20240115103045"));
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("weapon_hud"), "$weapon_hud");
        assert_eq!(normalize_key("$weapon_hud"), "$weapon_hud");
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("{\n}\n", "{\n}"));
        assert!(is_canonical("{\n}\r\n", "{\n}"));
        assert!(is_canonical("{\n}", "{\n}"));
        assert!(!is_canonical("{\n}\n\n", "{\n}"));
    }

    #[test]
    fn test_read_missing_file_is_invalid_argument() {
        let err = read_config(Path::new("/nonexistent/bb_config.json")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_write_output_in_place_with_backup() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bb_config.json");
        fs::write(&file, "old").unwrap();

        let target = WriteTarget {
            source: &file,
            output: None,
            no_backup: false,
        };
        let backup = write_output(&target, "new", &Settings::default())
            .unwrap()
            .unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "new\n");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "old");
        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("bb_config.json.bak-"));
    }

    #[test]
    fn test_write_output_elsewhere_skips_backup() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("in.json");
        let out = dir.path().join("out.json");
        fs::write(&file, "old").unwrap();

        let target = WriteTarget {
            source: &file,
            output: Some(&out),
            no_backup: false,
        };
        assert!(write_output(&target, "new", &Settings::default())
            .unwrap()
            .is_none());
        assert_eq!(fs::read_to_string(&file).unwrap(), "old");
        assert_eq!(fs::read_to_string(&out).unwrap(), "new\n");
    }

    #[test]
    fn test_write_output_backup_disabled() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("in.json");
        fs::write(&file, "old").unwrap();
        let settings = Settings {
            backup: Some(false),
            ..Default::default()
        };

        let target = WriteTarget {
            source: &file,
            output: None,
            no_backup: false,
        };
        assert!(write_output(&target, "new", &settings).unwrap().is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
