//! Common test utilities for CLI integration tests.
//!
//! - Test environment setup with temporary directories
//! - Command builder helpers
//! - Config file fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A canonical config file: parsing and re-serializing it is the identity.
#[allow(dead_code)]
pub const CANONICAL: &str = r#"{
  "$bb_version": "1.0",

  "$intro_menu": true,

  // MODS
  "$weapon_hud": true,
    "$weapon_hud_offset": 5,
    "$weapon_opacity": 0.5,

  // EDITOR - crosshair
  "$cross_list": [1,2],
    "$cross_color": "red"
}
"#;

/// The same data as [`CANONICAL`], hand-written with comments and odd
/// spacing.
#[allow(dead_code)]
pub const UNFORMATTED: &str = r#"{
"$bb_version": "1.0",
"$intro_menu": true, // show the menu
// MODS
"$weapon_hud": true,
"$weapon_hud_offset": 5,
"$weapon_opacity": 0.5,
// EDITOR - crosshair
"$cross_list": [1, 2],
"$cross_color": "red"
}
"#;

/// Environment variables that would leak user settings into tests.
const SETTINGS_VARS: [&str; 5] = [
    "BBCONF_DATA_DIR",
    "BBCONF_BACKUP",
    "BBCONF_BACKUP_SUFFIX",
    "BBCONF_OUTPUT_FORMAT",
    "BBCONF_LOG_MODE",
];

/// Test environment with an isolated working and data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Directory passed as `--data-dir`
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("bbconf-data");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The bbconf binary, run in the temp directory with settings
    /// variables cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("bbconf").expect("Failed to find bbconf binary");
        cmd.current_dir(&self.temp_path);
        for var in SETTINGS_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// [`command_bare`](Self::command_bare) with `--data-dir` set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user settings file.
    pub fn write_settings(&self, yaml: &str) {
        fs::write(self.data_dir.join("config.yaml"), yaml).expect("Failed to write settings");
    }

    /// Read a file under the temp directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.temp_path.join(name)).expect("Failed to read test file")
    }

    /// Names of backup files made for `name`.
    pub fn backups_of(&self, name: &str) -> Vec<String> {
        let prefix = format!("{name}.");
        let mut found: Vec<String> = fs::read_dir(&self.temp_path)
            .expect("Failed to list temp dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|file| file.starts_with(&prefix))
            .collect();
        found.sort();
        found
    }
}
