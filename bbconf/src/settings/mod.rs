//! Tool settings.
//!
//! Settings control how front ends write files and render output. They are
//! merged from these sources, highest precedence first:
//!
//! 1. Programmatic overrides ([`SettingsBuilder::with_settings`])
//! 2. Environment variables (`BBCONF_BACKUP`, `BBCONF_BACKUP_SUFFIX`,
//!    `BBCONF_OUTPUT_FORMAT`)
//! 3. Project settings (`bbconf.yaml`, nearest ancestor of the working dir)
//! 4. User settings (`~/.bbconf/config.yaml` or `<data-dir>/config.yaml`)
//! 5. Built-in defaults
//!
//! ```yaml
//! backup: true
//! backup_suffix: bak
//! output_format: human
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::SettingsBuilder;
pub use environment::EnvironmentSettings;
pub use loader::{default_data_dir, SettingsLoader, SettingsSource};
pub use merger::SettingsMerger;
pub use schema::{Settings, DEFAULT_BACKUP_SUFFIX};
pub use validator::SettingsValidator;
