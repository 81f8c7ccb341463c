#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bbconf
//!
//! A round-trip engine for JSON config files that group their keys under
//! `// SECTION` comment headers.
//!
//! Parsing recovers both the data and the section layout; serializing
//! rebuilds the file with the same sections, key order and indentation, so a
//! front end can edit leaf values without disturbing the rest of the file.
//!
//! ## Core Types
//!
//! - [`ConfigValue`] and [`ConfigData`]: the parsed data
//! - [`SectionIndex`]: section names mapped to their keys, in file order
//! - [`EditSession`]: a parsed file under edit, with display rows
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use bbconf::EditSession;
//!
//! let text = "{\n  \"$bb_version\": \"1.0\",\n\n\n  // MODS\n  \"$weapon_hud\": true,\n    \"$weapon_hud_offset\": 5\n}";
//!
//! let mut session = EditSession::parse(text).unwrap();
//! session.set_from_input("$weapon_hud_offset", "8").unwrap();
//!
//! assert_eq!(session.to_text(), text.replace(": 5", ": 8"));
//! ```

pub mod document;
pub mod error;
pub mod logging;
pub mod output;
pub mod settings;
pub mod text;
pub mod value;

// Re-export key types at crate root for convenience
pub use document::{DisplayRow, EditSession, SectionView};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use settings::{Settings, SettingsBuilder};
pub use text::{
    format_key_name, is_child_setting, is_sub_setting, parse, serialize, ParsedConfig,
    SectionIndex,
};
pub use value::{ConfigData, ConfigValue};
