//! The round-trip text engine.
//!
//! Config files are JSON with `//` line comments. Comments of the form
//! `// SECTION` or `// SECTION - qualifier` group the keys below them.
//!
//! - [`scan`] recovers the section structure from raw lines
//! - [`strip_line`] / [`strip_all`] remove comments so the text parses as JSON
//! - [`parse`] combines both into data plus a [`SectionIndex`]
//! - [`serialize`] rebuilds the text from (edited) data and the index
//! - [`format_key_name`], [`is_sub_setting`] and [`is_child_setting`]
//!   classify keys by their `$feature_category_option` naming
//!
//! All functions are pure. Parsing then serializing a file whose values
//! were edited reproduces its sections, key order and indentation.
//!
//! # Examples
//!
//! ```
//! use bbconf::text::{parse, serialize};
//! use bbconf::ConfigValue;
//!
//! let source = "{\n  // MODS\n  \"$weapon_hud\": true,\n    \"$weapon_hud_offset\": 5\n}";
//!
//! let mut parsed = parse(source).unwrap();
//! parsed.data.insert("$weapon_hud".into(), ConfigValue::Bool(false));
//!
//! let output = serialize(&parsed.data, &parsed.sections);
//! assert_eq!(output, source.replace("true", "false"));
//! ```

mod keys;
mod parser;
mod scan;
mod serializer;
mod strip;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use keys::{format_key_name, is_child_setting, is_sub_setting, TOP_LEVEL_SUFFIXES};
pub use parser::{parse, ParsedConfig};
pub use scan::{match_header, match_key, scan, SectionIndex, GENERAL_SECTION};
pub use serializer::{serialize, VERSION_KEY};
pub use strip::{strip_all, strip_line};
