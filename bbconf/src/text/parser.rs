//! Parsing of commented config text into data plus section structure.

use serde::Serialize;

use super::scan::{scan, SectionIndex};
use super::strip::strip_all;
use crate::error::{Error, Result};
use crate::value::{ConfigData, ConfigValue};

/// Result of a successful [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedConfig {
    /// Key/value data from the JSON body.
    pub data: ConfigData,
    /// Section structure recovered from the header comments.
    pub sections: SectionIndex,
}

/// Parses commented config text.
///
/// Sections are scanned from the raw lines first, since headers are
/// comments. The comment-stripped text must then be a JSON object.
///
/// # Errors
///
/// Returns [`Error::MalformedConfigText`] if the stripped text is not valid
/// JSON or its top-level value is not an object.
///
/// # Examples
///
/// ```
/// use bbconf::text::parse;
/// use bbconf::ConfigValue;
///
/// let parsed = parse("{\n// MODS\n\"$weapon_hud\": true // on\n}").unwrap();
/// assert_eq!(parsed.data["$weapon_hud"], ConfigValue::Bool(true));
/// assert_eq!(parsed.sections.get("MODS").unwrap(), ["$weapon_hud"]);
///
/// assert!(parse("{ \"$a\": }").is_err());
/// ```
pub fn parse(text: &str) -> Result<ParsedConfig> {
    let lines: Vec<&str> = text.lines().collect();
    let sections = scan(&lines);
    let json = strip_all(&lines);

    let value: serde_json::Value = serde_json::from_str(&json).map_err(|e| Error::malformed(&e))?;
    let ConfigValue::Object(data) = ConfigValue::from(value) else {
        return Err(Error::MalformedConfigText {
            message: "top-level value must be an object".to_string(),
        });
    };

    log::debug!(
        "parsed {} keys in {} sections",
        data.len(),
        sections.len()
    );
    Ok(ParsedConfig { data, sections })
}
