//! Text reconstruction from config data and a section index.

use std::collections::HashSet;

use super::keys::is_sub_setting;
use super::scan::{SectionIndex, GENERAL_SECTION};
use crate::value::{ConfigData, ConfigValue};

/// Key always written first, ahead of every section.
pub const VERSION_KEY: &str = "$bb_version";

const INDENT: &str = "  ";
const SUB_INDENT: &str = "    ";

/// Renders `data` as commented, indented config text.
///
/// `$bb_version` comes first. Sections follow in index order, each
/// introduced by a `// NAME` comment (except `General`) and followed by a
/// blank line. A key is written at most once and only if present in
/// `data`; keys missing from every section are not written.
///
/// # Examples
///
/// ```
/// use bbconf::text::{serialize, SectionIndex};
/// use bbconf::{ConfigData, ConfigValue};
///
/// let mut data = ConfigData::new();
/// data.insert("$weapon_hud".into(), ConfigValue::Bool(true));
/// data.insert("$weapon_hud_offset".into(), ConfigValue::from(5_i64));
///
/// let sections: SectionIndex = [(
///     "MODS",
///     vec!["$weapon_hud".to_string(), "$weapon_hud_offset".to_string()],
/// )]
/// .into_iter()
/// .collect();
///
/// assert_eq!(
///     serialize(&data, &sections),
///     "{\n  // MODS\n  \"$weapon_hud\": true,\n    \"$weapon_hud_offset\": 5\n}"
/// );
/// ```
#[must_use]
pub fn serialize(data: &ConfigData, sections: &SectionIndex) -> String {
    let mut lines: Vec<String> = vec!["{".to_string()];
    let mut written: HashSet<&str> = HashSet::new();

    if let Some(version) = data.get(VERSION_KEY) {
        lines.push(format!(
            "{INDENT}\"{VERSION_KEY}\": \"{}\",",
            version.to_plain_string()
        ));
        lines.push(String::new());
        written.insert(VERSION_KEY);
    }

    let last_section = sections.len().saturating_sub(1);
    for (position, (name, keys)) in sections.iter().enumerate() {
        if name != GENERAL_SECTION {
            lines.push(format!("{INDENT}// {name}"));
        }

        for (i, key) in keys.iter().enumerate() {
            let Some(value) = data.get(key) else {
                log::debug!("skipping '{key}': not in data");
                continue;
            };
            if !written.insert(key.as_str()) {
                continue;
            }
            let is_last = position == last_section && i + 1 == keys.len();
            lines.push(key_line(key, value, !is_last));
        }

        lines.push(String::new());
    }

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    if let Some(line) = lines.iter_mut().rev().find(|line| is_key_line(line)) {
        if line.ends_with(',') {
            line.pop();
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

fn key_line(key: &str, value: &ConfigValue, comma: bool) -> String {
    let indent = if is_sub_setting(key) { SUB_INDENT } else { INDENT };
    let comma = if comma { "," } else { "" };
    format!("{indent}\"{key}\": {}{comma}", value.encode())
}

fn is_key_line(line: &str) -> bool {
    line.trim_start().starts_with('"')
}
