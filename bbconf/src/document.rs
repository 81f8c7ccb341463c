//! Edit sessions over a parsed config file.
//!
//! An [`EditSession`] owns one parse result. Front ends read display rows
//! from it, apply leaf edits, and export the re-serialized text. The section
//! index never changes during a session.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::text::{self, format_key_name, is_child_setting, ParsedConfig, SectionIndex};
use crate::value::{ConfigData, ConfigValue};

/// One key as shown to a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    /// The raw `$`-prefixed key.
    pub key: String,
    /// Human-readable label from [`format_key_name`].
    pub label: String,
    /// Whether the row is grouped under its two-segment parent key.
    pub child: bool,
    /// Current value.
    pub value: ConfigValue,
}

/// A section and its rows, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    /// Section name (`General` for keys before any header).
    pub name: String,
    /// Rows for keys present in the data.
    pub rows: Vec<DisplayRow>,
}

/// A parsed config under edit.
///
/// # Examples
///
/// ```
/// use bbconf::EditSession;
///
/// let mut session = EditSession::parse("{\n// MODS\n\"$weapon_hud\": true\n}").unwrap();
/// session.set_from_input("$weapon_hud", "false").unwrap();
/// assert!(session.is_modified());
/// assert_eq!(session.to_text(), "{\n  // MODS\n  \"$weapon_hud\": false\n}");
/// ```
#[derive(Debug, Clone)]
pub struct EditSession {
    data: ConfigData,
    sections: SectionIndex,
    modified: bool,
}

impl EditSession {
    /// Parses `text` and starts a session on the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedConfigText`] if the text does not parse.
    pub fn parse(text: &str) -> Result<Self> {
        text::parse(text).map(Self::from)
    }

    /// Current data.
    #[must_use]
    pub fn data(&self) -> &ConfigData {
        &self.data
    }

    /// Section structure recovered at parse time.
    #[must_use]
    pub fn sections(&self) -> &SectionIndex {
        &self.sections
    }

    /// Value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.data.get(key)
    }

    /// Whether any edit has been applied.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replaces the value of an existing key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] if `key` is not in the data; sessions
    /// never add keys.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<()> {
        let slot = self.data.get_mut(key).ok_or_else(|| Error::UnknownKey {
            key: key.to_string(),
        })?;
        if *slot != value {
            log::debug!("{key}: {slot} -> {value}");
            *slot = value;
            self.modified = true;
        }
        Ok(())
    }

    /// Parses `input` as the kind of value `key` currently holds and stores
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] for a missing key, and the errors of
    /// [`ConfigValue::coerce`] for input that does not fit.
    pub fn set_from_input(&mut self, key: &str, input: &str) -> Result<()> {
        let current = self.get(key).ok_or_else(|| Error::UnknownKey {
            key: key.to_string(),
        })?;
        let value = current.coerce(key, input)?;
        self.set(key, value)
    }

    /// Removes a key. The serializer skips keys missing from the data.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        let removed = self.data.shift_remove(key);
        if removed.is_some() {
            self.modified = true;
        }
        removed
    }

    /// Rows for display, grouped by section.
    ///
    /// Keys listed in the index but missing from the data are left out.
    #[must_use]
    pub fn display_rows(&self) -> Vec<SectionView> {
        let all_keys: Vec<&str> = self.data.keys().map(String::as_str).collect();
        self.sections
            .iter()
            .map(|(name, keys)| SectionView {
                name: name.to_string(),
                rows: keys
                    .iter()
                    .filter_map(|key| {
                        self.data.get(key).map(|value| DisplayRow {
                            key: key.clone(),
                            label: format_key_name(key),
                            child: is_child_setting(key, &all_keys),
                            value: value.clone(),
                        })
                    })
                    .collect(),
            })
            .collect()
    }

    /// Serializes the current data with the session's sections.
    #[must_use]
    pub fn to_text(&self) -> String {
        text::serialize(&self.data, &self.sections)
    }

    /// Consumes the session, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> ParsedConfig {
        ParsedConfig {
            data: self.data,
            sections: self.sections,
        }
    }
}

impl From<ParsedConfig> for EditSession {
    fn from(parsed: ParsedConfig) -> Self {
        Self {
            data: parsed.data,
            sections: parsed.sections,
            modified: false,
        }
    }
}
