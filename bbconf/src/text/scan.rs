//! Section recovery from raw config text.
//!
//! Section headers are comment lines such as `// MODS` or
//! `// EDITOR - crosshair`. Every `"$key":` line after a header belongs to
//! that section until the next header. Keys before the first header belong
//! to [`GENERAL_SECTION`].

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Name of the implicit section holding keys declared before any header.
pub const GENERAL_SECTION: &str = "General";

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*//\s*([A-Z]+(?:\s*-\s*[a-zA-Z\s]+)?)\s*$").expect("header pattern is valid")
});

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"\$([^"]+)"\s*:"#).expect("key pattern is valid"));

/// Ordered mapping from section name to the keys declared under it.
///
/// Sections iterate in order of first appearance; keys in declaration
/// order. Re-inserting an existing section name replaces its key list but
/// keeps its position.
///
/// # Examples
///
/// ```
/// use bbconf::text::SectionIndex;
///
/// let mut index = SectionIndex::new();
/// index.insert("MODS", vec!["$weapon_hud".to_string()]);
/// index.insert("EDITOR", vec!["$grid_size".to_string()]);
/// index.insert("MODS", vec!["$radar_menu".to_string()]);
///
/// let names: Vec<_> = index.names().collect();
/// assert_eq!(names, ["MODS", "EDITOR"]);
/// assert_eq!(index.get("MODS").unwrap(), ["$radar_menu"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionIndex(IndexMap<String, Vec<String>>);

impl SectionIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `keys` under `name`, replacing any previous list.
    pub fn insert(&mut self, name: impl Into<String>, keys: Vec<String>) {
        self.0.insert(name.into(), keys);
    }

    /// Keys listed under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Section names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(name, keys)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(name, keys)| (name.as_str(), keys.as_slice()))
    }

    /// Every listed key, section by section.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    /// Name of the first section listing `key`.
    #[must_use]
    pub fn section_of(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(_, keys)| keys.iter().any(|k| k == key))
            .map(|(name, _)| name)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the index has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for SectionIndex {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (name, keys) in iter {
            index.insert(name, keys);
        }
        index
    }
}

/// Header text of a section comment line, if `line` is one.
#[must_use]
pub fn match_header(line: &str) -> Option<&str> {
    HEADER_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Key (with its `$`) declared on `line`, if any.
#[must_use]
pub fn match_key(line: &str) -> Option<String> {
    KEY_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| format!("${}", m.as_str()))
}

/// Builds the section index for the given raw lines.
///
/// # Examples
///
/// ```
/// use bbconf::text::scan;
///
/// let lines = ["{", "\"$a\": 1,", "// MODS", "\"$weapon_hud\": true", "}"];
/// let index = scan(&lines);
/// assert_eq!(index.get("General").unwrap(), ["$a"]);
/// assert_eq!(index.get("MODS").unwrap(), ["$weapon_hud"]);
/// ```
#[must_use]
pub fn scan<S: AsRef<str>>(lines: &[S]) -> SectionIndex {
    let mut index = SectionIndex::new();
    let mut current = GENERAL_SECTION.to_string();
    let mut pending: Vec<String> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();

        if let Some(header) = match_header(line) {
            if !pending.is_empty() {
                log::debug!("section '{current}': {} keys", pending.len());
                index.insert(current, std::mem::take(&mut pending));
            }
            current = header.to_string();
            continue;
        }

        if let Some(key) = match_key(line) {
            pending.push(key);
        }
    }

    if !pending.is_empty() {
        log::debug!("section '{current}': {} keys", pending.len());
        index.insert(current, pending);
    }

    index
}
