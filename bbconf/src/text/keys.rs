//! Key-name heuristics: display labels and indentation/grouping classes.
//!
//! Keys follow the `$feature_category_option` convention. Two independent
//! heuristics classify them:
//!
//! - [`is_sub_setting`] decides serializer indentation from the segment
//!   count and the second segment.
//! - [`is_child_setting`] decides display grouping from whether the
//!   two-segment parent key exists.
//!
//! The two can disagree. `$weapon_opacity` is a sub-setting (unrecognized
//! category suffix) but not a child of anything, while `$weapon_hud_offset`
//! is both. Existing files depend on each result, so they stay separate.

/// Second segments that mark a two-segment key as a top-level feature.
pub const TOP_LEVEL_SUFFIXES: [&str; 7] =
    ["hud", "counter", "timer", "list", "menu", "doll", "slots"];

fn segments(key: &str) -> Vec<&str> {
    key.strip_prefix('$').unwrap_or(key).split('_').collect()
}

/// Turns a key into a human-readable label.
///
/// Drops the leading `$`, turns `_` into spaces and upper-cases the first
/// letter of each word.
///
/// # Examples
///
/// ```
/// use bbconf::text::format_key_name;
///
/// assert_eq!(format_key_name("$weapon_hud_offset_x"), "Weapon Hud Offset X");
/// assert_eq!(format_key_name("$bb_version"), "Bb Version");
/// ```
#[must_use]
pub fn format_key_name(key: &str) -> String {
    let body = key.strip_prefix('$').unwrap_or(key);
    let mut label = String::with_capacity(body.len());
    let mut word_start = true;
    for c in body.chars() {
        let c = if c == '_' { ' ' } else { c };
        if word_start {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        word_start = c == ' ';
    }
    label
}

/// Whether a key is written one indentation level deeper on output.
///
/// # Examples
///
/// ```
/// use bbconf::text::is_sub_setting;
///
/// assert!(!is_sub_setting("$weapon_hud"));
/// assert!(is_sub_setting("$weapon_hud_offset"));
/// assert!(is_sub_setting("$weapon_opacity"));
/// assert!(!is_sub_setting("$enabled"));
/// ```
#[must_use]
pub fn is_sub_setting(key: &str) -> bool {
    match segments(key).as_slice() {
        [_, category] => !TOP_LEVEL_SUFFIXES.contains(category),
        parts => parts.len() > 2,
    }
}

/// Whether a key is displayed as subordinate to its two-segment parent.
///
/// The parent is `$` plus the first two `_` segments of `key`; it must be
/// present in `all_keys` and differ from `key`.
///
/// # Examples
///
/// ```
/// use bbconf::text::is_child_setting;
///
/// let keys = ["$weapon_hud", "$weapon_hud_offset"];
/// assert!(is_child_setting("$weapon_hud_offset", &keys));
/// assert!(!is_child_setting("$weapon_hud", &keys));
/// ```
#[must_use]
pub fn is_child_setting<S: AsRef<str>>(key: &str, all_keys: &[S]) -> bool {
    let head: Vec<&str> = segments(key).into_iter().take(2).collect();
    let parent = format!("${}", head.join("_"));
    parent != key && all_keys.iter().any(|k| k.as_ref() == parent)
}
