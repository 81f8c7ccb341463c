//! Line comment removal.
//!
//! Comments are `//` to end of line, outside string literals. String state
//! is tracked per line only; values never span lines in this format.

/// Removes a trailing `//` comment from one line.
///
/// A `"` toggles the in-string state unless the preceding character is a
/// backslash. The line's first character is never escaped.
///
/// # Examples
///
/// ```
/// use bbconf::text::strip_line;
///
/// assert_eq!(strip_line(r#""$weapon_hud": true, // toggles HUD"#), r#""$weapon_hud": true, "#);
/// assert_eq!(
///     strip_line(r#""$url_setting": "http://example.com""#),
///     r#""$url_setting": "http://example.com""#
/// );
/// ```
#[must_use]
pub fn strip_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_string = false;
    let mut prev: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' && prev != Some('\\') {
            in_string = !in_string;
        } else if !in_string && c == '/' && chars.peek() == Some(&'/') {
            break;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Strips every line and joins the results with `\n`.
#[must_use]
pub fn strip_all<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| strip_line(line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_comment() {
        assert_eq!(strip_line("  \"$a\": 1, // note"), "  \"$a\": 1, ");
    }

    #[test]
    fn test_full_comment_line_becomes_empty() {
        assert_eq!(strip_line("// MODS"), "");
        assert_eq!(strip_line("    // EDITOR - crosshair"), "    ");
    }

    #[test]
    fn test_keeps_slashes_inside_strings() {
        let line = r#""$url_setting": "http://example.com""#;
        assert_eq!(strip_line(line), line);

        let line = r#""$path": "a//b", // trailing"#;
        assert_eq!(strip_line(line), r#""$path": "a//b", "#);
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let line = r#""$label": "say \"//hi\"" // c"#;
        assert_eq!(strip_line(line), r#""$label": "say \"//hi\"" "#);
    }

    #[test]
    fn test_single_slash_is_kept() {
        assert_eq!(strip_line("\"$ratio\": \"16/9\", 1/2"), "\"$ratio\": \"16/9\", 1/2");
    }

    #[test]
    fn test_state_does_not_cross_lines() {
        let lines = ["\"$open\": \"unterminated", "// dropped"];
        assert_eq!(strip_all(&lines), "\"$open\": \"unterminated\n");
    }

    #[test]
    fn test_strip_all_joins_with_newlines() {
        let lines = vec!["{".to_string(), "// X".to_string(), "}".to_string()];
        assert_eq!(strip_all(&lines), "{\n\n}");
    }
}
