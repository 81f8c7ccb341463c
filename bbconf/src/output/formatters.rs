//! Output formatter implementations.

use std::fmt::Write;

use crate::document::SectionView;
use crate::error::Error;
use crate::Result;

use super::OutputFormatter;

/// Section headings with one `label = value` line per row.
///
/// Child rows are indented under their parent.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, sections: &[SectionView]) -> Result<String> {
        let mut out = String::new();
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            // String writes cannot fail.
            let _ = writeln!(out, "[{}]", section.name);
            for row in &section.rows {
                let indent = if row.child { "    " } else { "  " };
                let _ = writeln!(out, "{indent}{} = {}  ({})", row.label, row.value, row.key);
            }
        }
        Ok(out.trim_end().to_string())
    }
}

/// Pretty-printed JSON array of sections.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, sections: &[SectionView]) -> Result<String> {
        serde_json::to_string_pretty(sections).map_err(|e| Error::Validation {
            field: "output".into(),
            message: format!("failed to serialize JSON: {e}"),
        })
    }
}
