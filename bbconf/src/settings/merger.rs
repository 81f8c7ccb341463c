//! Settings merging.

use crate::settings::loader::SettingsSource;
use crate::settings::schema::Settings;

/// Merges settings layers; later layers win field by field.
///
/// # Examples
///
/// ```
/// use bbconf::settings::{Settings, SettingsMerger};
///
/// let mut result = Settings { backup: Some(true), ..Default::default() };
/// let high = Settings { backup_suffix: Some("orig".into()), ..Default::default() };
/// SettingsMerger::merge_into(&mut result, &high);
///
/// assert_eq!(result.backup, Some(true));
/// assert_eq!(result.backup_suffix.as_deref(), Some("orig"));
/// ```
pub struct SettingsMerger;

impl SettingsMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: &[SettingsSource]) -> Settings {
        let mut result = Settings::default();
        for source in sources {
            Self::merge_into(&mut result, &source.settings);
        }
        result
    }

    /// Overwrite each field of `target` that `source` sets.
    pub fn merge_into(target: &mut Settings, source: &Settings) {
        if source.backup.is_some() {
            target.backup = source.backup;
        }
        if source.backup_suffix.is_some() {
            target.backup_suffix.clone_from(&source.backup_suffix);
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    fn source(precedence: u8, settings: Settings) -> SettingsSource {
        SettingsSource {
            path: PathBuf::from(format!("/tmp/{precedence}.yaml")),
            precedence,
            settings,
        }
    }

    #[test]
    fn test_merge_later_wins() {
        let sources = vec![
            source(
                1,
                Settings {
                    backup: Some(false),
                    backup_suffix: Some("user".into()),
                    output_format: None,
                },
            ),
            source(
                2,
                Settings {
                    backup_suffix: Some("project".into()),
                    output_format: Some(OutputFormat::Json),
                    ..Default::default()
                },
            ),
        ];

        let merged = SettingsMerger::merge(&sources);
        assert_eq!(merged.backup, Some(false));
        assert_eq!(merged.backup_suffix.as_deref(), Some("project"));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_nothing() {
        assert_eq!(SettingsMerger::merge(&[]), Settings::default());
    }
}
