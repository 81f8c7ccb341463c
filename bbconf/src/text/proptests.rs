//! Property-based tests for the text engine.

use std::collections::HashSet;

use super::{
    format_key_name, is_child_setting, is_sub_setting, parse, serialize, strip_line,
    SectionIndex, GENERAL_SECTION, VERSION_KEY,
};
use crate::value::{ConfigData, ConfigValue};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(_[a-z]{1,6}){0,3}".prop_map(|body| format!("${body}"))
}

fn value_strategy() -> impl Strategy<Value = ConfigValue> {
    prop_oneof![
        any::<bool>().prop_map(ConfigValue::Bool),
        any::<i64>().prop_map(ConfigValue::from),
        "[a-zA-Z0-9 :/.-]{0,12}".prop_map(ConfigValue::String),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(|items| {
            ConfigValue::Array(items.into_iter().map(|i| ConfigValue::from(i64::from(i))).collect())
        }),
    ]
}

type RawSection = (String, Vec<(String, ConfigValue)>);

fn raw_sections_strategy() -> impl Strategy<Value = (Vec<(String, ConfigValue)>, Vec<RawSection>)> {
    let entries = || prop::collection::vec((key_strategy(), value_strategy()), 0..5);
    (
        entries(),
        prop::collection::vec(("[A-Z]{1,8}", entries()), 0..5),
    )
}

// Builds a config with unique keys and section names and no empty sections.
fn build(
    general: Vec<(String, ConfigValue)>,
    named: Vec<RawSection>,
) -> (ConfigData, SectionIndex) {
    let mut data = ConfigData::new();
    let mut sections = SectionIndex::new();
    let mut seen_sections = HashSet::new();

    let all = std::iter::once((GENERAL_SECTION.to_string(), general)).chain(named);
    for (name, entries) in all {
        if !seen_sections.insert(name.clone()) {
            continue;
        }
        let mut keys = Vec::new();
        for (key, value) in entries {
            if !data.contains_key(&key) {
                data.insert(key.clone(), value);
                keys.push(key);
            }
        }
        if !keys.is_empty() {
            sections.insert(name, keys);
        }
    }
    (data, sections)
}

// Hand-written source text: unindented, version key under the first header.
fn source_with_version_under_header(data: &ConfigData, sections: &SectionIndex) -> String {
    let mut entries: Vec<String> = Vec::new();
    let mut version_placed = false;
    for (name, keys) in sections.iter() {
        if name != GENERAL_SECTION {
            entries.push(format!("// {name}"));
            if !version_placed {
                entries.push(format!("\"{VERSION_KEY}\": \"1.0\","));
                version_placed = true;
            }
        }
        for key in keys {
            entries.push(format!("\"{key}\": {},", data[key].encode()));
        }
    }
    // Drop the comma of the final key line.
    if let Some(last) = entries.iter_mut().rev().find(|line| line.starts_with('"')) {
        last.pop();
    }
    format!("{{\n{}\n}}", entries.join("\n"))
}

fn without_version(sections: &SectionIndex) -> SectionIndex {
    sections
        .iter()
        .map(|(name, keys)| {
            let keys: Vec<String> = keys.iter().filter(|k| *k != VERSION_KEY).cloned().collect();
            (name, keys)
        })
        .filter(|(_, keys)| !keys.is_empty())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // serialize → parse reproduces data and sections, and serializing again is stable
    #[test]
    fn round_trip_is_stable((general, named) in raw_sections_strategy()) {
        let (data, sections) = build(general, named);

        let text = serialize(&data, &sections);
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(&parsed.data, &data);
        prop_assert_eq!(&parsed.sections, &sections);
        prop_assert_eq!(serialize(&parsed.data, &parsed.sections), text);
    }

    // Starting from parse: a version key under a header moves to `General`
    // on rewrite, everything else keeps its place, and the second rewrite
    // is a fixed point
    #[test]
    fn parse_first_round_trip_with_version(
        (general, named) in raw_sections_strategy(),
    ) {
        let (data, sections) = build(general, named);
        prop_assume!(!data.contains_key(VERSION_KEY));
        prop_assume!(sections.names().any(|name| name != GENERAL_SECTION));

        let source = source_with_version_under_header(&data, &sections);
        let first = parse(&source).unwrap();
        prop_assert_eq!(first.data.len(), data.len() + 1);

        let once = serialize(&first.data, &first.sections);
        let second = parse(&once).unwrap();
        prop_assert_eq!(&second.data, &first.data);
        prop_assert_eq!(second.sections.section_of(VERSION_KEY), Some(GENERAL_SECTION));
        prop_assert_eq!(without_version(&second.sections), without_version(&first.sections));

        let twice = serialize(&second.data, &second.sections);
        let third = parse(&twice).unwrap();
        prop_assert_eq!(&third.sections, &second.sections);
        prop_assert_eq!(serialize(&third.data, &third.sections), twice);
    }

    // Editing one leaf value changes exactly one line of output
    #[test]
    fn leaf_edit_changes_one_line(
        (general, named) in raw_sections_strategy(),
        pick in any::<prop::sample::Index>(),
        flag in any::<bool>(),
    ) {
        let (data, sections) = build(general, named);
        prop_assume!(!data.is_empty());

        let (key, _) = data.get_index(pick.index(data.len())).unwrap();
        let mut edited = data.clone();
        edited.insert(key.clone(), ConfigValue::Bool(flag));

        let before = serialize(&data, &sections);
        let after = serialize(&edited, &sections);
        let before_lines: Vec<&str> = before.lines().collect();
        let after_lines: Vec<&str> = after.lines().collect();
        prop_assert_eq!(before_lines.len(), after_lines.len());

        let changed: Vec<usize> = (0..before_lines.len())
            .filter(|&i| before_lines[i] != after_lines[i])
            .collect();
        prop_assert!(changed.len() <= 1);
        for i in changed {
            prop_assert!(after_lines[i].contains(key.as_str()));
        }
    }

    // Lines without any slash are never altered
    #[test]
    fn strip_without_slashes_is_identity(line in "[^/]{0,40}") {
        prop_assert_eq!(strip_line(&line), line);
    }

    // Labels never contain the sigil or underscores
    #[test]
    fn label_has_no_sigil_or_underscore(key in key_strategy()) {
        let label = format_key_name(&key);
        prop_assert!(!label.contains('_'));
        prop_assert!(!label.starts_with('$'));
        prop_assert_eq!(label.split(' ').count(), key.split('_').count());
    }

    // Three or more segments always indent; a key is never its own child
    #[test]
    fn classification_basics(key in key_strategy()) {
        if key.split('_').count() > 2 {
            prop_assert!(is_sub_setting(&key));
        }
        prop_assert!(!is_child_setting(&key, &[key.clone()]));
    }
}
