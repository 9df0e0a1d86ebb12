//! Every bundled locale defines the same labels

use fluent_syntax::ast::Entry;
use fluent_syntax::parser::parse;
use olympics_i18n::{Locale, Localizer};
use std::collections::BTreeSet;

fn message_ids(source: &str) -> BTreeSet<String> {
    let resource = parse(source).expect("bundled resource should parse");
    resource
        .body
        .iter()
        .filter_map(|entry| match entry {
            Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_all_locales_have_same_messages() {
    let english = message_ids(include_str!("../locales/en-US/main.ftl"));
    let swedish = message_ids(include_str!("../locales/sv-SE/main.ftl"));

    assert!(!english.is_empty());
    assert_eq!(english, swedish);
}

#[test]
fn test_chart_labels_resolve_in_every_locale() {
    let plain = [
        "page-title",
        "section-country",
        "section-sport",
        "axis-medals",
        "axis-age",
        "legend-east",
        "legend-west",
        "medal-gold",
        "season-winter",
    ];

    for locale in Locale::all() {
        let localizer = Localizer::new(locale).unwrap();
        for id in plain {
            assert!(localizer.has_message(id), "{id} missing in {locale}");
            assert_ne!(localizer.text(id), id);
        }
    }
}

#[test]
fn test_arguments_are_substituted_in_every_locale() {
    for locale in Locale::all() {
        let localizer = Localizer::new(locale).unwrap();
        let text = localizer.text_with(
            "mean-caption",
            &[("group", "X".to_string()), ("value", "24.5".to_string())],
        );
        assert!(text.contains("24.5"), "{locale}: {text}");
        assert!(!text.contains('{'), "{locale}: {text}");
    }
}
