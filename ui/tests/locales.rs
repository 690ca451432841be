//! Locale bundles must mirror the fallback: same message ids, no
//! duplicates, and the same `$variables` per message.
//!
//! Adding a locale means adding its file to `LOCALES` below.

use std::collections::{BTreeMap, BTreeSet};

const FALLBACK: (&str, &str) = ("en-US", include_str!("../i18n/en-US/badbank-ui.ftl"));

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/badbank-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/badbank-ui.ftl")),
];

/// Message id → placeholders used in its value. Panics on duplicate ids.
fn messages(locale: &str, ftl: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in ftl.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim().to_string();
        let vars = value
            .split('$')
            .skip(1)
            .map(|rest| {
                rest.chars()
                    .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
                    .collect::<String>()
            })
            .collect();
        assert!(
            out.insert(id.clone(), vars).is_none(),
            "{locale}: duplicate message `{id}`"
        );
    }
    out
}

#[test]
fn fallback_is_not_empty() {
    let (locale, ftl) = FALLBACK;
    assert!(!messages(locale, ftl).is_empty());
}

#[test]
fn every_locale_covers_the_fallback() {
    let (fallback_locale, fallback_ftl) = FALLBACK;
    let fallback = messages(fallback_locale, fallback_ftl);

    let mut problems = Vec::new();
    for (locale, ftl) in LOCALES {
        let translated = messages(locale, ftl);
        for (id, vars) in &fallback {
            match translated.get(id) {
                None => problems.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != vars => problems.push(format!(
                    "{locale}: `{id}` uses {found:?}, expected {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in translated.keys().filter(|id| !fallback.contains_key(*id)) {
            problems.push(format!("{locale}: `{id}` is not in {fallback_locale}"));
        }
    }

    assert!(problems.is_empty(), "{}", problems.join("\n"));
}
