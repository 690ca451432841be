//! Navbar labels, translated from the Fluent files under `i18n/`.
//!
//! `en-US` is the reference locale; every other locale must carry the same
//! message ids and placeholders (checked by `tests/locales.rs`). Call
//! [`init`] before the first [`t!`](crate::t) lookup.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` against [`LOADER`], e.g. `t!("nav-avatar-alt", name = "Jane")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

// Also the `.ftl` file stem.
const DOMAIN: &str = "badbank-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Pick the user's preferred locale. Only the first call does anything.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "i18n languages selected"),
            Err(err) => tracing::warn!("failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch the navbar locale. An unparsable tag is ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded locales, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
    }

    #[test]
    fn all_shipped_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn nav_labels_resolve() {
        init();
        let _ = set_language(FALLBACK_LANGUAGE);
        assert_eq!(fl!(&*LOADER, "nav-all-data"), "All Data");
        assert_eq!(fl!(&*LOADER, "nav-sign-up"), "Sign up");
    }

    #[test]
    fn unknown_language_keeps_fallback_lookups_working() {
        init();
        let _ = set_language("zz-ZZ");
        assert!(!fl!(&*LOADER, "nav-logout").is_empty());
    }
}
