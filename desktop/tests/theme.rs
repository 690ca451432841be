#![cfg(test)]
//! Guards for the stylesheets the desktop build embeds.
//!
//! The shared theme is inlined via `include_str!` (see `src/main.rs`) and the
//! navbar stylesheet is inlined by the component in release builds. A renamed
//! class or a truncated file would only show up as broken styling at runtime,
//! so the selectors the navbar markup relies on are checked here.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const THEME_SELECTORS: &[&str] = &[
    ":root",
    "--color-accent",
    "--space-md",
    "body {",
    ".page {",
    ".visually-hidden",
    ".button {",
    ".button--primary",
    ".button--ghost",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand-link",
    ".navbar__links",
    ".navbar__link {",
    ".navbar__session",
    ".navbar__avatar",
    ".navbar__user-name",
    ".navbar__burger {",
    ".navbar__burger--open",
    ".navbar__burger-bar",
    ".navbar__drawer {",
    ".navbar__drawer-header",
    ".navbar__drawer-close",
    ".navbar__drawer-links",
    ".navbar__drawer-session",
    ".navbar__divider",
    ".navbar__locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_has_required_selectors() {
    let gone = missing(THEME_CSS, THEME_SELECTORS);
    assert!(gone.is_empty(), "theme is missing: {gone:?}");
}

#[test]
fn navbar_stylesheet_has_required_selectors() {
    let gone = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(gone.is_empty(), "navbar.css is missing: {gone:?}");
}

#[test]
fn visibility_classes_are_left_to_the_component() {
    // .hidden-mobile / .hidden-desktop come from the configured breakpoint.
    for css in [THEME_CSS, NAVBAR_CSS] {
        assert!(!css.contains(".hidden-mobile {"));
        assert!(!css.contains(".hidden-desktop {"));
    }
}

#[test]
fn stylesheets_are_not_truncated() {
    for (name, css) in [("theme", THEME_CSS), ("navbar", NAVBAR_CSS)] {
        let non_ws = css.chars().filter(|c| !c.is_whitespace()).count();
        assert!(non_ws > 1_000, "{name} looks truncated ({non_ws} chars)");
        assert_eq!(
            css.matches('{').count(),
            css.matches('}').count(),
            "{name} has unbalanced braces"
        );
    }
}
