use crate::core::{Control, DrawerState, NavConfig, NavLink, NavVariant, Viewport};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

use super::session::{use_session, AuthContext};

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Responsive, auth-aware site navigation bar.
///
/// Must be rendered below an [`AuthProvider`](super::AuthProvider). Both the
/// desktop header and the mobile burger/drawer are rendered; media queries
/// generated from `config.breakpoint` hide the one that does not apply.
///
/// The drawer state lives here and is dropped with the component, so the
/// drawer always comes back closed after a remount.
#[component]
pub fn NavBar(#[props(default)] config: NavConfig) -> Element {
    i18n::init();

    let session = use_session();
    let drawer = use_signal(DrawerState::default);

    let mut current_lang = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("language switch to {val} failed: {err}"),
        }
    };

    let current = session();
    let desktop = NavVariant::select(Viewport::Desktop, &current, drawer());
    let mobile = NavVariant::select(Viewport::Mobile, &current, drawer());

    let (desktop_links, desktop_session): (Vec<Control>, Vec<Control>) = desktop
        .controls()
        .into_iter()
        .partition(|c| matches!(c, Control::Link(_)));

    // First mobile control is the burger; the rest only exist while open.
    let mut mobile_controls = mobile.controls().into_iter();
    let burger = mobile_controls.next();
    let (drawer_links, drawer_session): (Vec<Control>, Vec<Control>) =
        mobile_controls.partition(|c| matches!(c, Control::Link(_)));
    let drawer_open = mobile.drawer().is_open();

    let visibility_css = config.breakpoint.visibility_css();
    let brand = config.brand.clone();
    let height = config.header_height_px;
    let breakpoint = config.breakpoint;

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }
        document::Style { "{visibility_css}" }

        header {
            id: "navbar",
            class: "navbar",
            style: "height: {height}px",
            "data-breakpoint": "{breakpoint}",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    a { class: "navbar__brand-link", href: NavLink::Home.href(),
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                }

                nav { class: "navbar__links hidden-mobile",
                    { desktop_links.iter().map(|control| {
                        let c = control.clone();
                        rsx! { NavControl { key: "{c:?}", control: c, drawer } }
                    })}
                }

                div { class: "navbar__session hidden-mobile",
                    { desktop_session.iter().map(|control| {
                        let c = control.clone();
                        rsx! { NavControl { key: "{c:?}", control: c, drawer } }
                    })}
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }

                if let Some(burger) = burger {
                    div { class: "hidden-desktop",
                        NavControl { control: burger, drawer }
                    }
                }
            }
        }

        if drawer_open {
            DrawerPanel { links: drawer_links, session: drawer_session, drawer }
        }
    }
}

#[component]
fn DrawerPanel(links: Vec<Control>, session: Vec<Control>, mut drawer: Signal<DrawerState>) -> Element {
    rsx! {
        div {
            class: "navbar__drawer hidden-desktop",
            role: "dialog",
            aria_modal: "true",
            div { class: "navbar__drawer-header",
                span { class: "navbar__drawer-title", {t!("nav-drawer-title")} }
                button {
                    r#type: "button",
                    class: "navbar__drawer-close",
                    aria_label: t!("nav-close-menu"),
                    onclick: move |_| {
                        drawer.with_mut(DrawerState::close);
                        tracing::debug!("drawer closed");
                    },
                    "×"
                }
            }
            hr { class: "navbar__divider" }
            nav { class: "navbar__drawer-links",
                { links.iter().map(|control| {
                    let c = control.clone();
                    rsx! { NavControl { key: "{c:?}", control: c, drawer } }
                })}
            }
            hr { class: "navbar__divider" }
            div { class: "navbar__drawer-session",
                { session.iter().map(|control| {
                    let c = control.clone();
                    rsx! { NavControl { key: "{c:?}", control: c, drawer } }
                })}
            }
        }
    }
}

#[component]
fn NavControl(control: Control, mut drawer: Signal<DrawerState>) -> Element {
    let auth = use_context::<AuthContext>();

    match control {
        Control::Link(link) => rsx! {
            a {
                class: "navbar__link",
                href: link.href(),
                onclick: move |_| drawer.with_mut(DrawerState::close),
                {link_label(link)}
            }
        },
        Control::Login => rsx! {
            a {
                class: "button button--ghost",
                href: NavLink::Login.href(),
                onclick: move |_| drawer.with_mut(DrawerState::close),
                {t!("nav-login")}
            }
        },
        Control::SignUp => rsx! {
            a {
                class: "button button--primary",
                href: NavLink::CreateAccount.href(),
                onclick: move |_| drawer.with_mut(DrawerState::close),
                {t!("nav-sign-up")}
            }
        },
        Control::Avatar { initials, photo_url } => rsx! {
            span { class: "navbar__avatar", aria_hidden: "true",
                if let Some(url) = photo_url {
                    img { class: "navbar__avatar-img", src: "{url}", alt: "" }
                } else {
                    "{initials}"
                }
            }
        },
        Control::DisplayName(name) => rsx! {
            span {
                class: "navbar__user-name",
                title: t!("nav-avatar-alt", name = name.as_str()),
                "{name}"
            }
        },
        // Session only changes once the observer reports the sign-out.
        Control::Logout => rsx! {
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| {
                    tracing::debug!("logout requested");
                    auth.sign_out();
                },
                {t!("nav-logout")}
            }
        },
        Control::Burger { open } => {
            let (class, label) = if open {
                ("navbar__burger navbar__burger--open", t!("nav-close-menu"))
            } else {
                ("navbar__burger", t!("nav-open-menu"))
            };
            rsx! {
                button {
                    r#type: "button",
                    class,
                    aria_expanded: "{open}",
                    aria_label: label,
                    onclick: move |_| {
                        drawer.with_mut(DrawerState::toggle);
                        tracing::debug!(open = drawer.peek().is_open(), "drawer toggled");
                    },
                    span { class: "navbar__burger-bar" }
                    span { class: "navbar__burger-bar" }
                    span { class: "navbar__burger-bar" }
                }
            }
        }
    }
}

fn link_label(link: NavLink) -> String {
    match link {
        NavLink::Home => t!("nav-home"),
        NavLink::Deposit => t!("nav-deposit"),
        NavLink::Withdraw => t!("nav-withdraw"),
        NavLink::AllData => t!("nav-all-data"),
        NavLink::Login => t!("nav-login"),
        NavLink::CreateAccount => t!("nav-sign-up"),
    }
}
