#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{AuthContext, AuthProvider, NavBar};
use ui::core::{NavConfig, UserRecord};

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css).

fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("BadBank – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code signal; NavBar writes it on locale change.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    let config = use_hook(NavConfig::load_or_default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so the navbar remounts with fresh labels.
        div {
            key: "{lang_code()}",
            AuthProvider {
                DemoSignIn {}
                NavBar { config }
                main { class: "page" }
            }
        }
    }
}

/// Signs in the user named by `BADBANK_DEMO_EMAIL` / `BADBANK_DEMO_NAME`,
/// so the signed-in layout can be checked without a backend.
#[component]
fn DemoSignIn() -> Element {
    let auth = use_context::<AuthContext>();
    use_hook(move || {
        let Ok(email) = std::env::var("BADBANK_DEMO_EMAIL") else {
            return;
        };
        if let Some(local) = auth.local_observer() {
            tracing::info!(%email, "signing in demo user");
            local.sign_in(UserRecord {
                uid: email.clone(),
                display_name: std::env::var("BADBANK_DEMO_NAME").ok(),
                email: Some(email),
                photo_url: None,
            });
        }
    });
    rsx! {}
}

fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
