use dioxus::prelude::*;

use ui::components::{AuthProvider, NavBar};
use ui::core::NavConfig;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; NavBar updates it from the locale picker.
    let lang_code = use_signal(|| ui::i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    let config = use_hook(NavConfig::load_or_default);
    tracing::debug!(breakpoint = %config.breakpoint, "web navbar config");

    rsx! {
        document::Style { "{THEME_CSS}" }

        AuthProvider {
            NavBar { config }
            main { class: "page" }
        }
    }
}
