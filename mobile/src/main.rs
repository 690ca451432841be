use dioxus::prelude::*;

use ui::components::{AuthProvider, NavBar};
use ui::core::{Breakpoint, NavConfig};

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

    // Keep the drawer layout up to tablet landscape unless navbar.json
    // picks a breakpoint.
    let config = use_hook(|| {
        NavConfig::load_or(NavConfig {
            breakpoint: Breakpoint::Xl,
            ..NavConfig::default()
        })
    });

    rsx! {
        document::Style { "{THEME_CSS}" }

        AuthProvider {
            NavBar { config }
            main { class: "page" }
        }
    }
}
