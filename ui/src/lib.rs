//! Shared UI crate for BadBank. The navbar state machine and its components live here.

pub mod core;
pub mod i18n;

pub mod components {
    // Auth-aware responsive navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::NavBar;

    // Auth observer context + session hook (components/session.rs)
    pub mod session;
    pub use session::{use_session, AuthContext, AuthProvider};
}
