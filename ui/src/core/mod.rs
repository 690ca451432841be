//! Platform-agnostic navbar state. Nothing in here touches Dioxus.

pub mod auth;
pub mod config;
pub mod drawer;
pub mod identity;
pub mod layout;
pub mod session;

pub use auth::{AuthCallback, AuthDriver, AuthObserver, LocalAuthObserver, Subscription, UserRecord};
pub use config::{ConfigError, NavConfig};
pub use drawer::DrawerState;
pub use identity::{IdentityStore, SharedIdentity, UserEmail};
pub use layout::{Breakpoint, Control, NavLink, NavVariant, Viewport};
pub use session::{Session, SessionTracker, UserProfile};
