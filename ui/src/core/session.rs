//! Session state and the bridge from an [`AuthObserver`] into it.

use std::cell::RefCell;
use std::rc::Rc;

use super::auth::{AuthObserver, Subscription, UserRecord};
use super::identity::IdentityStore;

const FALLBACK_DISPLAY_NAME: &str = "Account";

/// Authenticated half of [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
    pub photo_url: Option<String>,
}

impl UserProfile {
    /// Build a profile from a provider record. A missing or blank display
    /// name falls back to the email.
    pub fn from_record(record: &UserRecord) -> Self {
        let email = record.email.clone().unwrap_or_default();
        let display_name = record
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| (!email.is_empty()).then(|| email.clone()))
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());

        Self {
            display_name,
            email,
            photo_url: record.photo_url.clone(),
        }
    }

    /// Avatar initials: first letters of the first two words of the display
    /// name, else the first letter of the email.
    pub fn initials(&self) -> String {
        let from_name: String = self
            .display_name
            .split_whitespace()
            .filter(|word| !word.contains('@'))
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if !from_name.is_empty() {
            return from_name;
        }

        self.email
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

impl Session {
    pub fn from_user(user: Option<&UserRecord>) -> Self {
        match user {
            Some(record) => Self::Authenticated(UserProfile::from_record(record)),
            None => Self::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(profile) => Some(profile),
            Self::Anonymous => None,
        }
    }

    /// Email to publish to the identity store; empty when anonymous.
    pub fn email(&self) -> &str {
        self.profile().map(|p| p.email.as_str()).unwrap_or("")
    }
}

type ChangeHook = Box<dyn FnMut(&Session)>;

struct Tracked {
    session: Session,
    identity: Box<dyn IdentityStore>,
    on_change: Option<ChangeHook>,
}

impl Tracked {
    fn apply(&mut self, user: Option<&UserRecord>) {
        self.session = Session::from_user(user);
        self.identity.set_email(self.session.email());
        tracing::debug!(
            authenticated = self.session.is_authenticated(),
            "session updated"
        );
        if let Some(hook) = self.on_change.as_mut() {
            hook(&self.session);
        }
    }
}

/// Keeps a [`Session`] and an [`IdentityStore`] in step with an observer for
/// as long as it is mounted.
///
/// Mounting subscribes exactly once. Unmounting (explicitly or on drop)
/// releases the subscription; a notification that still reaches the stale
/// callback finds the state gone and does nothing.
pub struct SessionTracker {
    state: Rc<RefCell<Tracked>>,
    subscription: Subscription,
}

impl SessionTracker {
    pub fn mount<I>(observer: &dyn AuthObserver, identity: I) -> Self
    where
        I: IdentityStore + 'static,
    {
        Self::mount_with(observer, identity, |_| {})
    }

    /// Like [`SessionTracker::mount`], additionally calling `on_change` after
    /// every transition.
    pub fn mount_with<I, F>(observer: &dyn AuthObserver, identity: I, on_change: F) -> Self
    where
        I: IdentityStore + 'static,
        F: FnMut(&Session) + 'static,
    {
        let state = Rc::new(RefCell::new(Tracked {
            session: Session::Anonymous,
            identity: Box::new(identity),
            on_change: Some(Box::new(on_change)),
        }));

        let weak = Rc::downgrade(&state);
        let subscription = observer.subscribe(Box::new(move |user: Option<&UserRecord>| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().apply(user);
            }
        }));

        Self {
            state,
            subscription,
        }
    }

    pub fn session(&self) -> Session {
        self.state.borrow().session.clone()
    }

    pub fn email(&self) -> String {
        self.state.borrow().identity.email()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    /// Release the subscription. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.subscription.is_active() {
            self.subscription.unsubscribe();
            // No more hook calls, even from a callback already in flight.
            self.state.borrow_mut().on_change = None;
            tracing::debug!("session tracker unmounted");
        }
    }
}

impl Drop for SessionTracker {
    fn drop(&mut self) {
        self.unmount();
    }
}
