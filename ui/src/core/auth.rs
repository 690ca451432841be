//! Authentication observer contract plus an in-process implementation.
//!
//! The navbar never talks to an authentication backend directly. It consumes
//! an [`AuthObserver`] that pushes the current user (or `None`) whenever the
//! sign-in state changes, and that exposes a fire-and-forget `sign_out()`.
//!
//! [`LocalAuthObserver`] is the observer the shells install. Every change is
//! queued on a channel and delivered later by an [`AuthDriver`] task, so a
//! listener is never invoked from inside `subscribe` or `sign_out`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

/// User record as reported by the authentication provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl UserRecord {
    pub fn new(uid: impl Into<String>, display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: Some(display_name.into()),
            email: Some(email.into()),
            photo_url: None,
        }
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}

/// Listener invoked with the signed-in user, or `None` after sign-out.
pub type AuthCallback = Box<dyn FnMut(Option<&UserRecord>)>;

/// Push-based source of sign-in state.
pub trait AuthObserver {
    /// Register `callback`. Dropping (or unsubscribing) the returned handle
    /// removes it again.
    fn subscribe(&self, callback: AuthCallback) -> Subscription;

    /// Request sign-out. Completion is only visible through the next
    /// notification delivered to subscribers.
    fn sign_out(&self);
}

/// Disposable handle pairing a `subscribe` with exactly one release.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release the registration. Safe to call any number of times.
    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

enum AuthEvent {
    /// Deliver the current user to a freshly registered listener only.
    Replay(u64),
    /// The signed-in user changed; broadcast to every listener.
    Changed(Option<UserRecord>),
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    // `None` while the callback is being invoked by the driver.
    listeners: BTreeMap<u64, Option<AuthCallback>>,
    current: Option<UserRecord>,
}

/// In-process observer backed by an unbounded channel.
#[derive(Clone)]
pub struct LocalAuthObserver {
    registry: Rc<RefCell<Registry>>,
    tx: UnboundedSender<AuthEvent>,
}

impl LocalAuthObserver {
    /// Create the observer and the driver that must be polled to deliver
    /// notifications.
    pub fn new() -> (Self, AuthDriver) {
        let (tx, rx) = mpsc::unbounded();
        let registry = Rc::new(RefCell::new(Registry::default()));
        let driver = AuthDriver {
            registry: Rc::downgrade(&registry),
            rx,
        };
        (Self { registry, tx }, driver)
    }

    /// Report a completed sign-in.
    pub fn sign_in(&self, user: UserRecord) {
        self.send(AuthEvent::Changed(Some(user)));
    }

    /// User currently recorded by the observer, including changes that are
    /// queued but not yet delivered.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.registry.borrow().current.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    fn send(&self, event: AuthEvent) {
        if let AuthEvent::Changed(user) = &event {
            self.registry.borrow_mut().current = user.clone();
        }
        if self.tx.unbounded_send(event).is_err() {
            tracing::warn!("auth driver stopped; notification dropped");
        }
    }
}

impl AuthObserver for LocalAuthObserver {
    fn subscribe(&self, callback: AuthCallback) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.insert(id, Some(callback));
            id
        };
        tracing::debug!(listener = id, "auth listener registered");
        self.send(AuthEvent::Replay(id));

        let registry = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.remove(&id);
                tracing::debug!(listener = id, "auth listener released");
            }
        })
    }

    fn sign_out(&self) {
        self.send(AuthEvent::Changed(None));
    }
}

impl fmt::Debug for LocalAuthObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("LocalAuthObserver")
            .field("listeners", &registry.listeners.len())
            .field("current", &registry.current)
            .finish()
    }
}

/// Delivers queued notifications. Spawn [`AuthDriver::run`] on the UI
/// runtime; it finishes once every observer handle has been dropped.
pub struct AuthDriver {
    registry: Weak<RefCell<Registry>>,
    rx: UnboundedReceiver<AuthEvent>,
}

impl AuthDriver {
    pub async fn run(mut self) {
        while let Some(event) = self.rx.next().await {
            let Some(registry) = self.registry.upgrade() else {
                break;
            };
            dispatch(&registry, event);
        }
    }
}

fn dispatch(registry: &Rc<RefCell<Registry>>, event: AuthEvent) {
    let (targets, user) = match event {
        AuthEvent::Replay(id) => {
            let user = registry.borrow().current.clone();
            (vec![id], user)
        }
        AuthEvent::Changed(user) => {
            let ids = registry.borrow().listeners.keys().copied().collect();
            (ids, user)
        }
    };

    for id in targets {
        // Take the callback out so it may re-enter the registry.
        let callback = registry
            .borrow_mut()
            .listeners
            .get_mut(&id)
            .and_then(Option::take);
        let Some(mut callback) = callback else {
            continue;
        };

        callback(user.as_ref());

        // Put it back unless it unsubscribed while running.
        if let Some(slot) = registry.borrow_mut().listeners.get_mut(&id) {
            *slot = Some(callback);
        }
    }
}
