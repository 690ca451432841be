use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{AuthObserver, IdentityStore, LocalAuthObserver, Session, SessionTracker, UserEmail};

/// Auth observer shared through context.
///
/// `local` is set when the observer is the in-process [`LocalAuthObserver`],
/// so shells can report sign-ins without a backend.
#[derive(Clone)]
pub struct AuthContext {
    observer: Rc<dyn AuthObserver>,
    local: Option<LocalAuthObserver>,
}

impl AuthContext {
    pub fn new(observer: Rc<dyn AuthObserver>) -> Self {
        Self {
            observer,
            local: None,
        }
    }

    pub fn local(observer: LocalAuthObserver) -> Self {
        Self {
            observer: Rc::new(observer.clone()),
            local: Some(observer),
        }
    }

    pub fn observer(&self) -> &dyn AuthObserver {
        &*self.observer
    }

    pub fn local_observer(&self) -> Option<&LocalAuthObserver> {
        self.local.as_ref()
    }

    pub fn sign_out(&self) {
        self.observer.sign_out();
    }
}

impl IdentityStore for Signal<UserEmail> {
    fn set_email(&mut self, email: &str) {
        if self.peek().as_str() != email {
            self.set(UserEmail(email.to_string()));
        }
    }

    fn email(&self) -> String {
        self.peek().0.clone()
    }
}

/// Provides the auth observer and the shared `Signal<UserEmail>` to its
/// children. Installs a [`LocalAuthObserver`] and spawns its driver.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth = use_hook(|| {
        let (observer, driver) = LocalAuthObserver::new();
        spawn(driver.run());
        AuthContext::local(observer)
    });
    use_context_provider(|| auth);

    let identity = use_signal(UserEmail::default);
    use_context_provider(|| identity);

    rsx! { {children} }
}

/// Subscribe the calling component to the auth observer for its lifetime.
///
/// The returned signal mirrors the session; the shared email signal is kept
/// in step. The subscription is released when the component unmounts.
pub fn use_session() -> Signal<Session> {
    let auth = use_context::<AuthContext>();
    let identity = use_context::<Signal<UserEmail>>();
    let mut session = use_signal(Session::default);

    let tracker = use_hook(move || {
        let tracker = SessionTracker::mount_with(auth.observer(), identity, move |next: &Session| {
            session.set(next.clone());
        });
        Rc::new(RefCell::new(tracker))
    });
    use_drop(move || tracker.borrow_mut().unmount());

    session
}
