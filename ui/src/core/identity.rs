//! Shared user identity (the signed-in email) handed down the component tree.

use std::cell::RefCell;
use std::rc::Rc;

/// Single-writer cell holding the last-known email of the signed-in user.
///
/// The navbar's session subscription is the only writer; any other part of
/// the app may read it. An empty string means nobody is signed in.
pub trait IdentityStore {
    fn set_email(&mut self, email: &str);
    fn email(&self) -> String;
}

/// Plain shared identity cell for code running outside a Dioxus scope.
#[derive(Debug, Clone, Default)]
pub struct SharedIdentity(Rc<RefCell<String>>);

impl SharedIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for SharedIdentity {
    fn set_email(&mut self, email: &str) {
        let mut current = self.0.borrow_mut();
        current.clear();
        current.push_str(email);
    }

    fn email(&self) -> String {
        self.0.borrow().clone()
    }
}

/// Email value stored in the `Signal<UserEmail>` context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEmail(pub String);

impl UserEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_cell() {
        let mut writer = SharedIdentity::new();
        let reader = writer.clone();
        assert_eq!(reader.email(), "");

        writer.set_email("jane@x.com");
        assert_eq!(reader.email(), "jane@x.com");

        writer.set_email("");
        assert_eq!(reader.email(), "");
    }
}
