//! Mobile drawer open/closed state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Burger activation.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        };
    }

    /// Explicit close (close button, backdrop, or a link inside the drawer).
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles_once_per_activation() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.is_open());
        drawer.toggle();
        assert_eq!(drawer, DrawerState::Open);
        drawer.toggle();
        assert_eq!(drawer, DrawerState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        let mut drawer = DrawerState::Open;
        drawer.close();
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
    }
}
