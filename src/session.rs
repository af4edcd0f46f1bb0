//! Ephemeral page state: mobile drawer and scroll-to-top visibility.

use crate::scroll::past_threshold;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct UiSession {
    pub menu_open: bool,
    pub scrolled_past_threshold: bool,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum UiAction {
    ToggleMenu,
    /// A navigation link was activated; the drawer closes if it was open.
    NavActivated,
    Scrolled(f64),
}

impl UiSession {
    pub fn apply(self, action: UiAction) -> Self {
        match action {
            UiAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            UiAction::NavActivated => Self {
                menu_open: false,
                ..self
            },
            UiAction::Scrolled(offset) => Self {
                scrolled_past_threshold: past_threshold(offset),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_closed_and_at_top() {
        let session = UiSession::default();
        assert!(!session.menu_open);
        assert!(!session.scrolled_past_threshold);
    }

    #[test]
    fn nav_activation_closes_an_open_drawer() {
        let open = UiSession::default().apply(UiAction::ToggleMenu);
        assert!(open.menu_open);

        let after = open.apply(UiAction::NavActivated);
        assert!(!after.menu_open);
    }

    #[test]
    fn nav_activation_with_closed_drawer_changes_nothing() {
        let session = UiSession::default();
        assert_eq!(session.apply(UiAction::NavActivated), session);
    }

    #[test]
    fn toggling_twice_closes_again() {
        let session = UiSession::default()
            .apply(UiAction::ToggleMenu)
            .apply(UiAction::ToggleMenu);
        assert!(!session.menu_open);
    }

    #[test]
    fn scrolling_tracks_the_threshold_without_touching_the_menu() {
        let open = UiSession::default().apply(UiAction::ToggleMenu);

        let down = open.apply(UiAction::Scrolled(300.0));
        assert!(down.scrolled_past_threshold);
        assert!(down.menu_open);

        let up = down.apply(UiAction::Scrolled(299.0));
        assert!(!up.scrolled_past_threshold);
    }
}
