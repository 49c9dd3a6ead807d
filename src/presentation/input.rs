use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        // Any keypress clears the previous action's status message.
        app.status_message = None;

        match key {
            KeyCode::F(1) | KeyCode::Char('?') => app.open_help(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                app.apply_intent(index);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help()
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help_up(1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help_down(1),
            KeyCode::PageUp => app.scroll_help_up(5),
            KeyCode::PageDown => app.scroll_help_down(5),
            KeyCode::Home => app.help_scroll = 0,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppStateManager;
    use crate::domain::{AppState, PaymentStatus};
    use crate::infrastructure::MemoryPreferences;

    fn test_app() -> App {
        App::new(AppStateManager::new(Box::new(MemoryPreferences::new())))
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_number_key_triggers_screen_action() {
        let mut app = test_app();

        press(&mut app, KeyCode::Char('1')); // finish onboarding, expired
        assert_eq!(app.manager.app_state(), AppState::Paywall);

        press(&mut app, KeyCode::Char('1')); // pay
        assert_eq!(app.manager.app_state(), AppState::App);
        assert_eq!(app.manager.payment_status(), PaymentStatus::Paid);

        press(&mut app, KeyCode::Char('2')); // expire payment
        assert_eq!(app.manager.app_state(), AppState::Paywall);
        assert_eq!(app.manager.payment_status(), PaymentStatus::Expired);
    }

    #[test]
    fn test_out_of_range_number_key_is_ignored() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.manager.app_state(), AppState::Onboarding);
    }

    #[test]
    fn test_unhandled_key_is_ignored() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.manager.app_state(), AppState::Onboarding);
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_keypress_clears_status_message() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('1'));
        assert!(app.status_message.is_some());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_help_open_and_close() {
        let mut app = test_app();

        press(&mut app, KeyCode::Char('?'));
        assert!(matches!(app.mode, AppMode::Help));

        // Number keys must not trigger actions while help is open.
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.manager.app_state(), AppState::Onboarding);

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.mode, AppMode::Normal));

        press(&mut app, KeyCode::F(1));
        assert!(matches!(app.mode, AppMode::Help));
        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_help_scrolling() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.help_scroll, 2);

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.help_scroll, 7);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.help_scroll, 6);

        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.help_scroll, 1);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.help_scroll, 0);
    }
}
