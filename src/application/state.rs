//! Terminal session state for the flow demo.
//!
//! This module wraps the flow manager with the UI-session state the
//! presentation layer needs: the current interaction mode, the status-bar
//! message, and help popup scrolling.

use crate::application::manager::AppStateManager;
use crate::domain::ScreenIntent;

/// Represents the current mode of the terminal session.
#[derive(Debug)]
pub enum AppMode {
    /// Normal interaction - number keys trigger the current screen's actions
    Normal,
    /// Help screen is displayed
    Help,
}

/// Session state wrapping the flow manager for the terminal UI.
///
/// # Examples
///
/// ```
/// use appflow::application::{App, AppStateManager};
/// use appflow::infrastructure::MemoryPreferences;
///
/// let manager = AppStateManager::new(Box::new(MemoryPreferences::new()));
/// let app = App::new(manager);
/// assert!(app.status_message.is_none());
/// ```
#[derive(Debug)]
pub struct App {
    /// The flow state manager
    pub manager: AppStateManager,
    /// Current interaction mode
    pub mode: AppMode,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl App {
    pub fn new(manager: AppStateManager) -> Self {
        Self {
            manager,
            mode: AppMode::Normal,
            status_message: None,
            help_scroll: 0,
        }
    }

    /// Applies the nth intent offered by the active screen.
    ///
    /// Out-of-range indices are ignored. A successful intent sets a status
    /// message; a persistence failure recorded by the manager replaces it.
    pub fn apply_intent(&mut self, index: usize) {
        let offered = ScreenIntent::for_state(self.manager.app_state());
        let Some(&intent) = offered.get(index) else {
            return;
        };

        self.manager.apply(intent);

        self.status_message = Some(
            match intent {
                ScreenIntent::FinishOnboarding => "Onboarding complete",
                ScreenIntent::ProcessPayment => "Payment recorded",
                ScreenIntent::ResetOnboarding => "Onboarding reset",
                ScreenIntent::ExpirePayment => "Subscription expired",
            }
            .to_string(),
        );

        if let Some(warning) = self.manager.take_store_warning() {
            self.status_message = Some(warning);
        }
    }

    /// Opens the help popup.
    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
        self.status_message = None;
    }

    /// Closes the help popup and returns to normal mode.
    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
        self.help_scroll = 0;
    }

    pub fn scroll_help_up(&mut self, lines: usize) {
        self.help_scroll = self.help_scroll.saturating_sub(lines);
    }

    pub fn scroll_help_down(&mut self, lines: usize) {
        self.help_scroll = self.help_scroll.saturating_add(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppState, PaymentStatus};
    use crate::infrastructure::MemoryPreferences;

    fn test_app() -> App {
        App::new(AppStateManager::new(Box::new(MemoryPreferences::new())))
    }

    #[test]
    fn test_app_new() {
        let app = test_app();
        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.status_message.is_none());
        assert_eq!(app.help_scroll, 0);
        assert_eq!(app.manager.app_state(), AppState::Onboarding);
    }

    #[test]
    fn test_apply_intent_forwards_to_manager() {
        let mut app = test_app();
        app.apply_intent(0);

        assert_eq!(app.manager.app_state(), AppState::Paywall);
        assert_eq!(app.status_message.as_deref(), Some("Onboarding complete"));
    }

    #[test]
    fn test_apply_intent_out_of_range_is_ignored() {
        let mut app = test_app();
        app.apply_intent(5);

        assert_eq!(app.manager.app_state(), AppState::Onboarding);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_apply_intent_status_messages() {
        let mut app = test_app();

        app.apply_intent(0); // finish onboarding -> paywall
        assert_eq!(app.status_message.as_deref(), Some("Onboarding complete"));

        app.apply_intent(0); // pay -> main app
        assert_eq!(app.status_message.as_deref(), Some("Payment recorded"));
        assert_eq!(app.manager.payment_status(), PaymentStatus::Paid);

        app.apply_intent(1); // expire -> paywall
        assert_eq!(app.status_message.as_deref(), Some("Subscription expired"));

        app.apply_intent(0); // pay again -> main app
        app.apply_intent(0); // reset -> onboarding
        assert_eq!(app.status_message.as_deref(), Some("Onboarding reset"));
        assert_eq!(app.manager.app_state(), AppState::Onboarding);
    }

    #[test]
    fn test_help_open_close() {
        let mut app = test_app();
        app.status_message = Some("stale".to_string());

        app.open_help();
        assert!(matches!(app.mode, AppMode::Help));
        assert!(app.status_message.is_none());

        app.scroll_help_down(3);
        assert_eq!(app.help_scroll, 3);
        app.scroll_help_up(1);
        assert_eq!(app.help_scroll, 2);
        app.scroll_help_up(10);
        assert_eq!(app.help_scroll, 0);

        app.close_help();
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.help_scroll, 0);
    }
}
