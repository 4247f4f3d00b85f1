//! Application state definitions

use super::forms::EnrollForm;
use super::notification::{Notification, NOTIFICATION_TTL};
use super::roster::RosterState;
use std::time::Duration;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Enroll,
    Clubs,
}

/// Main application state. Each controller's state is exclusively owned
/// here and mutated only by its own handlers; nothing flows between the
/// form and the roster.
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    pub form: EnrollForm,
    pub roster: RosterState,
    pub notification: Option<Notification>,
    notification_ttl: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            form: EnrollForm::new(),
            roster: RosterState::default(),
            notification: None,
            notification_ttl: NOTIFICATION_TTL,
        }
    }
}

impl AppState {
    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    /// Switch views, releasing the roster's key subscriptions when it is
    /// deactivated
    pub fn switch_view(&mut self, view: View) {
        if self.current_view == View::Clubs && view != View::Clubs {
            self.roster.deactivate();
        }
        self.current_view = view;
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::success(message).with_ttl(self.notification_ttl));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::error(message).with_ttl(self.notification_ttl));
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Drop the notification once its TTL has elapsed; called every loop tick
    pub fn expire_notification(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(Notification::is_expired)
        {
            self.notification = None;
        }
    }
}
