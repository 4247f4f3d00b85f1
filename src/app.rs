//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform;
use crate::sink::{Enrollment, LoggingSink, SubmissionSink};
use crate::state::{
    sidebar_button_at, AppState, CommitOutcome, FieldId, FocusMove, UiArea, View, CLUB_ITEMS,
};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated enrollments go
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Focus move queued to run after the current event-handling pass
    deferred_focus: Option<FieldId>,
    /// Whether the terminal reports key release events; without them the
    /// roster falls back to moving on every press
    pub track_releases: bool,
}

impl App {
    /// Create a new App instance with the logging sink
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_sink(config, Box::new(LoggingSink))
    }

    pub fn with_sink(config: &TuiConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let mut state = AppState::default();
        if let Some(secs) = config.notification_secs {
            state = state.with_notification_ttl(Duration::from_secs(secs));
        }
        if config.start_view.as_deref() == Some("clubs") {
            state.current_view = View::Clubs;
        }

        Self {
            state,
            sink,
            quit: false,
            deferred_focus: None,
            track_releases: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-tick housekeeping: expire the notification once its TTL passes
    pub fn tick(&mut self) {
        self.state.expire_notification();
    }

    /// Run the queued focus continuation. Called once per loop iteration,
    /// after the current event's handling has fully completed.
    pub fn apply_deferred_focus(&mut self) {
        if let Some(field) = self.deferred_focus.take() {
            self.state.form.focus_to(field);
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Enroll => {
                // Repeats type like presses do; releases carry nothing here
                if key.kind != KeyEventKind::Release {
                    self.handle_enroll_key(key).await?;
                }
            }
            View::Clubs => self.handle_clubs_key(key),
        }
        Ok(())
    }

    /// Handle keys on the enrollment form
    async fn handle_enroll_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submit from anywhere (Ctrl+S / Cmd+S)
        if key.code == KeyCode::Char('s') && key.modifiers.contains(platform::SUBMIT_MODIFIER) {
            self.submit_form().await;
            return Ok(());
        }
        // Jump to the clubs browser
        if key.code == KeyCode::Char('b') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.switch_view(View::Clubs);
            return Ok(());
        }

        match key.code {
            // Unmodified forward-tab; shift-tab arrives as BackTab
            KeyCode::Tab => {
                let outcome = self.state.form.tab_advance();
                self.apply_outcome(outcome).await;
            }
            KeyCode::BackTab => self.state.form.focus_prev(),
            KeyCode::Enter => {
                let outcome = self.state.form.commit_advance();
                self.apply_outcome(outcome).await;
            }
            KeyCode::Esc => {
                if self.state.form.overlay_open() {
                    self.state.form.dismiss_overlays();
                } else if self.state.notification.is_some() {
                    self.state.dismiss_notification();
                }
            }
            KeyCode::Up | KeyCode::Left => self.state.form.direction_key(false),
            KeyCode::Down | KeyCode::Right => self.state.form.direction_key(true),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state
                    .form
                    .input_char(c, key.modifiers.contains(KeyModifiers::SHIFT));
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the clubs view. Arrow events are fed to the press
    /// observer in every kind (press, repeat, release) so held keys stay
    /// edge-triggered.
    fn handle_clubs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.state
                    .roster
                    .handle_arrow(key.code, key.kind, self.track_releases);
            }
            KeyCode::Esc if key.kind == KeyEventKind::Press => {
                if self.state.notification.is_some() {
                    self.state.dismiss_notification();
                } else {
                    self.state.switch_view(View::Enroll);
                }
            }
            KeyCode::Char('q') if key.kind == KeyEventKind::Press => {
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        if UiArea::Sidebar.contains(mouse.column, mouse.row) {
            match sidebar_button_at(mouse.row) {
                0 => self.state.switch_view(View::Enroll),
                1 => self.state.switch_view(View::Clubs),
                _ => {}
            }
        } else if self.state.current_view == View::Clubs
            && UiArea::ClubRows.contains(mouse.column, mouse.row)
        {
            let index = UiArea::ClubRows.relative_row(mouse.row) as usize;
            if index < CLUB_ITEMS.len() {
                self.state.roster.select(index);
            }
        }
    }

    async fn apply_outcome(&mut self, outcome: CommitOutcome) {
        match outcome {
            CommitOutcome::Move(FocusMove::Immediate(field)) => self.state.form.focus_to(field),
            CommitOutcome::Move(FocusMove::Deferred(field)) => self.deferred_focus = Some(field),
            CommitOutcome::Submit => self.submit_form().await,
            CommitOutcome::None => {}
        }
    }

    /// Validate and submit the form. On success the record is handed to the
    /// sink and reset to defaults; any failure leaves it untouched.
    async fn submit_form(&mut self) {
        if self.state.form.validate() {
            let enrollment = Enrollment::new(self.state.form.record.clone());
            match self.sink.submit(enrollment).await {
                Ok(()) => {
                    self.state.form.reset();
                    self.state.notify_success("Form submitted successfully!");
                }
                Err(err) => {
                    tracing::error!(%err, "submission sink rejected the enrollment");
                    self.state.notify_error("Submission failed. Please try again.");
                }
            }
        } else {
            self.state
                .notify_error("Please fill in all required fields correctly.");
        }
    }
}
