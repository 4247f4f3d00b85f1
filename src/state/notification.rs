//! Transient submission feedback

use std::time::{Duration, Instant};

/// How long a notification stays on screen before auto-dismissing
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A dismissible message raised after a submit attempt. Expires on its own
/// after the TTL or goes away on explicit dismissal.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    raised_at: Instant,
    ttl: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            raised_at: Instant::now(),
            ttl: NOTIFICATION_TTL,
        }
    }

    /// Override the display duration (config knob)
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_notification_is_not_expired() {
        let n = Notification::success("Form submitted successfully!");
        assert!(!n.is_expired());
        assert_eq!(n.severity, Severity::Success);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let n = Notification::error("Submission failed").with_ttl(Duration::ZERO);
        assert!(n.is_expired());
    }

    #[test]
    fn test_error_severity() {
        let n = Notification::error("Please fill in all required fields correctly.");
        assert_eq!(n.severity, Severity::Error);
    }

    #[test]
    fn test_default_ttl_is_six_seconds() {
        assert_eq!(NOTIFICATION_TTL, Duration::from_secs(6));
    }
}
