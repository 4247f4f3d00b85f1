//! Logging sink: serializes enrollments into the tracing log

use super::traits::{Enrollment, SinkError, SubmissionSink};
use async_trait::async_trait;

/// The shipped sink. Writes each enrollment as a JSON line to the log;
/// network or storage delivery would replace this behind the same trait.
#[derive(Debug, Default)]
pub struct LoggingSink;

#[async_trait]
impl SubmissionSink for LoggingSink {
    async fn submit(&mut self, enrollment: Enrollment) -> Result<(), SinkError> {
        let payload = serde_json::to_string(&enrollment)?;
        tracing::info!(id = %enrollment.id, %payload, "enrollment submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StudentRecord;

    #[tokio::test]
    async fn test_submit_accepts_default_record() {
        let mut sink = LoggingSink;
        let result = sink.submit(Enrollment::new(StudentRecord::default())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_submit_accepts_filled_record() {
        let mut sink = LoggingSink;
        let record = StudentRecord {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            has_school_bus: true,
            ..Default::default()
        };
        assert!(sink.submit(Enrollment::new(record)).await.is_ok());
    }
}
