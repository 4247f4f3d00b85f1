//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::StudentRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A validated student record, stamped for handoff to the sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub record: StudentRecord,
}

impl Enrollment {
    pub fn new(record: StudentRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        }
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode enrollment: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Collaborator receiving validated enrollments. Anything beyond logging
/// (network, storage) lives behind an implementation of this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&mut self, enrollment: Enrollment) -> Result<(), SinkError>;
}
