//! Submission sink module

mod log_sink;
mod traits;

pub use log_sink::LoggingSink;
pub use traits::{Enrollment, SinkError, SubmissionSink};

#[cfg(test)]
pub use traits::MockSubmissionSink;
