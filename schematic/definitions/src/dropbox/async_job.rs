//! Records shared by routes that launch or poll background jobs.

use serde::{Deserialize, Serialize};

/// Identifies a background job to poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollArg {
    /// Id returned by the route that launched the job.
    pub async_job_id: String,
}

impl PollArg {
    /// Polls the job launched with `async_job_id`.
    pub fn new(async_job_id: impl Into<String>) -> Self {
        Self {
            async_job_id: async_job_id.into(),
        }
    }
}

/// Errors from polling a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PollError {
    /// The job id is unknown or has expired.
    InvalidAsyncJobId,
    /// Something went wrong with the job on the server side.
    InternalError,
    #[serde(other)]
    Other,
}

/// Result of a route that may finish immediately or hand back a job id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LaunchEmptyResult {
    /// The work continues in the background.
    AsyncJobId { async_job_id: String },
    /// The work finished synchronously.
    Complete,
    #[serde(other)]
    Other,
}

/// Result of a route that always runs in the background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum LaunchResultBase {
    AsyncJobId { async_job_id: String },
    #[serde(other)]
    Other,
}

impl LaunchEmptyResult {
    /// Returns the job id when the work was deferred.
    pub fn async_job_id(&self) -> Option<&str> {
        match self {
            Self::AsyncJobId { async_job_id } => Some(async_job_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_result_variants() {
        let deferred: LaunchEmptyResult =
            serde_json::from_str(r#"{".tag": "async_job_id", "async_job_id": "dbjid:abc"}"#)
                .unwrap();
        assert_eq!(deferred.async_job_id(), Some("dbjid:abc"));

        let done: LaunchEmptyResult = serde_json::from_str(r#"{".tag": "complete"}"#).unwrap();
        assert_eq!(done, LaunchEmptyResult::Complete);
        assert_eq!(done.async_job_id(), None);
    }

    #[test]
    fn unknown_poll_error_is_other() {
        let err: PollError = serde_json::from_str(r#"{".tag": "job_vanished"}"#).unwrap();
        assert_eq!(err, PollError::Other);
    }

    #[test]
    fn poll_arg_wire_shape() {
        let json = serde_json::to_value(PollArg::new("dbjid:1")).unwrap();
        assert_eq!(json, serde_json::json!({"async_job_id": "dbjid:1"}));
    }
}
