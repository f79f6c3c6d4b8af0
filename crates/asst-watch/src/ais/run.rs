use crate::ais::{Run, RunId, RunStatus, ThreadId};
use async_openai::types::{RunObject, RunStatus as OaRunStatus};

// region:    --- Froms

impl From<OaRunStatus> for RunStatus {
	fn from(status: OaRunStatus) -> Self {
		match status {
			OaRunStatus::Queued => RunStatus::Queued,
			OaRunStatus::InProgress => RunStatus::InProgress,
			OaRunStatus::RequiresAction => RunStatus::RequiresAction,
			OaRunStatus::Cancelling => RunStatus::Cancelling,
			OaRunStatus::Cancelled => RunStatus::Cancelled,
			OaRunStatus::Failed => RunStatus::Failed,
			OaRunStatus::Completed => RunStatus::Completed,
			OaRunStatus::Expired => RunStatus::Expired,
		}
	}
}

impl From<RunObject> for Run {
	fn from(run: RunObject) -> Self {
		Run {
			id: RunId::from_remote(run.id),
			thread_id: ThreadId::from_remote(run.thread_id),
			status: run.status.into(),
			created_at: run.created_at.into(),
			started_at: run.started_at.map(i64::from),
			expires_at: run.expires_at.map(i64::from),
			completed_at: run.completed_at.map(i64::from),
			failed_at: run.failed_at.map(i64::from),
			cancelled_at: run.cancelled_at.map(i64::from),
			last_error: run.last_error.map(|err| err.message),
		}
	}
}

// endregion: --- Froms
