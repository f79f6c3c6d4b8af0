//! Rendering capability used by the poller.
//!
//! The poller hands ready-to-print rows to a `Renderer`. The CLI renders to the
//! terminal. Tests record what was rendered.

use crate::ais::{Message, Run, RunStep};
use crate::poller::ArtifactRef;
use crate::utils::time::{fmt_local, fmt_local_opt};
use std::path::Path;

pub trait Renderer: Send + Sync {
	/// A new runs snapshot (newest first). Replaces the previous one.
	fn runs(&self, rows: &[RunRow]);

	/// A new messages snapshot, in the order it was requested. Replaces the previous one.
	fn messages(&self, rows: &[MessageRow]);

	/// One message of a status pass, with its full content.
	fn message(&self, msg: &Message);

	fn run_steps(&self, steps: &[RunStep]);

	fn artifact_saved(&self, artifact: &ArtifactRef, file: &Path);

	fn artifact_failed(&self, artifact: &ArtifactRef, cause: &str);

	/// A poll cycle failed. `consecutive` counts failures since the last success.
	fn poll_failed(&self, cause: &str, consecutive: u32);
}

// region:    --- Rows

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRow {
	pub id: String,
	pub status: String,
	pub created_at: String,
	pub started_at: String,
	pub expires_at: String,
}

impl From<&Run> for RunRow {
	fn from(run: &Run) -> Self {
		Self {
			id: run.id.to_string(),
			status: run.status.to_string(),
			created_at: fmt_local(run.created_at),
			started_at: fmt_local_opt(run.started_at),
			expires_at: fmt_local_opt(run.expires_at),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
	pub id: String,
	pub role: String,
	/// First text block, empty when the message has none.
	pub text: String,
	pub created_at: String,
}

impl From<&Message> for MessageRow {
	fn from(msg: &Message) -> Self {
		Self {
			id: msg.id.to_string(),
			role: msg.role.to_string(),
			text: msg.first_text().unwrap_or_default().to_string(),
			created_at: fmt_local(msg.created_at),
		}
	}
}

// endregion: --- Rows

// region:    --- Tests


// endregion: --- Tests
