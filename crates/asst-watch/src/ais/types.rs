use crate::{Error, Result};
use derive_more::{Deref, Display, From};
use serde::Deserialize;

// region:    --- Asst

#[derive(Debug, Clone, From, Deref, Display)]
pub struct AsstId(String);

impl From<&AsstId> for AsstId {
	fn from(val: &AsstId) -> Self {
		val.clone()
	}
}

#[derive(Debug, Clone)]
pub struct AsstRef {
	pub name: String,
	pub id: AsstId,
}

impl AsstRef {
	pub fn new(name: impl Into<String>, id: AsstId) -> Self {
		Self {
			name: name.into(),
			id,
		}
	}
}

// endregion: --- Asst

// region:    --- File

#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Deref, Display)]
pub struct FileId(String);

impl From<&str> for FileId {
	fn from(val: &str) -> Self {
		Self(val.to_string())
	}
}

#[derive(Debug, Clone)]
pub struct FileRef {
	pub name: String,
	pub id: FileId,
}

impl FileRef {
	pub fn new(name: impl Into<String>, id: FileId) -> Self {
		Self {
			name: name.into(),
			id,
		}
	}
}

// endregion: --- File

// region:    --- Thread & Run Ids

/// Thread id. Built from untrusted input with `ThreadId::new`, which rejects
/// structurally invalid ids (empty, or containing whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Deref, Display)]
pub struct ThreadId(String);

impl ThreadId {
	pub fn new(id: impl Into<String>) -> Result<Self> {
		let id = id.into();
		if is_valid_id(&id) {
			Ok(Self(id))
		} else {
			Err(Error::InvalidThreadId(id))
		}
	}

	/// For ids returned by the remote service.
	pub(crate) fn from_remote(id: String) -> Self {
		Self(id)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
pub struct RunId(String);

impl RunId {
	pub fn new(id: impl Into<String>) -> Result<Self> {
		let id = id.into();
		if is_valid_id(&id) {
			Ok(Self(id))
		} else {
			Err(Error::InvalidRunId(id))
		}
	}

	pub(crate) fn from_remote(id: String) -> Self {
		Self(id)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Deref, Display)]
pub struct MessageId(String);

fn is_valid_id(id: &str) -> bool {
	!id.is_empty() && !id.chars().any(char::is_whitespace)
}

// endregion: --- Thread & Run Ids

// region:    --- Order

/// List order, as understood by the remote list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
	Asc,
	Desc,
}

impl Order {
	pub fn as_query(&self) -> &'static str {
		match self {
			Order::Asc => "asc",
			Order::Desc => "desc",
		}
	}
}

// endregion: --- Order

// region:    --- Run

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RunStatus {
	#[display("queued")]
	Queued,
	#[display("in_progress")]
	InProgress,
	#[display("requires_action")]
	RequiresAction,
	#[display("cancelling")]
	Cancelling,
	#[display("cancelled")]
	Cancelled,
	#[display("failed")]
	Failed,
	#[display("completed")]
	Completed,
	#[display("expired")]
	Expired,
}

impl RunStatus {
	/// Once a run reaches one of these, its status never changes again.
	pub fn is_terminal(&self) -> bool {
		matches!(
			self,
			RunStatus::Completed
				| RunStatus::Failed
				| RunStatus::Cancelled
				| RunStatus::Expired
		)
	}
}

/// A run as observed by one poll. Timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
	pub id: RunId,
	pub thread_id: ThreadId,
	pub status: RunStatus,
	pub created_at: i64,
	pub started_at: Option<i64>,
	pub expires_at: Option<i64>,
	pub completed_at: Option<i64>,
	pub failed_at: Option<i64>,
	pub cancelled_at: Option<i64>,
	pub last_error: Option<String>,
}

// endregion: --- Run

// region:    --- Message

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Role {
	#[display("user")]
	User,
	#[display("assistant")]
	Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
	pub id: MessageId,
	pub thread_id: ThreadId,
	pub role: Role,
	pub content: Vec<ContentBlock>,
	pub created_at: i64,
	pub run_id: Option<RunId>,
}

impl Message {
	/// First text value of the message, if any.
	pub fn first_text(&self) -> Option<&str> {
		self.content.iter().find_map(|block| match block {
			ContentBlock::Text { value, .. } => Some(value.as_str()),
			ContentBlock::ImageFile { .. } => None,
		})
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
	Text {
		value: String,
		annotations: Vec<Annotation>,
	},
	ImageFile {
		file_id: FileId,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
	/// A file generated by a tool (e.g. code interpreter output).
	FilePath,
	/// A quote from an uploaded file.
	FileCitation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
	pub kind: AnnotationKind,
	/// Display text, often a pseudo path such as `sandbox:/mnt/data/out.zip`.
	pub text: String,
	pub file_id: FileId,
}

// endregion: --- Message

// region:    --- RunStep

#[derive(Debug, Clone, PartialEq)]
pub struct RunStep {
	pub id: String,
	pub run_id: RunId,
	pub status: String,
	pub details: StepDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepDetails {
	MessageCreation { message_id: MessageId },
	ToolCalls(Vec<ToolCall>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
	CodeInterpreter { input: String, logs: Vec<String> },
	Retrieval,
	Function { name: String, arguments: String },
}

// endregion: --- RunStep

// region:    --- Tests


// endregion: --- Tests
