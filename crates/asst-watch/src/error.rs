use crate::event;
use async_openai::error::OpenAIError;
use derive_more::From;
use std::io;
use tokio::sync::broadcast;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	// -- session
	InputFileNotFound(String),

	// -- ais
	InvalidThreadId(String),
	InvalidRunId(String),
	NoOpenAIApiKeyInEnv,
	RunStepsRequestFailed {
		status: u16,
		body: String,
	},
	RunStepsParse(String),
	FileContentRequestFailed {
		file_id: String,
		status: u16,
	},

	// -- poller
	WatchedRunNotFound {
		thread_id: String,
		run_id: String,
	},
	PollFailedTooManyTimes {
		failures: u32,
		last_cause: String,
	},
	PollerTaskJoin(String),

	// -- Event
	#[from]
	BoadcastSend(broadcast::error::SendError<event::Event>),

	// -- Std
	#[from]
	IO(io::Error),

	// -- Externals
	#[from]
	SimpleFs(simple_fs::Error),
	#[from]
	OpenAI(OpenAIError),
	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate
impl core::fmt::Display for Error {
	fn fmt(
		&self,
		fmt: &mut core::fmt::Formatter,
	) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}
// endregion: --- Error Boilerplate
