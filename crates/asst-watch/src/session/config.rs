use crate::ais::asst::{self, ToolKind};
use crate::poller::PollerConfig;
use serde::Deserialize;

/// The `watch.toml` content.
#[derive(Debug, Deserialize)]
pub(super) struct Config {
	pub name: String,
	pub model: String,
	pub description: Option<String>,
	/// Relative to the session dir.
	pub instructions_file: Option<String>,
	#[serde(default)]
	pub tools: Vec<ToolKind>,
	/// Relative to the session dir. Uploaded and attached to the assistant and to each message.
	#[serde(default)]
	pub input_files: Vec<String>,
	/// Attach to this thread instead of creating one.
	pub thread_id: Option<String>,
	/// Overrides the assistant instructions for each run.
	pub run_instructions: Option<String>,
	#[serde(default)]
	pub poller: PollerConfig,
}

// region:    --- Froms

impl From<&Config> for asst::CreateConfig {
	fn from(config: &Config) -> Self {
		Self {
			name: config.name.clone(),
			model: config.model.clone(),
			description: config.description.clone(),
			instructions: None,
			tools: config.tools.clone(),
			file_ids: Vec::new(),
		}
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
