//! The `session` module runs the setup sequence described by a `watch.toml` directory.
//!
//! A session loads (or creates) the assistant named in the config, uploads the input
//! files, and then hands out threads, submits messages/runs, and builds pollers bound
//! to a thread.
//!
//! Different use cases (instructions, tools, model, input files) are different config
//! directories, not different code.

// region:    --- Modules

mod config;
mod event;

pub use event::SessionEvent;

use crate::ais::asst::{self, CreateConfig};
use crate::ais::{new_ais_client, AisClient, AsstId, FileId, RunId, ThreadId};
use crate::event::{Event, EventBus};
use crate::poller::{Poller, Renderer};
use crate::session::config::Config;
use crate::{Error, Result};
use simple_fs::{load_toml, read_to_string};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;

// endregion: --- Modules

const WATCH_TOML: &str = "watch.toml";

#[derive(Debug)]
pub struct Session {
	dir: PathBuf,
	ais_client: Arc<AisClient>,
	asst_id: AsstId,
	config: Config,
	input_file_ids: Vec<FileId>,
	event_bus: EventBus,
}

/// Constructor functions
impl Session {
	pub async fn init_from_dir(
		dir: impl AsRef<Path>,
		event_bus: Option<EventBus>,
	) -> Result<Self> {
		let dir = dir.as_ref();

		let event_bus = event_bus.unwrap_or_else(EventBus::new);

		// -- Load from the directory
		let config: Config = load_toml(dir.join(WATCH_TOML))?;

		// -- Validate the configured thread id before any remote call
		if let Some(thread_id) = config.thread_id.as_ref() {
			ThreadId::new(thread_id.as_str())?;
		}

		let ais_client = new_ais_client(event_bus.clone())?;

		// -- Upload input files
		let input_file_ids = upload_input_files(&ais_client, dir, &config).await?;
		event_bus.send(SessionEvent::InputFilesUploaded {
			count: input_file_ids.len(),
		})?;

		// -- Get or Create the Assistant
		let mut create_config: CreateConfig = (&config).into();
		create_config.instructions = load_instructions(dir, &config)?;
		if create_config.instructions.is_some() {
			event_bus.send(SessionEvent::InstLoaded)?;
		}
		create_config.file_ids = input_file_ids.clone();

		let asst_id = asst::load_or_create(&ais_client, &create_config).await?;

		Ok(Session {
			dir: dir.to_path_buf(),
			ais_client: Arc::new(ais_client),
			asst_id,
			config,
			input_file_ids,
			event_bus,
		})
	}
}

/// Public functions
impl Session {
	pub fn name(&self) -> &str {
		&self.config.name
	}

	pub fn subscribe(&self) -> Result<Receiver<Event>> {
		self.event_bus.subscribe()
	}

	/// The configured thread when there is one, otherwise a new thread.
	pub async fn load_or_create_thread(&self) -> Result<ThreadId> {
		match self.config.thread_id.as_ref() {
			Some(thread_id) => {
				let thread_id = ThreadId::new(thread_id.as_str())?;
				asst::get_thread(&self.ais_client, &thread_id).await?;
				Ok(thread_id)
			}
			None => asst::create_thread(&self.ais_client).await,
		}
	}

	pub async fn create_thread(&self) -> Result<ThreadId> {
		asst::create_thread(&self.ais_client).await
	}

	/// Posts `msg` (with the input files attached) and starts a run for it.
	pub async fn submit(&self, thread_id: &ThreadId, msg: &str) -> Result<RunId> {
		asst::create_message(&self.ais_client, thread_id, &self.input_file_ids, msg)
			.await?;

		let run_id = asst::create_run(
			&self.ais_client,
			thread_id,
			&self.asst_id,
			self.config.run_instructions.clone(),
		)
		.await?;
		self.event_bus
			.send(SessionEvent::RunSubmitted(run_id.clone()))?;

		Ok(run_id)
	}

	/// A poller for `thread_id`. Downloads land in the configured dir, relative to the session dir.
	pub fn poller(&self, thread_id: ThreadId, renderer: Arc<dyn Renderer>) -> Poller {
		let mut poller_config = self.config.poller.clone();
		poller_config.downloads_dir = self.dir.join(&poller_config.downloads_dir);

		Poller::new(self.ais_client.clone(), renderer, thread_id, poller_config)
	}
}

// region:    --- Support

fn load_instructions(dir: &Path, config: &Config) -> Result<Option<String>> {
	let Some(inst_file) = config.instructions_file.as_ref() else {
		return Ok(None);
	};

	let file = dir.join(inst_file);
	if file.exists() {
		Ok(Some(read_to_string(&file)?))
	} else {
		Ok(None)
	}
}

async fn upload_input_files(
	ais: &AisClient,
	dir: &Path,
	config: &Config,
) -> Result<Vec<FileId>> {
	let mut file_ids = Vec::new();

	for input_file in config.input_files.iter() {
		let file = dir.join(input_file);
		if !file.is_file() {
			return Err(Error::InputFileNotFound(file.to_string_lossy().to_string()));
		}
		file_ids.push(asst::upload_file(ais, &file).await?);
	}

	Ok(file_ids)
}

// endregion: --- Support
