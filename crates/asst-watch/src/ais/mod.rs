//! The `ais` module is the interface with the remote assistant service (OpenAI assistants API).
//!
//! - `asst` holds the setup sequence (assistant, files, thread, message, run creation).
//! - `api` holds the read side used by the poller, behind the `ThreadApi` trait.
//! - `msg`, `run` and `step` convert the remote objects into this crate's types.

// region:    --- Modules

mod api;
pub mod asst;
mod event;
pub mod msg;
mod run;
mod step;
mod types;

pub use api::ThreadApi;
pub use event::AisEvent;
pub use types::*;

use crate::event::EventBus;
use crate::{Error, Result};
use async_openai::config::OpenAIConfig;
use async_openai::Client;

// endregion: --- Modules

// region:    --- Client

const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

pub type OaClient = Client<OpenAIConfig>;

/// Wraps the async-openai client and provides additional functionalities
/// such as an event bus and raw http access for the endpoints
/// async-openai does not expose as bytes.
#[derive(Debug, Clone)]
pub struct AisClient {
	oa_client: OaClient,
	oa_config: OpenAIConfig,
	http: reqwest::Client,
	event_bus: EventBus,
}

impl AisClient {
	/// Client for the service at `oa_config` (api base, key, org).
	pub fn from_config(oa_config: OpenAIConfig, event_bus: EventBus) -> Self {
		AisClient {
			oa_client: Client::with_config(oa_config.clone()),
			oa_config,
			http: reqwest::Client::new(),
			event_bus,
		}
	}

	pub fn oa_client(&self) -> &OaClient {
		&self.oa_client
	}
	pub fn event_bus(&self) -> &EventBus {
		&self.event_bus
	}
	pub(crate) fn oa_config(&self) -> &OpenAIConfig {
		&self.oa_config
	}
	pub(crate) fn http(&self) -> &reqwest::Client {
		&self.http
	}
}

pub fn new_ais_client(event_bus: EventBus) -> Result<AisClient> {
	if std::env::var(ENV_OPENAI_API_KEY).is_ok() {
		Ok(AisClient::from_config(OpenAIConfig::new(), event_bus))
	} else {
		tracing::error!("No {ENV_OPENAI_API_KEY} env variable. Please set it.");

		Err(Error::NoOpenAIApiKeyInEnv)
	}
}

// endregion: --- Client
