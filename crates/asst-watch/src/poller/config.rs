use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_INTERVAL_MS: u64 = 2000;
const DEFAULT_MAX_CONSECUTIVE_FAILURES: u32 = 5;
const DEFAULT_DOWNLOADS_DIR: &str = "downloads";

/// When a watch ends on its own (cancellation always ends it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopWhen {
	/// The watched run reached a terminal status.
	RunTerminal,
	/// Only on cancellation.
	Never,
}

/// The `[poller]` section of `watch.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
	pub interval_ms: u64,
	/// Consecutive failed cycles before the watch gives up. `0` never gives up.
	pub max_consecutive_failures: u32,
	pub downloads_dir: PathBuf,
	pub stop: StopWhen,
}

impl Default for PollerConfig {
	fn default() -> Self {
		Self {
			interval_ms: DEFAULT_INTERVAL_MS,
			max_consecutive_failures: DEFAULT_MAX_CONSECUTIVE_FAILURES,
			downloads_dir: PathBuf::from(DEFAULT_DOWNLOADS_DIR),
			stop: StopWhen::RunTerminal,
		}
	}
}

impl PollerConfig {
	pub fn interval(&self) -> Duration {
		Duration::from_millis(self.interval_ms)
	}

	pub(super) fn gives_up_after(&self, failures: u32) -> bool {
		self.max_consecutive_failures != 0 && failures >= self.max_consecutive_failures
	}
}
