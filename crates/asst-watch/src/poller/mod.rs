//! The `poller` module observes a thread until its run is done.
//!
//! A `Poller` is bound to one thread (and optionally one run). Each poll cycle fetches
//! a snapshot (runs or messages), renders it when it changed since the previous cycle,
//! materializes the generated files the messages reference, and evaluates the stop
//! condition. Cycles are sequential, separated by a fixed interval.
//!
//! Failure policy:
//! - A failed cycle is reported and the watch continues on the next interval.
//!   After `max_consecutive_failures` failed cycles in a row, the watch gives up.
//! - A failed download is reported and retried on the next cycle. It never fails the cycle.

// region:    --- Modules

mod config;
mod materialize;
mod render;
mod scan;

pub use config::{PollerConfig, StopWhen};
pub use materialize::materialize;
pub use render::{MessageRow, RunRow, Renderer};
pub use scan::{scan_annotations, ArtifactRef};

use crate::ais::{Message, MessageId, Order, Run, RunId, RunStep, ThreadApi, ThreadId};
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

// endregion: --- Modules

// region:    --- Types

/// What a watch fetches and renders on each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchTarget {
	/// The runs table, newest first.
	Runs,
	/// The message log, in the given order. Generated files get materialized.
	Messages(Order),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
	/// The watched run reached a terminal status (see `RunStatus::is_terminal`).
	Finished(Run),
	Cancelled,
}

/// Per-watch bookkeeping.
#[derive(Default)]
struct WatchState {
	last_runs: Option<Vec<Run>>,
	last_msg_ids: Option<Vec<MessageId>>,
	failures: u32,
}

// endregion: --- Types

pub struct Poller {
	api: Arc<dyn ThreadApi>,
	renderer: Arc<dyn Renderer>,
	thread_id: ThreadId,
	run_id: Option<RunId>,
	config: PollerConfig,
	/// (message, annotation index) occurrences already saved.
	materialized: HashSet<(MessageId, usize)>,
}

/// Constructors
impl Poller {
	pub fn new(
		api: Arc<dyn ThreadApi>,
		renderer: Arc<dyn Renderer>,
		thread_id: ThreadId,
		config: PollerConfig,
	) -> Self {
		Self {
			api,
			renderer,
			thread_id,
			run_id: None,
			config,
			materialized: HashSet::new(),
		}
	}

	/// Watch this run for the stop condition, rather than the newest run of the thread.
	pub fn with_run(mut self, run_id: RunId) -> Self {
		self.run_id = Some(run_id);
		self
	}
}

/// Setters
impl Poller {
	/// Changes the watched run. Artifacts already saved by this poller stay saved.
	pub fn set_run(&mut self, run_id: Option<RunId>) {
		self.run_id = run_id;
	}
}

/// One-shot operations
impl Poller {
	pub fn thread_id(&self) -> &ThreadId {
		&self.thread_id
	}

	pub fn config(&self) -> &PollerConfig {
		&self.config
	}

	/// Fetches all runs (newest first) and renders them.
	pub async fn poll_runs(&self) -> Result<Vec<Run>> {
		let runs = self.api.list_runs(&self.thread_id, Order::Desc).await?;
		self.renderer.runs(&run_rows(&runs));
		Ok(runs)
	}

	/// Fetches all messages in `order` and renders them.
	pub async fn poll_messages(&self, order: Order) -> Result<Vec<Message>> {
		let msgs = self.api.list_messages(&self.thread_id, order).await?;
		self.renderer.messages(&message_rows(&msgs));
		Ok(msgs)
	}

	pub async fn run_steps(&self, run_id: &RunId, order: Order) -> Result<Vec<RunStep>> {
		let steps = self
			.api
			.list_run_steps(&self.thread_id, run_id, order)
			.await?;
		self.renderer.run_steps(&steps);
		Ok(steps)
	}

	/// Downloads one artifact into the downloads dir. Idempotent.
	pub async fn materialize(&self, artifact: &ArtifactRef) -> Result<PathBuf> {
		materialize(
			self.api.as_ref(),
			&self.config.downloads_dir,
			&artifact.file_id,
			&artifact.suggested_name,
		)
		.await
	}

	/// Renders every message oldest first and materializes the files they reference.
	///
	/// Returns the files saved by this pass.
	pub async fn status_pass(&mut self) -> Result<Vec<PathBuf>> {
		let msgs = self.api.list_messages(&self.thread_id, Order::Asc).await?;

		let mut saved = Vec::new();
		for msg in msgs.iter() {
			self.renderer.message(msg);
			saved.extend(self.materialize_new(msg).await);
		}

		Ok(saved)
	}
}

/// Watch loop
impl Poller {
	/// Polls until the stop condition holds or `cancel` is cancelled.
	///
	/// `cancel` is checked before each cycle and interrupts the sleep between cycles.
	pub async fn watch(
		&mut self,
		target: WatchTarget,
		cancel: &CancellationToken,
	) -> Result<PollOutcome> {
		let mut state = WatchState::default();

		loop {
			if cancel.is_cancelled() {
				return Ok(PollOutcome::Cancelled);
			}

			match self.cycle(target, &mut state).await {
				Ok(Some(run)) => return Ok(PollOutcome::Finished(run)),
				Ok(None) => state.failures = 0,
				Err(err) => {
					state.failures += 1;
					let cause = err.to_string();
					warn!(thread_id = %self.thread_id, failures = state.failures, %cause, "poll cycle failed");
					self.renderer.poll_failed(&cause, state.failures);

					if self.config.gives_up_after(state.failures) {
						return Err(Error::PollFailedTooManyTimes {
							failures: state.failures,
							last_cause: cause,
						});
					}
				}
			}

			tokio::select! {
				_ = cancel.cancelled() => return Ok(PollOutcome::Cancelled),
				_ = sleep(self.config.interval()) => {}
			}
		}
	}

	/// Runs `watch` on a tokio task.
	pub fn spawn(mut self, target: WatchTarget, cancel: CancellationToken) -> PollHandle {
		let task_cancel = cancel.clone();
		let task =
			tokio::spawn(async move { self.watch(target, &task_cancel).await });

		PollHandle { cancel, task }
	}

	/// Returns the watched run when it is terminal and the watch should stop.
	async fn cycle(
		&mut self,
		target: WatchTarget,
		state: &mut WatchState,
	) -> Result<Option<Run>> {
		debug!(thread_id = %self.thread_id, ?target, "poll cycle");

		match target {
			WatchTarget::Runs => {
				let runs = self.api.list_runs(&self.thread_id, Order::Desc).await?;

				if state.last_runs.as_ref() != Some(&runs) {
					self.renderer.runs(&run_rows(&runs));
				}
				let done = self.terminal_run(&runs);
				state.last_runs = Some(runs);

				done
			}

			WatchTarget::Messages(order) => {
				// Runs first, so that the messages fetched after a terminal status include the final ones.
				let done = match self.config.stop {
					StopWhen::RunTerminal => {
						let runs = self.api.list_runs(&self.thread_id, Order::Desc).await?;
						self.terminal_run(&runs)?
					}
					StopWhen::Never => None,
				};

				let msgs = self.api.list_messages(&self.thread_id, order).await?;

				let msg_ids: Vec<MessageId> = msgs.iter().map(|m| m.id.clone()).collect();
				if state.last_msg_ids.as_ref() != Some(&msg_ids) {
					self.renderer.messages(&message_rows(&msgs));
				}
				state.last_msg_ids = Some(msg_ids);

				for msg in msgs.iter() {
					self.materialize_new(msg).await;
				}

				Ok(done)
			}
		}
	}

	/// Fails when the watched run is not part of the thread.
	fn terminal_run(&self, runs: &[Run]) -> Result<Option<Run>> {
		let watched = match &self.run_id {
			Some(run_id) => {
				let run = runs.iter().find(|r| &r.id == run_id);
				Some(run.ok_or_else(|| Error::WatchedRunNotFound {
					thread_id: self.thread_id.to_string(),
					run_id: run_id.to_string(),
				})?)
			}
			None => runs.first(),
		};

		if self.config.stop == StopWhen::Never {
			return Ok(None);
		}

		Ok(watched.filter(|r| r.status.is_terminal()).cloned())
	}

	/// Materializes the artifacts of `msg` not saved yet by this poller.
	/// Failures are reported and left for the next call.
	async fn materialize_new(&mut self, msg: &Message) -> Vec<PathBuf> {
		let mut saved = Vec::new();

		for (idx, artifact) in scan_annotations(msg).enumerate() {
			let key = (msg.id.clone(), idx);
			if self.materialized.contains(&key) {
				continue;
			}

			match self.materialize(&artifact).await {
				Ok(file) => {
					self.renderer.artifact_saved(&artifact, &file);
					self.materialized.insert(key);
					saved.push(file);
				}
				Err(err) => {
					let cause = err.to_string();
					warn!(file_id = %artifact.file_id, %cause, "artifact download failed");
					self.renderer.artifact_failed(&artifact, &cause);
				}
			}
		}

		saved
	}
}

// region:    --- PollHandle

/// Completion handle of a spawned watch.
pub struct PollHandle {
	cancel: CancellationToken,
	task: JoinHandle<Result<PollOutcome>>,
}

impl PollHandle {
	pub fn cancel(&self) {
		self.cancel.cancel();
	}

	pub fn is_finished(&self) -> bool {
		self.task.is_finished()
	}

	pub async fn join(self) -> Result<PollOutcome> {
		self.task
			.await
			.map_err(|err| Error::PollerTaskJoin(err.to_string()))?
	}
}

// endregion: --- PollHandle

// region:    --- Support

fn run_rows(runs: &[Run]) -> Vec<RunRow> {
	runs.iter().map(RunRow::from).collect()
}

fn message_rows(msgs: &[Message]) -> Vec<MessageRow> {
	msgs.iter().map(MessageRow::from).collect()
}

// endregion: --- Support
