// region:    --- Modules

mod error;
mod utils;

pub use self::error::{Error, Result};
use crate::utils::cli::{ico_check, ico_err, ico_uploaded, ico_uploading, txt_dim};
use crate::utils::render::ConsoleRenderer;
use asst_watch::ais::{Order, RunId, RunStatus};
use asst_watch::event::{AisEvent, Event, EventBus};
use asst_watch::poller::{PollOutcome, Poller, Renderer, WatchTarget};
use asst_watch::{Session, SessionEvent};
use console::Term;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use utils::cli::prompt;

// endregion: --- Modules

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(io::stderr)
		.init();

	println!();
	let _ = io::stdout().flush();

	match start().await {
		Ok(_) => println!("\nBye!\n"),
		Err(e) => println!("\nError: {}\n", e),
	}
}

const DEFAULT_DIR: &str = "asst-watch";

// region:    --- Types

/// Input Command from the user
#[derive(Debug)]
enum Cmd {
	Quit,
	Submit(String),
	WatchRuns,
	WatchLog,
	Status,
	Steps,
	NewThread,
}

impl Cmd {
	fn from_input(input: impl Into<String>) -> Self {
		let input = input.into();

		if input == "/q" {
			Self::Quit
		} else if input == "/w" {
			Self::WatchRuns
		} else if input == "/l" {
			Self::WatchLog
		} else if input == "/s" {
			Self::Status
		} else if input == "/t" {
			Self::Steps
		} else if input == "/n" {
			Self::NewThread
		} else {
			Self::Submit(input)
		}
	}
}

// endregion: --- Types

async fn start() -> Result<()> {
	let event_bus = EventBus::new();

	let _ = event_printer(&event_bus).await;

	let session = Session::init_from_dir(DEFAULT_DIR, Some(event_bus)).await?;

	let renderer: Arc<dyn Renderer> = Arc::new(ConsoleRenderer::new());

	let mut thread_id = session.load_or_create_thread().await?;
	let mut last_run: Option<RunId> = None;
	// one poller per thread, so each generated file is downloaded once per session
	let mut poller = session.poller(thread_id.clone(), renderer.clone());

	loop {
		// lets the event printer flush before the prompt
		sleep(Duration::from_millis(50)).await;

		let input = prompt(&format!("{} ({})", session.name(), thread_id))?;
		let cmd = Cmd::from_input(input);

		match cmd {
			Cmd::Quit => break,

			Cmd::Submit(msg) => {
				let run_id = session.submit(&thread_id, &msg).await?;
				last_run = Some(run_id);
				poller.set_run(last_run.clone());

				if watch_until_ctrl_c(&mut poller, WatchTarget::Runs).await {
					status_pass(&mut poller).await;
				}
			}

			Cmd::WatchRuns => {
				watch_until_ctrl_c(&mut poller, WatchTarget::Runs).await;
			}

			Cmd::WatchLog => {
				watch_until_ctrl_c(&mut poller, WatchTarget::Messages(Order::Desc)).await;
			}

			Cmd::Status => status_pass(&mut poller).await,

			Cmd::Steps => match last_run.as_ref() {
				Some(run_id) => {
					if let Err(err) = poller.run_steps(run_id, Order::Asc).await {
						println!("{} Can't list run steps: {err}", ico_err());
					}
				}
				None => println!("{}", txt_dim("No run submitted in this session yet.")),
			},

			Cmd::NewThread => {
				thread_id = session.create_thread().await?;
				last_run = None;
				poller = session.poller(thread_id.clone(), renderer.clone());
			}
		}
	}

	Ok(())
}

// region:    --- Watch Support

/// Watches until the stop condition or Ctrl-C.
///
/// Returns true when the watched run finished.
async fn watch_until_ctrl_c(poller: &mut Poller, target: WatchTarget) -> bool {
	let cancel = CancellationToken::new();

	let ctrl_c_cancel = cancel.clone();
	let ctrl_c = tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			ctrl_c_cancel.cancel();
		}
	});

	let res = poller.watch(target, &cancel).await;
	ctrl_c.abort();

	match res {
		Ok(PollOutcome::Finished(run)) => {
			let ico = if run.status == RunStatus::Completed {
				ico_check()
			} else {
				ico_err()
			};
			let cause = run
				.last_error
				.map(|err| format!(" ({err})"))
				.unwrap_or_default();
			println!("{ico} Run {} {}{cause}", run.id, run.status);
			true
		}
		Ok(PollOutcome::Cancelled) => {
			println!("\n{}", txt_dim("Watch stopped."));
			false
		}
		Err(err) => {
			println!("{} Watch aborted: {err}", ico_err());
			false
		}
	}
}

async fn status_pass(poller: &mut Poller) {
	match poller.status_pass().await {
		Ok(files) if files.is_empty() => (),
		Ok(files) => println!("{} {} file(s) downloaded", ico_check(), files.len()),
		Err(err) => println!("{} Status failed: {err}", ico_err()),
	}
}

// endregion: --- Watch Support

// region:    --- Event Printer

async fn event_printer(event_bus: &EventBus) -> Result<()> {
	let mut rx = event_bus.subscribe()?;

	tokio::spawn(async move {
		let term = Term::stdout();

		loop {
			let evt = rx.recv().await;
			let _ = term.flush();

			if let Ok(evt) = evt {
				let line = match evt {
					Event::Ais(ais_evt) => match ais_evt {
						AisEvent::AsstCreated(asst_ref) => {
							format!("{} Assistant {} created", ico_check(), asst_ref.name)
						}
						AisEvent::AsstLoaded(asst_ref) => {
							format!("{} Assistant {} loaded", ico_check(), asst_ref.name)
						}
						AisEvent::AsstUpdated(asst_ref) => {
							format!("{} Assistant {} updated", ico_check(), asst_ref.name)
						}
						AisEvent::OrgFileUploading { file_name } => {
							format!("{} Uploading {}", ico_uploading(), file_name)
						}
						AisEvent::OrgFileUploaded(file_ref) => format!(
							"{} Uploaded  {} {}",
							ico_uploaded(),
							file_ref.name,
							txt_dim(file_ref.id.to_string())
						),
						AisEvent::ThreadCreated(thread_id) => {
							format!("{} Thread {} created", ico_check(), thread_id)
						}
						AisEvent::ThreadLoaded(thread_id) => {
							format!("{} Thread {} loaded", ico_check(), thread_id)
						}
						AisEvent::MessageCreated { message_id, .. } => {
							format!("{} Message {} posted", ico_check(), message_id)
						}
						AisEvent::RunCreated { run_id, .. } => {
							format!("{} Run {} started", ico_check(), run_id)
						}
					},

					Event::Session(session_evt) => match session_evt {
						SessionEvent::InstLoaded => {
							format!("{} Instructions loaded", ico_check())
						}
						SessionEvent::InputFilesUploaded { count } => {
							format!("{} {count} input file(s) ready", ico_check())
						}
						SessionEvent::RunSubmitted(run_id) => {
							format!("{} Watching run {} (Ctrl-C to stop)", ico_check(), run_id)
						}
					},
				};
				let _ = term.write_line(&line);
			} else {
				// if here, the event_bus has been dropped, nothing more to print.
				break;
			};

			let _ = term.flush();
		}
	});

	Ok(())
}

// endregion: --- Event Printer
