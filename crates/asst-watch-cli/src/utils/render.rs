//! Terminal `Renderer` for the poller.

use crate::utils::cli::{ico_downloaded, ico_err, ico_res, ico_warn, txt_dim, txt_res};
use asst_watch::ais::{ContentBlock, Message, RunStep, StepDetails, ToolCall};
use asst_watch::poller::{ArtifactRef, MessageRow, Renderer, RunRow};
use console::{style, Term};
use std::path::Path;
use textwrap::wrap;

const WRAP_WIDTH: usize = 80;
const MSG_PREVIEW_WIDTH: usize = 48;

pub struct ConsoleRenderer {
	term: Term,
}

impl ConsoleRenderer {
	#[allow(clippy::new_without_default)]
	pub fn new() -> Self {
		Self {
			term: Term::stdout(),
		}
	}

	fn line(&self, line: impl AsRef<str>) {
		// a broken stdout is not worth failing a poll cycle over
		let _ = self.term.write_line(line.as_ref());
	}

	/// Clears the screen so a new snapshot replaces the previous one.
	fn replace_screen(&self) {
		let _ = self.term.clear_screen();
	}
}

impl Renderer for ConsoleRenderer {
	fn runs(&self, rows: &[RunRow]) {
		self.replace_screen();
		self.line(format!(
			"{}",
			style(format!(
				"{:<32} {:<16} {:<20} {:<20} {:<20}",
				"ID", "Status", "Created At", "Started At", "Expires At"
			))
			.bold()
			.magenta()
		));
		for row in rows {
			self.line(format!(
				"{} {} {} {} {}",
				style(format!("{:<32}", row.id)).green(),
				style(format!("{:<16}", row.status)).blue(),
				style(format!("{:<20}", row.created_at)).green(),
				style(format!("{:<20}", row.started_at)).blue(),
				style(format!("{:<20}", row.expires_at)).green(),
			));
		}
	}

	fn messages(&self, rows: &[MessageRow]) {
		self.replace_screen();
		self.line(format!(
			"{}",
			style(format!(
				"{:<32} {:<10} {:<20} {}",
				"Message ID", "Role", "Created At", "Content"
			))
			.bold()
			.magenta()
		));
		for row in rows {
			let preview = first_line_preview(&row.text);
			self.line(format!(
				"{} {} {} {}",
				style(format!("{:<32}", row.id)).green(),
				style(format!("{:<10}", row.role)).blue(),
				style(format!("{:<20}", row.created_at)).blue(),
				preview
			));
		}
	}

	fn message(&self, msg: &Message) {
		for block in msg.content.iter() {
			match block {
				ContentBlock::Text { value, .. } => {
					let text = wrap(value, WRAP_WIDTH).join("\n");
					self.line(format!("{} {}", ico_res(), txt_res(text)));
				}
				ContentBlock::ImageFile { file_id } => {
					self.line(txt_dim(format!("[image {file_id}]")).to_string());
				}
			}
		}
		self.line(format!(
			"{}",
			style(format!("{:*^width$}", format!(" {} ", msg.id), width = WRAP_WIDTH))
				.bold()
				.green()
		));
	}

	fn run_steps(&self, steps: &[RunStep]) {
		for step in steps {
			self.line(format!("Status: {}  {}", step.status, txt_dim(&step.id)));

			match &step.details {
				StepDetails::MessageCreation { message_id } => {
					self.line(txt_dim(format!("  message created: {message_id}")).to_string());
				}
				StepDetails::ToolCalls(calls) => {
					self.line("Tool calls:");
					for call in calls {
						match call {
							ToolCall::CodeInterpreter { input, logs } => {
								self.line(format!("  Input: {input}"));
								for log in logs {
									self.line(format!("  Output: {log}"));
								}
							}
							ToolCall::Retrieval => self.line("  retrieval"),
							ToolCall::Function { name, arguments } => {
								self.line(format!("  function {name}({arguments})"));
							}
						}
					}
				}
			}
		}
	}

	fn artifact_saved(&self, artifact: &ArtifactRef, file: &Path) {
		self.line(format!(
			"{} Downloaded file: {} {}",
			ico_downloaded(),
			style(&artifact.suggested_name).green(),
			txt_dim(format!("({} → {})", artifact.file_id, file.display()))
		));
	}

	fn artifact_failed(&self, artifact: &ArtifactRef, cause: &str) {
		self.line(format!(
			"{} File {} ({}) can't be downloaded: {cause}",
			ico_err(),
			artifact.suggested_name,
			artifact.file_id
		));
	}

	fn poll_failed(&self, cause: &str, consecutive: u32) {
		self.line(format!(
			"{} Poll failed ({consecutive} in a row): {cause}",
			ico_warn()
		));
	}
}

fn first_line_preview(text: &str) -> String {
	let first = text.lines().next().unwrap_or_default();
	if first.chars().count() > MSG_PREVIEW_WIDTH {
		let cut: String = first.chars().take(MSG_PREVIEW_WIDTH - 1).collect();
		format!("{cut}…")
	} else {
		first.to_string()
	}
}
