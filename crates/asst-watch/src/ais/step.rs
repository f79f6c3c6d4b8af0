//! Wire shapes for the run steps list endpoint.
//!
//! Only the fields the step printer shows are modeled; everything else is ignored.

use crate::ais::{MessageId, RunId, RunStep, StepDetails, ToolCall};
use serde::Deserialize;

// region:    --- Wire Types

#[derive(Debug, Deserialize)]
pub(super) struct StepList {
	pub data: Vec<StepObject>,
	#[serde(default)]
	pub has_more: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct StepObject {
	id: String,
	run_id: String,
	status: String,
	step_details: StepDetailsObject,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StepDetailsObject {
	MessageCreation { message_creation: MessageCreation },
	ToolCalls { tool_calls: Vec<ToolCallObject> },
}

#[derive(Debug, Deserialize)]
struct MessageCreation {
	message_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ToolCallObject {
	CodeInterpreter { code_interpreter: CodeInterpreter },
	Retrieval,
	Function { function: FunctionCall },
}

#[derive(Debug, Deserialize)]
struct CodeInterpreter {
	#[serde(default)]
	input: String,
	#[serde(default)]
	outputs: Vec<CodeOutput>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum CodeOutput {
	Logs { logs: String },
	Image,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
	name: String,
	#[serde(default)]
	arguments: String,
}

// endregion: --- Wire Types

// region:    --- Froms

impl StepObject {
	pub(super) fn id(&self) -> &str {
		&self.id
	}
}

impl From<StepObject> for RunStep {
	fn from(step: StepObject) -> Self {
		let details = match step.step_details {
			StepDetailsObject::MessageCreation { message_creation } => {
				StepDetails::MessageCreation {
					message_id: MessageId::from(message_creation.message_id),
				}
			}
			StepDetailsObject::ToolCalls { tool_calls } => StepDetails::ToolCalls(
				tool_calls.into_iter().map(ToolCall::from).collect(),
			),
		};

		RunStep {
			id: step.id,
			run_id: RunId::from_remote(step.run_id),
			status: step.status,
			details,
		}
	}
}

impl From<ToolCallObject> for ToolCall {
	fn from(call: ToolCallObject) -> Self {
		match call {
			ToolCallObject::CodeInterpreter { code_interpreter } => {
				let logs = code_interpreter
					.outputs
					.into_iter()
					.filter_map(|out| match out {
						CodeOutput::Logs { logs } => Some(logs),
						CodeOutput::Image => None,
					})
					.collect();
				ToolCall::CodeInterpreter {
					input: code_interpreter.input,
					logs,
				}
			}
			ToolCallObject::Retrieval => ToolCall::Retrieval,
			ToolCallObject::Function { function } => ToolCall::Function {
				name: function.name,
				arguments: function.arguments,
			},
		}
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
