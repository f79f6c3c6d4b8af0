use crate::ais::msg::user_msg;
use crate::ais::{
	AisClient, AisEvent, AsstId, AsstRef, FileId, FileRef, RunId, ThreadId,
};
use crate::utils::files::XFile;
use crate::Result;
use async_openai::types::{
	AssistantObject, AssistantTools, AssistantToolsCode, AssistantToolsRetrieval,
	CreateAssistantRequest, CreateFileRequest, CreateRunRequest,
	CreateThreadRequest, ModifyAssistantRequest, ThreadObject,
};
use serde::Deserialize;
use std::path::Path;

// region:    --- Constants

const DEFAULT_QUERY: &[(&str, &str)] = &[("limit", "100")];
const FILE_PURPOSE_ASSISTANTS: &str = "assistants";

// endregion: --- Constants

// region:    --- Types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
	CodeInterpreter,
	Retrieval,
}

impl From<ToolKind> for AssistantTools {
	fn from(kind: ToolKind) -> Self {
		match kind {
			ToolKind::CodeInterpreter => AssistantToolsCode::default().into(),
			ToolKind::Retrieval => AssistantToolsRetrieval::default().into(),
		}
	}
}

pub struct CreateConfig {
	pub name: String,
	pub model: String,
	pub description: Option<String>,
	pub instructions: Option<String>,
	pub tools: Vec<ToolKind>,
	pub file_ids: Vec<FileId>,
}

impl CreateConfig {
	fn oa_tools(&self) -> Vec<AssistantTools> {
		self.tools.iter().copied().map(AssistantTools::from).collect()
	}

	fn oa_file_ids(&self) -> Vec<String> {
		self.file_ids.iter().map(|id| id.to_string()).collect()
	}
}

// endregion: --- Types

// region:    --- Asst CRUD

pub async fn create(ais: &AisClient, config: &CreateConfig) -> Result<AsstId> {
	let oac = ais.oa_client();

	let oa_assts = oac.assistants();

	let asst_obj = oa_assts
		.create(CreateAssistantRequest {
			model: config.model.clone(),
			name: Some(config.name.clone()),
			description: config.description.clone(),
			instructions: config.instructions.clone(),
			tools: Some(config.oa_tools()),
			file_ids: Some(config.oa_file_ids()),
			..Default::default()
		})
		.await?;

	let asst_id: AsstId = asst_obj.id.into();

	ais.event_bus().send(AisEvent::AsstCreated(AsstRef::new(
		&config.name,
		asst_id.clone(),
	)))?;

	Ok(asst_id)
}

/// Loads the assistant with the config name, or creates it.
/// A loaded assistant gets its instructions, tools and files updated from the config.
pub async fn load_or_create(ais: &AisClient, config: &CreateConfig) -> Result<AsstId> {
	let asst_obj = first_by_name(ais, &config.name).await?;

	if let Some(asst_obj) = asst_obj {
		let asst_id = AsstId::from(asst_obj.id);
		ais.event_bus().send(AisEvent::AsstLoaded(AsstRef::new(
			&config.name,
			asst_id.clone(),
		)))?;

		update(ais, &asst_id, config).await?;

		Ok(asst_id)
	} else {
		create(ais, config).await
	}
}

pub async fn first_by_name(
	ais: &AisClient,
	name: &str,
) -> Result<Option<AssistantObject>> {
	let oac = ais.oa_client();

	let oa_assts = oac.assistants();

	let assts = oa_assts.list(DEFAULT_QUERY).await?.data;

	let asst_obj = assts
		.into_iter()
		.find(|a| a.name.as_ref().map(|n| n == name).unwrap_or(false));

	Ok(asst_obj)
}

pub async fn update(
	ais: &AisClient,
	asst_id: &AsstId,
	config: &CreateConfig,
) -> Result<()> {
	let oac = ais.oa_client();

	let oa_assts = oac.assistants();
	let modif = ModifyAssistantRequest {
		model: Some(config.model.clone()),
		description: config.description.clone(),
		instructions: config.instructions.clone(),
		tools: Some(config.oa_tools()),
		file_ids: Some(config.oa_file_ids()),
		..Default::default()
	};
	oa_assts.update(asst_id, modif).await?;

	ais.event_bus().send(AisEvent::AsstUpdated(AsstRef::new(
		&config.name,
		asst_id.clone(),
	)))?;

	Ok(())
}

// endregion: --- Asst CRUD

// region:    --- Thread

pub async fn create_thread(ais: &AisClient) -> Result<ThreadId> {
	let oac = ais.oa_client();

	let oa_threads = oac.threads();

	let res = oa_threads
		.create(CreateThreadRequest {
			..Default::default()
		})
		.await?;

	let thread_id = ThreadId::from_remote(res.id);
	ais.event_bus()
		.send(AisEvent::ThreadCreated(thread_id.clone()))?;

	Ok(thread_id)
}

pub async fn get_thread(
	ais: &AisClient,
	thread_id: &ThreadId,
) -> Result<ThreadObject> {
	let oac = ais.oa_client();

	let oa_threads = oac.threads();

	let thread_obj = oa_threads.retrieve(thread_id).await?;

	ais.event_bus()
		.send(AisEvent::ThreadLoaded(thread_id.clone()))?;

	Ok(thread_obj)
}

/// Attaches a user message (with optional file attachments) to the thread.
///
/// Returns the message id.
pub async fn create_message(
	ais: &AisClient,
	thread_id: &ThreadId,
	file_ids: &[FileId],
	content: &str,
) -> Result<String> {
	let oac = ais.oa_client();

	let oa_threads = oac.threads();
	let msg_obj = oa_threads
		.messages(thread_id)
		.create(user_msg(content, file_ids))
		.await?;

	ais.event_bus().send(AisEvent::MessageCreated {
		thread_id: thread_id.clone(),
		message_id: msg_obj.id.clone(),
	})?;

	Ok(msg_obj.id)
}

pub async fn create_run(
	ais: &AisClient,
	thread_id: &ThreadId,
	asst_id: &AsstId,
	instructions: Option<String>,
) -> Result<RunId> {
	let oac = ais.oa_client();

	let run_request = CreateRunRequest {
		assistant_id: asst_id.to_string(),
		instructions,
		..Default::default()
	};
	let oa_threads = oac.threads();
	let run = oa_threads.runs(thread_id).create(run_request).await?;

	let run_id = RunId::from_remote(run.id);
	ais.event_bus().send(AisEvent::RunCreated {
		thread_id: thread_id.clone(),
		run_id: run_id.clone(),
	})?;

	Ok(run_id)
}

// endregion: --- Thread

// region:    --- Files

/// Uploads a local file to the account files with the `assistants` purpose.
pub async fn upload_file(ais: &AisClient, file: &Path) -> Result<FileId> {
	upload_file_with_purpose(ais, file, FILE_PURPOSE_ASSISTANTS).await
}

pub async fn upload_file_with_purpose(
	ais: &AisClient,
	file: &Path,
	purpose: &str,
) -> Result<FileId> {
	let oac = ais.oa_client();

	let file_name = file.x_file_name().to_string();
	ais.event_bus().send(AisEvent::OrgFileUploading {
		file_name: file_name.clone(),
	})?;

	let oa_files = oac.files();
	let oa_file = oa_files
		.create(CreateFileRequest {
			file: file.into(),
			purpose: purpose.into(),
		})
		.await?;

	let file_id: FileId = oa_file.id.into();
	ais.event_bus()
		.send(AisEvent::OrgFileUploaded(FileRef::new(
			file_name,
			file_id.clone(),
		)))?;

	Ok(file_id)
}

// endregion: --- Files
