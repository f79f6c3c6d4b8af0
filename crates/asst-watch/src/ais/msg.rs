use crate::ais::{
	Annotation, AnnotationKind, ContentBlock, FileId, Message, MessageId, Role,
	RunId, ThreadId,
};
use async_openai::types::{
	CreateMessageRequest, MessageContent, MessageContentTextAnnotations,
	MessageObject, MessageRole,
};

// region:    --- Message Constructors

pub fn user_msg(
	content: impl Into<String>,
	file_ids: &[FileId],
) -> CreateMessageRequest {
	let file_ids = if file_ids.is_empty() {
		None
	} else {
		Some(file_ids.iter().map(|id| id.to_string()).collect())
	};

	CreateMessageRequest {
		role: "user".to_string(),
		content: content.into(),
		file_ids,
		..Default::default()
	}
}

// endregion: --- Message Constructors

// region:    --- Froms

impl From<MessageObject> for Message {
	fn from(msg: MessageObject) -> Self {
		let role = match msg.role {
			MessageRole::User => Role::User,
			MessageRole::Assistant => Role::Assistant,
		};

		Message {
			id: MessageId::from(msg.id),
			thread_id: ThreadId::from_remote(msg.thread_id),
			role,
			content: msg.content.into_iter().map(ContentBlock::from).collect(),
			created_at: msg.created_at.into(),
			run_id: msg.run_id.map(RunId::from_remote),
		}
	}
}

impl From<MessageContent> for ContentBlock {
	fn from(content: MessageContent) -> Self {
		match content {
			MessageContent::Text(text) => ContentBlock::Text {
				value: text.text.value,
				annotations: text
					.text
					.annotations
					.into_iter()
					.map(Annotation::from)
					.collect(),
			},
			MessageContent::ImageFile(img) => ContentBlock::ImageFile {
				file_id: img.image_file.file_id.into(),
			},
		}
	}
}

impl From<MessageContentTextAnnotations> for Annotation {
	fn from(annotation: MessageContentTextAnnotations) -> Self {
		match annotation {
			MessageContentTextAnnotations::FilePath(fp) => Annotation {
				kind: AnnotationKind::FilePath,
				text: fp.text,
				file_id: fp.file_path.file_id.into(),
			},
			MessageContentTextAnnotations::FileCitation(fc) => Annotation {
				kind: AnnotationKind::FileCitation,
				text: fc.text,
				file_id: fc.file_citation.file_id.into(),
			},
		}
	}
}

// endregion: --- Froms

// region:    --- Tests


// endregion: --- Tests
