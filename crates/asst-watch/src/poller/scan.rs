use crate::ais::{Annotation, AnnotationKind, ContentBlock, FileId, Message};
use crate::utils::files::base_name;

/// A generated file referenced by a message, and the local name to save it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
	pub file_id: FileId,
	pub suggested_name: String,
}

impl ArtifactRef {
	fn from_annotation(annotation: &Annotation) -> Self {
		let suggested_name = base_name(&annotation.text)
			.map(str::to_string)
			.unwrap_or_else(|| annotation.file_id.to_string());

		Self {
			file_id: annotation.file_id.clone(),
			suggested_name,
		}
	}
}

/// Generated-file references of a message, in content order.
///
/// Only `file_path` annotations of text blocks are considered. Citations point
/// to uploaded files, not generated ones.
pub fn scan_annotations(msg: &Message) -> impl Iterator<Item = ArtifactRef> + '_ {
	msg.content
		.iter()
		.filter_map(|block| match block {
			ContentBlock::Text { annotations, .. } => Some(annotations),
			ContentBlock::ImageFile { .. } => None,
		})
		.flatten()
		.filter(|a| a.kind == AnnotationKind::FilePath)
		.map(ArtifactRef::from_annotation)
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ais::{MessageId, Role, ThreadId};

	fn annotation(kind: AnnotationKind, text: &str, file_id: &str) -> Annotation {
		Annotation {
			kind,
			text: text.to_string(),
			file_id: file_id.into(),
		}
	}

	fn msg(content: Vec<ContentBlock>) -> Message {
		Message {
			id: MessageId::from("msg_1".to_string()),
			thread_id: ThreadId::from_remote("thread_1".to_string()),
			role: Role::Assistant,
			content,
			created_at: 1,
			run_id: None,
		}
	}

	#[test]
	fn test_scan_no_annotations() {
		let msg = msg(vec![
			ContentBlock::Text {
				value: "just text".to_string(),
				annotations: vec![],
			},
			ContentBlock::ImageFile {
				file_id: "file-img".into(),
			},
		]);

		assert_eq!(scan_annotations(&msg).count(), 0);
	}

	#[test]
	fn test_scan_file_paths_only_in_order() {
		let msg = msg(vec![
			ContentBlock::Text {
				value: "a".to_string(),
				annotations: vec![
					annotation(AnnotationKind::FilePath, "sandbox:/mnt/data/a.zip", "file-a"),
					annotation(AnnotationKind::FileCitation, "【7†source】", "file-doc"),
				],
			},
			ContentBlock::Text {
				value: "b".to_string(),
				annotations: vec![annotation(
					AnnotationKind::FilePath,
					"sandbox:/mnt/data/",
					"file-b",
				)],
			},
		]);

		let artifacts: Vec<ArtifactRef> = scan_annotations(&msg).collect();

		assert_eq!(
			artifacts,
			vec![
				ArtifactRef {
					file_id: "file-a".into(),
					suggested_name: "a.zip".to_string(),
				},
				ArtifactRef {
					file_id: "file-b".into(),
					suggested_name: "file-b".to_string(),
				},
			]
		);
	}

	#[test]
	fn test_scan_falls_back_to_file_id() {
		let msg = msg(vec![ContentBlock::Text {
			value: "x".to_string(),
			annotations: vec![annotation(AnnotationKind::FilePath, "..", "file-x")],
		}]);

		let names: Vec<String> =
			scan_annotations(&msg).map(|a| a.suggested_name).collect();
		assert_eq!(names, vec!["file-x".to_string()]);
	}

	#[test]
	fn test_scan_is_restartable() {
		let msg = msg(vec![ContentBlock::Text {
			value: "x".to_string(),
			annotations: vec![annotation(AnnotationKind::FilePath, "out.txt", "file-o")],
		}]);

		assert_eq!(scan_annotations(&msg).count(), 1);
		assert_eq!(scan_annotations(&msg).count(), 1);
	}
}

// endregion: --- Tests
