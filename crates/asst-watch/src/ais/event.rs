//! Ais Event

use crate::ais::{AsstRef, FileRef, RunId, ThreadId};

#[derive(Debug, Clone)]
pub enum AisEvent {
	// -- Asst Events
	AsstCreated(AsstRef),
	AsstLoaded(AsstRef),
	AsstUpdated(AsstRef),

	// -- File Events
	OrgFileUploading {
		file_name: String,
	},
	OrgFileUploaded(FileRef),

	// -- Thread Events
	ThreadCreated(ThreadId),
	ThreadLoaded(ThreadId),
	MessageCreated {
		thread_id: ThreadId,
		message_id: String,
	},
	RunCreated {
		thread_id: ThreadId,
		run_id: RunId,
	},
}
