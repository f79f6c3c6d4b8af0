use crate::ais::RunId;

#[derive(Debug, Clone)]
pub enum SessionEvent {
	InstLoaded,
	InputFilesUploaded { count: usize },
	RunSubmitted(RunId),
}
