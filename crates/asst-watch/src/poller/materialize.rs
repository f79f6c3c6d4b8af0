use crate::ais::{FileId, ThreadApi};
use crate::utils::files::base_name;
use crate::Result;
use simple_fs::ensure_dir;
use std::path::{Path, PathBuf};

/// Downloads `file_id` into `dir/name` (creating `dir` if needed) and returns the file path.
///
/// Writes go to a `.part` sibling first and are renamed into place, so calling
/// this again with the same arguments replaces the file wholesale.
pub async fn materialize(
	api: &dyn ThreadApi,
	dir: &Path,
	file_id: &FileId,
	name: &str,
) -> Result<PathBuf> {
	// names coming from outside may still carry separators
	let name = base_name(name).unwrap_or(file_id.as_str());

	ensure_dir(dir)?;

	let content = api.file_content(file_id).await?;

	let file = dir.join(name);
	let part_file = dir.join(format!("{name}.part"));
	tokio::fs::write(&part_file, &content).await?;
	tokio::fs::rename(&part_file, &file).await?;

	tracing::debug!(file_id = %file_id, file = %file.display(), bytes = content.len(), "artifact materialized");

	Ok(file)
}
