use std::ffi::OsStr;
use std::path::{Component, Path};

// region:    --- File Names

/// Local file name for a display path such as `sandbox:/mnt/data/report.csv`.
///
/// Takes the last path segment. Returns `None` when there is no usable segment
/// (empty text, `..`, `.`, a bare root, a directory path ending with `/`).
pub fn base_name(display_path: &str) -> Option<&str> {
	let display_path = display_path.trim();
	if display_path.ends_with('/') {
		return None;
	}

	match Path::new(display_path).components().next_back()? {
		Component::Normal(name) => name.to_str().filter(|n| !n.is_empty()),
		_ => None,
	}
}

// endregion: --- File Names

// region:    --- XFile

/// Trait that has methods that returns
/// the `&str` when ok, and when none or err, returns ""
pub trait XFile {
	fn x_file_name(&self) -> &str;
}

impl XFile for Path {
	fn x_file_name(&self) -> &str {
		self.file_name().and_then(OsStr::to_str).unwrap_or("")
	}
}

// endregion: --- XFile

// region:    --- Tests


// endregion: --- Tests
