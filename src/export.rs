//! Static export of the rendered document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while writing the exported document.
#[derive(Debug, Error)]
pub enum ExportError {
	/// The output directory could not be created.
	#[error("failed to create output directory {path}")]
	CreateDir {
		/// The directory that could not be created.
		path: PathBuf,
		/// The underlying IO error.
		#[source]
		source: io::Error,
	},
	/// The document file could not be written.
	#[error("failed to write {path}")]
	Write {
		/// The file that could not be written.
		path: PathBuf,
		/// The underlying IO error.
		#[source]
		source: io::Error,
	},
}

/// Writes the rendered document to `<out_dir>/index.html`.
///
/// Creates the output directory if it does not exist and returns the path
/// of the written file.
pub fn export_document(out_dir: &Path, html: &str) -> Result<PathBuf, ExportError> {
	fs::create_dir_all(out_dir).map_err(|source| ExportError::CreateDir {
		path: out_dir.to_path_buf(),
		source,
	})?;

	let path = out_dir.join("index.html");
	fs::write(&path, html).map_err(|source| ExportError::Write {
		path: path.clone(),
		source,
	})?;

	tracing::info!(path = %path.display(), bytes = html.len(), "exported document");
	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_export_writes_index_html() {
		let dir = tempfile::tempdir().unwrap();
		let path = export_document(dir.path(), "<p>hi</p>").unwrap();

		assert_eq!(path, dir.path().join("index.html"));
		assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
	}

	#[test]
	fn test_export_creates_nested_directories() {
		let dir = tempfile::tempdir().unwrap();
		let nested = dir.path().join("a/b");
		let path = export_document(&nested, "x").unwrap();

		assert!(path.exists());
	}
}
