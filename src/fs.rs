//! File system utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File written by the REPL when no `/save` path is given.
pub const DEFAULT_SAVE_FILE: &str = "mateai_output.txt";

/// File the last response is exported to before the editor opens it.
pub const EDITOR_EXPORT_FILE: &str = "mateai_response.txt";

/// A response could not be written to disk.
#[derive(Debug, Error)]
#[error("Error saving file {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Writes `content` to `path` verbatim, replacing any existing file.
///
/// A single plain write: an interrupted process can leave a partial file.
pub fn write_response(path: &Path, content: &str) -> Result<(), WriteError> {
    fs::write(path, content).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })
}
