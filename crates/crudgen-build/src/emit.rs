//! File emission for generated modules.

use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// FileSystemError
///

#[derive(Debug, ThisError)]
pub enum FileSystemError {
    #[error("failed to create directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write module '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Create `path` and every missing parent segment. Idempotent: an existing
/// directory is success; any other failure is surfaced, never swallowed.
pub fn ensure_dir(path: &Path) -> Result<(), FileSystemError> {
    fs::create_dir_all(path).map_err(|source| FileSystemError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist one rendered module, truncating any existing file at `path`.
/// The write is durable when this returns: bytes are flushed and synced
/// before the completion accounting observes the result.
pub fn write_module(path: &Path, text: &str) -> Result<(), FileSystemError> {
    persist(path, text).map_err(|source| FileSystemError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn persist(path: &Path, text: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()
}
