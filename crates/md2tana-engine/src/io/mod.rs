//! Reading source text and writing outlines for the calling shell.
//!
//! The converter itself never touches I/O; these helpers are where the
//! "no input available" failure lives.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No input available: the source text is empty")]
    EmptyInput,
}

/// Read source text from a file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(IoError::Io)?;
    require_content(text)
}

/// Read source text from any reader, e.g. stdin
pub fn read_source<R: Read>(mut reader: R) -> Result<String, IoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    require_content(text)
}

/// Write an outline to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

fn require_content(text: String) -> Result<String, IoError> {
    if text.trim().is_empty() {
        return Err(IoError::EmptyInput);
    }
    Ok(text)
}
