//! File access capability
//!
//! The runner never touches the filesystem directly. It goes through the
//! [`FileReader`] trait so tests can substitute an in-memory reader.
//!
//! [`FsReader`] is the real implementation. It handles:
//! - Non-UTF-8 files (lossy or strict)
//! - Oversized files
//! - Permission errors, which are not treated as read failures

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Default maximum file size in bytes (64 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// A failure to read the underlying medium
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ReadError {
    pub message: String,
}

impl ReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Existence check and whole-file read
///
/// `read_file` returns [`ReadError`] (boxed in `anyhow::Error`) when the medium
/// cannot be read. Any other error type is an unexpected failure.
pub trait FileReader {
    fn exists(&self, path: &Path) -> bool;

    fn read_file(&self, path: &Path) -> anyhow::Result<String>;
}

impl<R: FileReader + ?Sized> FileReader for &R {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_file(&self, path: &Path) -> anyhow::Result<String> {
        (**self).read_file(path)
    }
}

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingStrategy {
    /// Replace invalid bytes with U+FFFD
    #[default]
    Lossy,
    /// Reject files with invalid UTF-8
    Strict,
}

/// Configuration for file reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReadConfig {
    /// Maximum file size to process (bytes)
    pub max_file_size: u64,

    /// How to handle non-UTF-8 content
    pub encoding: EncodingStrategy,
}

impl Default for FileReadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            encoding: EncodingStrategy::Lossy,
        }
    }
}

/// Reads files from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FsReader {
    config: FileReadConfig,
}

impl FsReader {
    pub fn new(config: FileReadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FileReadConfig {
        &self.config
    }

    fn read_bytes(&self, path: &Path) -> io::Result<Vec<u8>> {
        let file = fs::File::open(path)?;
        let metadata = file.metadata()?;

        if metadata.is_dir() {
            return Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            )));
        }

        let file_size = metadata.len();
        if file_size > self.config.max_file_size {
            return Err(io::Error::other(format!(
                "File exceeds size limit ({} > {} bytes)",
                file_size, self.config.max_file_size
            )));
        }

        read_limited(io::BufReader::new(file), self.config.max_file_size)
    }

    fn decode(&self, bytes: Vec<u8>) -> Result<String, ReadError> {
        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(e) => match self.config.encoding {
                EncodingStrategy::Lossy => {
                    Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
                }
                EncodingStrategy::Strict => Err(ReadError::new(format!(
                    "File contains invalid UTF-8 at byte {}",
                    e.utf8_error().valid_up_to()
                ))),
            },
        }
    }
}

/// Read at most `limit` bytes, failing if the source holds more
///
/// Metadata sizes can lie (growing files, special files reporting 0), so the
/// limit is enforced on the bytes actually read.
fn read_limited<R: Read>(reader: R, limit: u64) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut buffer)?;

    if buffer.len() as u64 > limit {
        return Err(io::Error::other(format!(
            "File exceeds size limit (more than {} bytes)",
            limit
        )));
    }
    Ok(buffer)
}

/// Map an I/O failure to the error kind the runner reports
fn classify(err: io::Error, path: &Path) -> anyhow::Error {
    match err.kind() {
        // Access denial is not an I/O failure of the medium
        io::ErrorKind::PermissionDenied => {
            anyhow!("Access to the path '{}' is denied.", path.display())
        }
        _ => ReadError::from(err).into(),
    }
}

impl FileReader for FsReader {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_file(&self, path: &Path) -> anyhow::Result<String> {
        let bytes = self.read_bytes(path).map_err(|e| classify(e, path))?;

        Ok(self.decode(bytes)?)
    }
}
