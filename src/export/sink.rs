//! Download targets for exported files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::error::{LeaveError, LeaveResult};

/// Receives a finished export file.
pub trait DownloadSink {
    /// Hands the file over under the given name.
    fn deliver(&self, filename: &str, bytes: &[u8]) -> LeaveResult<()>;
}

/// Writes exports into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink for the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> LeaveResult<()> {
        let delivery_error = |e: std::io::Error| LeaveError::Delivery {
            filename: filename.to_string(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.dir).map_err(delivery_error)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes).map_err(delivery_error)?;

        debug!(path = %path.display(), bytes = bytes.len(), "Wrote export");
        Ok(())
    }
}

/// A file captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// The generated filename.
    pub filename: String,
    /// The file contents.
    pub bytes: Vec<u8>,
}

/// Keeps delivered files in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    downloads: Mutex<Vec<Download>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the most recent download.
    pub fn take_last(&self) -> Option<Download> {
        self.downloads.lock().ok().and_then(|mut d| d.pop())
    }

    /// Returns the number of captured downloads.
    pub fn len(&self) -> usize {
        self.downloads.lock().map(|d| d.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been delivered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> LeaveResult<()> {
        let mut downloads = self.downloads.lock().map_err(|e| LeaveError::Delivery {
            filename: filename.to_string(),
            message: e.to_string(),
        })?;
        downloads.push(Download {
            filename: filename.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
