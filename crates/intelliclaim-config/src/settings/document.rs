//! Document processing and storage paths.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{Error, Result};

/// Chunking parameters and upload size limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct DocumentSettings {
    /// Target chunk length.
    pub chunk_size: usize,

    /// Number of units shared between adjacent chunks.
    ///
    /// Must be strictly smaller than [`chunk_size`](Self::chunk_size).
    pub chunk_overlap: usize,

    /// Largest accepted upload in bytes.
    pub max_file_size: u64,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            chunk_overlap: defaults::CHUNK_OVERLAP,
            max_file_size: defaults::MAX_FILE_SIZE,
        }
    }
}

impl DocumentSettings {
    /// Returns the distance between the starts of adjacent chunks.
    #[must_use]
    pub const fn chunk_stride(&self) -> usize {
        self.chunk_size.saturating_sub(self.chunk_overlap)
    }

    /// Returns whether an upload of `len` bytes is within the limit.
    #[must_use]
    pub const fn accepts_file_size(&self, len: u64) -> bool {
        len <= self.max_file_size
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::invalid_setting(
                "document.chunk_size",
                "must be greater than 0",
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(Error::invalid_setting(
                "document.chunk_overlap",
                format!(
                    "{} must be smaller than chunk_size {}",
                    self.chunk_overlap, self.chunk_size
                ),
            ));
        }

        if self.max_file_size == 0 {
            return Err(Error::invalid_setting(
                "document.max_file_size",
                "must be greater than 0",
            ));
        }

        Ok(())
    }
}

/// On-disk locations used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct StorageSettings {
    /// Directory of the persistent vector store.
    pub vector_store_path: PathBuf,

    /// Directory uploaded documents are written to.
    pub upload_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            vector_store_path: defaults::VECTOR_STORE_PATH.into(),
            upload_path: defaults::UPLOAD_PATH.into(),
        }
    }
}

impl StorageSettings {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.vector_store_path.as_os_str().is_empty() {
            return Err(Error::invalid_setting(
                "storage.vector_store_path",
                "must not be empty",
            ));
        }

        if self.upload_path.as_os_str().is_empty() {
            return Err(Error::invalid_setting(
                "storage.upload_path",
                "must not be empty",
            ));
        }

        Ok(())
    }
}
