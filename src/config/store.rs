// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! File access used by the loader.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{CogError, Result};

/// Read-only access to configuration files.
pub trait FileStore {
    /// Read a file as UTF-8 text, or `None` if it does not exist.
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>>;
}

/// [`FileStore`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FileStore for FsStore {
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>> {
        // A path under a regular file reports ENOTDIR rather than ENOENT;
        // both count as absent.
        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(path)
            .map(Some)
            .map_err(|source| CogError::Io {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// In-memory [`FileStore`], handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl FileStore for MemoryStore {
    fn read_if_exists(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}
