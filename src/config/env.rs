// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Process state the loader depends on.

use std::path::PathBuf;

use crate::error::{CogError, Result};

/// Current directory and home directory, captured once per load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Default base for relative option paths.
    pub working_directory: PathBuf,
    /// Location of the home override file, if known.
    pub home_directory: Option<PathBuf>,
}

impl Environment {
    pub fn new(working_directory: impl Into<PathBuf>, home_directory: Option<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
            home_directory,
        }
    }

    /// Capture the current process state.
    pub fn from_process() -> Result<Self> {
        let working_directory = std::env::current_dir().map_err(|e| CogError::Environment {
            message: format!("Failed to determine current directory: {}", e),
        })?;

        let home_directory = dirs::home_dir();
        if home_directory.is_none() {
            tracing::debug!("Home directory could not be determined");
        }

        Ok(Self {
            working_directory,
            home_directory,
        })
    }
}
