// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cog-loader.
//!
//! Only two conditions abort a load on their own: a missing base file and
//! JSON that fails to parse. Everything else here is either an environment
//! problem or context attached by the command-line front end.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cog loading.
#[derive(Error, Debug)]
pub enum CogError {
    /// The base cog file does not exist at the resolved path.
    #[error("Could not load cog file at {}", path.display())]
    NotFound { path: PathBuf },

    /// One of the three files exists but is not a JSON object.
    #[error("Failed to parse JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A file exists but reading it failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ambient process state could not be captured.
    #[error("Environment error: {message}")]
    Environment { message: String },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl CogError {
    /// Whether this error means the base file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CogError::NotFound { .. })
    }
}

/// Result type alias for cog-loader operations.
pub type Result<T> = std::result::Result<T, CogError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CogError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_contains_path() {
        let err = CogError::NotFound {
            path: PathBuf::from("/path/to/cog.json"),
        };
        assert_eq!(err.to_string(), "Could not load cog file at /path/to/cog.json");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err = CogError::Parse {
            path: PathBuf::from("/tmp/cog.override.json"),
            source,
        };
        assert!(err.to_string().contains("/tmp/cog.override.json"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        let err = res.context("Failed to write output").unwrap_err();
        assert_eq!(err.to_string(), "Failed to write output: disk on fire");
    }
}
