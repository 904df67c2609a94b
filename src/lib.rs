// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cog-loader - Layered JSON configuration
//!
//! Loads a `cog.json` file from a project directory and applies up to two
//! override layers: `cog.override.json` next to it and `~/.cog.json` in the
//! user's home directory.
//!
//! # Override gate
//!
//! Only keys whose base value is the literal boolean `true` can be replaced
//! by an override file. Override files never add keys, and keys with any
//! other value stay as the base file wrote them. When both override files
//! set the same key, the home directory value wins.
//!
//! # Example
//!
//! ```no_run
//! use cog_loader::{load_cog_file, LoaderOptions};
//!
//! // Load ./cog.json with both override layers
//! let cog = load_cog_file(None).unwrap();
//! println!("watcher: {:?}", cog.watcher());
//!
//! // Base file only
//! let options = LoaderOptions::new().with_apply_overrides(false);
//! let base = load_cog_file(Some(options)).unwrap();
//! assert_eq!(base.len(), cog.len());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use config::{load_cog_file, override_object, Cog, CogLoader, Environment, LoaderOptions};
pub use error::{CogError, Result};

/// Version information embedded at compile time.
///
/// Reported by `cog version` and `cog --version`; the git fields come from
/// `build.rs` and are absent when the crate is built outside a checkout.
pub mod version {
    /// The current version of the cog-loader crate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
