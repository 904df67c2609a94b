// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cog-loader.
//!
//! This module handles resolving the three cog file locations, reading the
//! base file and layering the local and home override files onto it.

pub mod default;
mod env;
mod loader;
mod merge;
mod schema;
mod store;

pub use env::Environment;
pub use loader::{load_cog_file, AppliedLayer, CogLoader, LayerKind, LoadedCog};
pub use merge::{override_object, OverridableKeys};
pub use schema::*;
pub use store::{FileStore, FsStore, MemoryStore};
