// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Cog file loading and override layering.

use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CogError, Result};

use super::env::Environment;
use super::schema::{Cog, LoaderOptions, ResolvedOptions};
use super::store::{FileStore, FsStore};

/// Which override file a layer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Override file next to the base cog.
    Local,
    /// `~/.cog.json`.
    Home,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Local => write!(f, "local"),
            LayerKind::Home => write!(f, "home"),
        }
    }
}

/// An override file that was found and applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedLayer {
    pub kind: LayerKind,
    pub path: PathBuf,
    /// Keys the layer replaced, in override file order.
    pub replaced: Vec<String>,
}

/// A merged cog together with the layers that shaped it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCog {
    pub cog: Cog,
    pub options: ResolvedOptions,
    pub layers: Vec<AppliedLayer>,
}

/// Loads a base cog file and layers override files on top of it.
#[derive(Debug, Clone)]
pub struct CogLoader<S = FsStore> {
    store: S,
    env: Environment,
}

impl CogLoader<FsStore> {
    /// Loader over the real file system and the current process state.
    pub fn from_process() -> Result<Self> {
        Ok(Self::new(FsStore, Environment::from_process()?))
    }
}

impl<S: FileStore> CogLoader<S> {
    pub fn new(store: S, env: Environment) -> Self {
        Self { store, env }
    }

    /// Apply defaults and resolve every path for `options`.
    pub fn resolve(&self, options: Option<LoaderOptions>) -> ResolvedOptions {
        options.unwrap_or_default().resolve(&self.env)
    }

    /// Load and merge, returning only the cog.
    pub fn load(&self, options: Option<LoaderOptions>) -> Result<Cog> {
        self.load_detailed(options).map(|loaded| loaded.cog)
    }

    /// Load and merge, also reporting which layers were applied.
    ///
    /// The local override is applied before the home override, and every
    /// layer is gated on the keys the base file flagged `true`, so the home
    /// value wins when both files set the same key. This differs from
    /// [`override_object`](super::override_object), which gates on the
    /// current value: chaining it over both files would leave the local value
    /// in place, since the local layer has already replaced the `true` flag.
    pub fn load_detailed(&self, options: Option<LoaderOptions>) -> Result<LoadedCog> {
        let options = self.resolve(options);
        tracing::debug!("Resolved cog options: {:?}", options);

        let mut cog = self.load_base(&options.config_path)?;
        let flags = cog.overridable_keys();
        tracing::debug!("Base cog has {} overridable key(s)", flags.len());

        let candidates = [
            (LayerKind::Local, options.local_layer()),
            (LayerKind::Home, options.home_layer()),
        ];

        let mut layers = Vec::new();
        for (kind, path) in candidates {
            let Some(path) = path else {
                tracing::debug!("Skipping {} override layer", kind);
                continue;
            };

            let Some(source) = self.read_json(path)? else {
                tracing::debug!("No {} override at {:?}", kind, path);
                continue;
            };

            let replaced = cog.apply_layer(&source, &flags);
            tracing::debug!("Applied {} override from {:?}: {:?}", kind, path, replaced);
            layers.push(AppliedLayer {
                kind,
                path: path.to_path_buf(),
                replaced,
            });
        }

        Ok(LoadedCog {
            cog,
            options,
            layers,
        })
    }

    fn load_base(&self, path: &Path) -> Result<Cog> {
        tracing::debug!("Loading cog file from: {:?}", path);

        let content = self
            .store
            .read_if_exists(path)?
            .ok_or_else(|| CogError::NotFound {
                path: path.to_path_buf(),
            })?;

        serde_json::from_str(&content).map_err(|source| CogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_json(&self, path: &Path) -> Result<Option<Value>> {
        let Some(content) = self.store.read_if_exists(path)? else {
            return Ok(None);
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| CogError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Load the cog file using the current directory, the user's home
/// directory and the local file system.
pub fn load_cog_file(options: Option<LoaderOptions>) -> Result<Cog> {
    CogLoader::from_process()?.load(options)
}
