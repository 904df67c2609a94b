// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration object and loader option definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::default::{
    DEFAULT_APPLY_OVERRIDES, DEFAULT_CHECK_HOME_DIRECTORY, DEFAULT_CONFIG_PATH,
    DEFAULT_OVERRIDE_PATH, HOME_OVERRIDE_FILE,
};
use super::env::Environment;

/// A merged cog configuration.
///
/// Keys are opaque to the loader apart from `watcher`, which the surrounding
/// tooling reads as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cog(Map<String, Value>);

impl Cog {
    /// The `watcher` entry, when it is a string.
    pub fn watcher(&self) -> Option<&str> {
        self.0.get("watcher").and_then(Value::as_str)
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key's value is the literal `true` overridable marker.
    pub fn is_overridable(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    /// Iterate over the keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cog has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Partial loader options. Unset fields fall back to their defaults.
///
/// Deserializes from the camelCase names used in JSON option files:
/// `workingDirectory`, `configPath`, `applyOverrides`, `overridePath` and
/// `checkHomeDirectory`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Base for resolving relative paths. Defaults to the current directory.
    pub working_directory: Option<PathBuf>,

    /// Path to the base cog file.
    pub config_path: Option<PathBuf>,

    /// Master switch for both override layers.
    pub apply_overrides: Option<bool>,

    /// Path to the local override file.
    pub override_path: Option<PathBuf>,

    /// Whether to check `~/.cog.json`.
    pub check_home_directory: Option<bool>,
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_apply_overrides(mut self, apply: bool) -> Self {
        self.apply_overrides = Some(apply);
        self
    }

    pub fn with_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn with_check_home_directory(mut self, check: bool) -> Self {
        self.check_home_directory = Some(check);
        self
    }

    /// Fill in defaults and turn every path absolute.
    ///
    /// The home override path comes from the environment alone; no option
    /// can move it.
    pub fn resolve(self, env: &Environment) -> ResolvedOptions {
        let working_directory = self
            .working_directory
            .unwrap_or_else(|| env.working_directory.clone());

        let config_path = resolve_against(
            &working_directory,
            self.config_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        );
        let override_path = resolve_against(
            &working_directory,
            self.override_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OVERRIDE_PATH)),
        );
        let home_override_path = env
            .home_directory
            .as_ref()
            .map(|home| home.join(HOME_OVERRIDE_FILE));

        ResolvedOptions {
            working_directory,
            config_path,
            apply_overrides: self.apply_overrides.unwrap_or(DEFAULT_APPLY_OVERRIDES),
            override_path,
            check_home_directory: self
                .check_home_directory
                .unwrap_or(DEFAULT_CHECK_HOME_DIRECTORY),
            home_override_path,
        }
    }
}

/// Fully populated options for a single load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub working_directory: PathBuf,
    pub config_path: PathBuf,
    pub apply_overrides: bool,
    pub override_path: PathBuf,
    pub check_home_directory: bool,
    /// `None` when the home directory could not be determined.
    pub home_override_path: Option<PathBuf>,
}

impl ResolvedOptions {
    /// Local override path, if the local layer is enabled.
    pub fn local_layer(&self) -> Option<&Path> {
        self.apply_overrides.then_some(self.override_path.as_path())
    }

    /// Home override path, if the home layer is enabled and resolvable.
    pub fn home_layer(&self) -> Option<&Path> {
        if self.apply_overrides && self.check_home_directory {
            self.home_override_path.as_deref()
        } else {
            None
        }
    }
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn env() -> Environment {
        Environment::new("/work/project", Some(PathBuf::from("/home/dev")))
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = LoaderOptions::default().resolve(&env());
        assert_eq!(resolved.working_directory, PathBuf::from("/work/project"));
        assert_eq!(resolved.config_path, PathBuf::from("/work/project/cog.json"));
        assert_eq!(
            resolved.override_path,
            PathBuf::from("/work/project/cog.override.json")
        );
        assert_eq!(
            resolved.home_override_path,
            Some(PathBuf::from("/home/dev/.cog.json"))
        );
        assert!(resolved.apply_overrides);
        assert!(resolved.check_home_directory);
    }

    #[test]
    fn test_relative_paths_join_working_directory() {
        let resolved = LoaderOptions::new()
            .with_working_directory("/srv/app")
            .with_config_path("conf/base.json")
            .with_override_path("conf/local.json")
            .resolve(&env());
        assert_eq!(resolved.config_path, PathBuf::from("/srv/app/conf/base.json"));
        assert_eq!(resolved.override_path, PathBuf::from("/srv/app/conf/local.json"));
    }

    #[test]
    fn test_absolute_paths_ignore_working_directory() {
        let resolved = LoaderOptions::new()
            .with_working_directory("/srv/app")
            .with_config_path("/etc/cog.json")
            .with_override_path("/etc/cog.local.json")
            .resolve(&env());
        assert_eq!(resolved.config_path, PathBuf::from("/etc/cog.json"));
        assert_eq!(resolved.override_path, PathBuf::from("/etc/cog.local.json"));
    }

    #[test]
    fn test_home_path_ignores_working_directory() {
        let resolved = LoaderOptions::new()
            .with_working_directory("/srv/app")
            .resolve(&env());
        assert_eq!(
            resolved.home_override_path,
            Some(PathBuf::from("/home/dev/.cog.json"))
        );
    }

    #[test]
    fn test_layers_follow_switches() {
        let resolved = LoaderOptions::new().resolve(&env());
        assert!(resolved.local_layer().is_some());
        assert!(resolved.home_layer().is_some());

        let no_home = LoaderOptions::new()
            .with_check_home_directory(false)
            .resolve(&env());
        assert!(no_home.local_layer().is_some());
        assert!(no_home.home_layer().is_none());

        let none = LoaderOptions::new()
            .with_apply_overrides(false)
            .resolve(&env());
        assert!(none.local_layer().is_none());
        assert!(none.home_layer().is_none());
    }

    #[test]
    fn test_no_home_directory() {
        let env = Environment::new("/work", None);
        let resolved = LoaderOptions::new().resolve(&env);
        assert!(resolved.home_override_path.is_none());
        assert!(resolved.home_layer().is_none());
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let options: LoaderOptions = serde_json::from_value(json!({
            "workingDirectory": "/srv",
            "configPath": "app.json",
            "applyOverrides": false,
            "checkHomeDirectory": false
        }))
        .unwrap();
        assert_eq!(options.working_directory, Some(PathBuf::from("/srv")));
        assert_eq!(options.config_path, Some(PathBuf::from("app.json")));
        assert_eq!(options.apply_overrides, Some(false));
        assert_eq!(options.override_path, None);
        assert_eq!(options.check_home_directory, Some(false));
    }

    #[test]
    fn test_cog_watcher() {
        let cog: Cog = serde_json::from_value(json!({"watcher": "gulp", "port": true})).unwrap();
        assert_eq!(cog.watcher(), Some("gulp"));
        assert!(cog.is_overridable("port"));
        assert!(!cog.is_overridable("watcher"));

        let cog: Cog = serde_json::from_value(json!({"watcher": 3})).unwrap();
        assert_eq!(cog.watcher(), None);

        let empty: Cog = serde_json::from_value(json!({})).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.watcher(), None);
    }

    #[test]
    fn test_cog_rejects_non_object() {
        assert!(serde_json::from_str::<Cog>("[1, 2, 3]").is_err());
    }
}
