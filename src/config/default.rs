// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default file names and option values.

/// Base configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "cog.json";

/// Local override file, relative to the working directory.
pub const DEFAULT_OVERRIDE_PATH: &str = "cog.override.json";

/// Override file looked up in the user's home directory. Not configurable.
pub const HOME_OVERRIDE_FILE: &str = ".cog.json";

/// Overrides are applied unless switched off.
pub const DEFAULT_APPLY_OVERRIDES: bool = true;

/// The home override layer is checked unless switched off.
pub const DEFAULT_CHECK_HOME_DIRECTORY: bool = true;

/// Generate an example cog file.
///
/// Keys set to `true` may be replaced by override files; every other key is
/// fixed by the base file.
pub fn example_cog() -> &'static str {
    r#"{
  "watcher": "webpack",
  "port": true,
  "apiUrl": true,
  "features": ["search", "export"]
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_cog_parses() {
        let value: serde_json::Value = serde_json::from_str(example_cog()).unwrap();
        assert_eq!(value["watcher"], "webpack");
        assert_eq!(value["port"], true);
    }
}
