// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use serde_json::Value;
use std::path::Path;

use crate::config::{CogLoader, LoadedCog};
use crate::error::{CogError, Result, ResultExt};

use super::args::{Cli, Commands, ShowArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let loader = CogLoader::from_process()?;

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Show(args) => run_show(&cli, &loader, args),
        Commands::Paths => run_paths(&cli, &loader),
        Commands::Layers => run_layers(&cli, &loader),
        Commands::Example => run_example(),
        Commands::Version => run_version(),
    }
}

fn load(cli: &Cli, loader: &CogLoader) -> Result<LoadedCog> {
    loader.load_detailed(Some(cli.loader_options()))
}

/// Run the show command.
fn run_show(cli: &Cli, loader: &CogLoader, args: ShowArgs) -> Result<()> {
    tracing::debug!("Running show command with args: {:?}", args);

    let loaded = load(cli, loader)?;

    let value = match &args.key {
        Some(key) => loaded.cog.get(key).cloned().ok_or_else(|| CogError::WithContext {
            context: "show".to_string(),
            message: format!(
                "Key '{}' not found in {}",
                key,
                loaded.options.config_path.display()
            ),
        })?,
        None => loaded.cog.into_value(),
    };

    println!("{}", render(&value, args.compact)?);
    Ok(())
}

/// Run the paths command.
fn run_paths(cli: &Cli, loader: &CogLoader) -> Result<()> {
    tracing::debug!("Running paths command");

    let options = loader.resolve(Some(cli.loader_options()));

    print_path("base", &options.config_path, true);
    print_path("local", &options.override_path, options.apply_overrides);
    match &options.home_override_path {
        Some(path) => print_path(
            "home",
            path,
            options.apply_overrides && options.check_home_directory,
        ),
        None => println!("✗ home   (home directory unknown)"),
    }

    Ok(())
}

/// Run the layers command.
fn run_layers(cli: &Cli, loader: &CogLoader) -> Result<()> {
    tracing::debug!("Running layers command");

    let loaded = load(cli, loader)?;

    println!("base   {}", loaded.options.config_path.display());
    if loaded.layers.is_empty() {
        println!("No override layers applied");
        return Ok(());
    }

    for layer in &loaded.layers {
        let keys = if layer.replaced.is_empty() {
            "(no keys replaced)".to_string()
        } else {
            layer.replaced.join(", ")
        };
        println!("{:<6} {}: {}", layer.kind, layer.path.display(), keys);
    }

    Ok(())
}

/// Run the example command.
fn run_example() -> Result<()> {
    print!("{}", crate::config::default::example_cog());
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cog {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

fn render(value: &Value, compact: bool) -> Result<String> {
    if compact {
        serde_json::to_string(value).context("Failed to render configuration")
    } else {
        serde_json::to_string_pretty(value).context("Failed to render configuration")
    }
}

fn print_path(label: &str, path: &Path, enabled: bool) {
    let status = if !enabled {
        "disabled"
    } else if path.exists() {
        "found"
    } else {
        "missing"
    };
    let icon = if enabled && path.exists() { "✓" } else { "✗" };
    println!("{} {:<6} {} ({})", icon, label, path.display(), status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_compact() {
        let rendered = render(&json!({"a": 1, "b": [true]}), true).unwrap();
        assert_eq!(rendered, r#"{"a":1,"b":[true]}"#);
    }

    #[test]
    fn test_render_pretty() {
        let rendered = render(&json!({"a": 1}), false).unwrap();
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }
}
