// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::LoaderOptions;

/// cog - Layered JSON configuration
///
/// Loads cog.json and applies cog.override.json and ~/.cog.json on top of it.
#[derive(Parser, Debug)]
#[command(name = "cog")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Inspect layered cog configuration", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to show if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory relative paths are resolved against
    #[arg(long, global = true, env = "COG_CWD")]
    pub cwd: Option<PathBuf>,

    /// Path to the base cog file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the local override file
    #[arg(long, global = true)]
    pub override_path: Option<PathBuf>,

    /// Do not apply any override file
    #[arg(long, global = true)]
    pub no_overrides: bool,

    /// Do not apply ~/.cog.json
    #[arg(long, global = true)]
    pub no_home: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the merged configuration (default command)
    Show(ShowArgs),

    /// Print the resolved file locations
    Paths,

    /// Print which override layers were applied
    Layers,

    /// Print an example cog file
    Example,

    /// Print version information
    Version,
}

/// Arguments for the show command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ShowArgs {
    /// Print a single top-level key
    #[arg(short, long)]
    pub key: Option<String>,

    /// Print JSON on one line
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Show if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Show(ShowArgs::default()))
    }

    /// Loader options built from the global flags. Unset flags keep the
    /// loader defaults.
    pub fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            working_directory: self.cwd.clone(),
            config_path: self.config.clone(),
            apply_overrides: self.no_overrides.then_some(false),
            override_path: self.override_path.clone(),
            check_home_directory: self.no_home.then_some(false),
        }
    }
}
