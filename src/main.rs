// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cog - Layered JSON configuration
//!
//! Prints the configuration that cog-loader would hand to a tool.

use clap::Parser;
use cog_loader::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    setup_logging(cli.debug);

    // Run the CLI
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging/tracing.
///
/// Logs go to stderr so `cog show` output stays valid JSON on stdout.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("cog_loader=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!("Debug logging enabled");
    }
}
