//! lintweave CLI tool.
//!
//! Usage:
//! ```bash
//! lintweave compose [OPTIONS] [PATH]
//! lintweave probe [PATH]
//! lintweave list-modules
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use lintweave_core::RunContext;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Composes flat lint configuration for JavaScript/TypeScript projects
#[derive(Parser)]
#[command(name = "lintweave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable ANSI colour in diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the configuration fragment list
    Compose {
        /// Project root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Show which ecosystem features were detected
    Probe {
        /// Project root (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List built-in modules in execution order
    ListModules,
}

/// Output format for composed fragments.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line.
    #[default]
    Json,
    /// Pretty-printed JSON.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let run = RunContext {
        verbose: cli.verbose,
        color: !cli.no_color && std::io::stderr().is_terminal(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(run.log_directive()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compose { path, format } => {
            commands::compose::run(&path, format, cli.config.as_deref(), run)
        }
        Commands::Probe { path } => commands::probe::run(&path),
        Commands::ListModules => {
            commands::list_modules::run();
            Ok(())
        }
    }
}
