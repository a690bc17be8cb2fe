//! The `compose` command: probe, compose, print.

use crate::commands::output;
use crate::config_resolver;
use crate::OutputFormat;
use anyhow::{Context, Result};
use lintweave_core::{
    probe, ComposeError, Composer, RunContext, ToolConfig, EXIT_CONFIG,
};
use lintweave_modules::default_registry;
use std::path::Path;
use tracing::{debug, info};

/// Composes the lint configuration for the project at `path` and prints the
/// fragment list to stdout.
///
/// A missing-dependency outcome prints the consolidated remediation block to
/// stderr and exits with [`EXIT_CONFIG`]; any other failure propagates as a
/// generic error.
pub fn run(
    path: &Path,
    format: OutputFormat,
    config_path: Option<&Path>,
    run: RunContext,
) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Project directory not found: {}", path.display()))?;

    let env = probe(&root).context("Failed to probe project environment")?;
    debug!("Detected features: {:?}", env.flags);

    let source = config_resolver::resolve(&root, config_path);
    let config = match source.path() {
        Some(p) => ToolConfig::from_file(p)
            .with_context(|| format!("Failed to load config: {}", p.display()))?,
        None => {
            debug!("No config file found, using defaults");
            ToolConfig::default()
        }
    };

    let composer = Composer::builder(env)
        .providers(default_registry())
        .config(config)
        .run_context(run)
        .build();

    match composer.compose() {
        Ok(fragments) => {
            info!("Composed {} fragment(s)", fragments.len());
            println!("{}", output::render(&fragments, format)?);
            Ok(())
        }
        Err(ComposeError::MissingDependencies(report)) => {
            eprintln!("{}", report.render(&run));
            std::process::exit(EXIT_CONFIG);
        }
        Err(err) => Err(err).context("Failed to compose lint config"),
    }
}
