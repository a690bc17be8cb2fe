//! The `probe` command: show detected project features.

use anyhow::{Context, Result};
use lintweave_core::probe;
use std::path::Path;

/// Probes the project at `path` and prints the detected environment.
pub fn run(path: &Path) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Project directory not found: {}", path.display()))?;

    let env = probe(&root).context("Failed to probe project environment")?;

    println!("Project root: {}", env.root.display());
    println!("Declared dependencies: {}", env.dependencies.len());
    println!();
    println!("Detected features:");
    println!("  typescript: {}", env.flags.uses_typescript);
    println!("  react:      {}", env.flags.uses_react);
    println!("  next.js:    {}", env.flags.uses_next_js);
    println!("  storybook:  {}", env.flags.uses_storybook);
    println!("  lingui:     {}", env.flags.uses_lingui);
    println!();
    println!("Project files:");
    println!("  tsconfig.json:   {}", env.has_tsconfig);
    println!("  .gitignore:      {}", env.has_gitignore);
    println!("  .prettierignore: {}", env.has_prettierignore);

    Ok(())
}
