//! Ignore-file providers: translate gitignore-style files into ignore
//! fragments.

use crate::file_globs::patterns;
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};
use std::path::Path;
use tracing::debug;

/// Default ignore patterns shipped with the package, matching what the
/// bundled formatter setup skips.
const BUILT_IN_PRETTIER_IGNORE: &[&str] = &[
    "**/package-lock.json",
    "**/yarn.lock",
    "**/pnpm-lock.yaml",
    "**/dist/**",
    "**/coverage/**",
    "**/.cache/**",
];

/// Translates one gitignore pattern line into an ignore glob.
///
/// Returns `None` for blank lines and comments. Follows the flat-config
/// convention: patterns without a slash float (`**/` prefix), patterns
/// anchored with a leading `/` are root-relative, a trailing `/` ignores
/// the whole directory, and `!` negations survive translation.
fn translate_pattern(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (negated, pattern) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let (directory, pattern) = match pattern.strip_suffix('/') {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };

    let mut glob = match pattern.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None if pattern.contains('/') => pattern.to_string(),
        None => format!("**/{pattern}"),
    };
    if directory {
        glob.push_str("/**");
    }

    if negated {
        Some(format!("!{glob}"))
    } else {
        Some(glob)
    }
}

/// Reads an ignore file and translates every pattern line.
fn translate_ignore_file(path: &Path) -> Result<Vec<String>, std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    let ignores: Vec<String> = content.lines().filter_map(translate_pattern).collect();
    debug!("Translated {} pattern(s) from {}", ignores.len(), path.display());
    Ok(ignores)
}

/// Translates the project's `.gitignore` into an ignores fragment.
pub struct GitIgnore;

impl Provider for GitIgnore {
    fn name(&self) -> &'static str {
        "gitignore"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.env.has_gitignore {
            return Ok(Contribution::Skip);
        }
        let ignores = translate_ignore_file(&ctx.env.root.join(".gitignore"))?;
        Ok(Fragment::named(".gitignore").with_ignores(ignores).into())
    }
}

/// Ships the package's own default formatter ignore patterns.
pub struct BuiltInPrettierIgnore;

impl Provider for BuiltInPrettierIgnore {
    fn name(&self) -> &'static str {
        "built-in prettier ignore"
    }

    fn provide(
        &self,
        _ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        Ok(Fragment::named(self.name())
            .with_ignores(patterns(BUILT_IN_PRETTIER_IGNORE))
            .into())
    }
}

/// Translates the project's `.prettierignore`, when present.
pub struct AppPrettierIgnore;

impl Provider for AppPrettierIgnore {
    fn name(&self) -> &'static str {
        "app prettier ignore"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.env.has_prettierignore {
            return Ok(Contribution::Skip);
        }
        let ignores = translate_ignore_file(&ctx.env.root.join(".prettierignore"))?;
        Ok(Fragment::named(self.name()).with_ignores(ignores).into())
    }
}
