//! TypeScript configuration: type-checked presets and project-service
//! parser options.

use crate::file_globs::{patterns, ALL_TS_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;

/// Bundled config filenames that may live outside the tsconfig project.
const DEFAULT_PROJECT_CANDIDATES: &[&str] = &["eslint.config.ts", "prettier.config.ts"];

#[derive(Debug, Default, Deserialize)]
struct TsConfig {
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    files: Vec<String>,
}

/// Returns the candidate config filenames not covered by the tsconfig
/// `include`/`files` globs; those need the project service's default-project
/// escape hatch to be type-checked at all.
fn additional_allow_default_project(root: &Path) -> Result<Vec<String>, ProviderError> {
    let tsconfig_path = root.join("tsconfig.json");
    let tsconfig = if tsconfig_path.exists() {
        let content = std::fs::read_to_string(&tsconfig_path)?;
        serde_json::from_str::<TsConfig>(&content)
            .map_err(|e| ProviderError::Invalid(format!("invalid tsconfig.json: {e}")))?
    } else {
        TsConfig::default()
    };

    let includes: Vec<&String> = tsconfig.include.iter().chain(&tsconfig.files).collect();
    let includes_all = includes.is_empty()
        || includes.iter().any(|i| i.as_str() == "**/*" || i.as_str() == "*");

    let candidates = DEFAULT_PROJECT_CANDIDATES
        .iter()
        .filter(|filename| {
            !(includes_all
                || includes.iter().any(|include| {
                    glob::Pattern::new(include)
                        .map(|p| p.matches(filename))
                        .unwrap_or(false)
                }))
        })
        .map(ToString::to_string)
        .collect();
    Ok(candidates)
}

/// Type-checked TypeScript presets, scoped to TS files.
pub struct TypeScript;

impl Provider for TypeScript {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.flags().uses_typescript {
            return Ok(Contribution::Skip);
        }

        let plugin = ctx.resolve_plugin("typescript-eslint")?;

        let mut allow_default_project = additional_allow_default_project(&ctx.env.root)?;
        allow_default_project.extend(ctx.config.allow_default_project.iter().cloned());
        tracing::debug!("Default-project escape hatch: {allow_default_project:?}");

        let presets = Fragment::named(self.name())
            .with_files(patterns(ALL_TS_FILES))
            .with_plugin("@typescript-eslint", plugin)
            .with_extends("typescript-eslint/strict-type-checked")
            .with_extends("typescript-eslint/stylistic-type-checked");

        let parser = Fragment::new()
            .with_files(patterns(ALL_TS_FILES))
            .with_language_options(json!({
                "parserOptions": {
                    "tsconfigRootDir": ctx.env.root,
                    "projectService": {
                        "allowDefaultProject": allow_default_project,
                    },
                },
            }));

        Ok(Contribution::Many(vec![presets, parser]))
    }
}
