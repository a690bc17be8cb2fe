//! Language fragments for non-JS file classes: JSON, Markdown, CSS.

use crate::file_globs::{patterns, CSS_FILES, JSONC_FILES, JSON_FILES, MARKDOWN_FILES, MS_JSONC_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};
use serde_json::json;

/// Plain JSON files.
pub struct Json;

impl Provider for Json {
    fn name(&self) -> &'static str {
        "json"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("@eslint/json")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(JSON_FILES))
            .with_plugin("json", plugin)
            .with_language("json/json")
            .with_extends("json/recommended")
            .into())
    }
}

/// JSON-with-comments files.
pub struct Jsonc;

impl Provider for Jsonc {
    fn name(&self) -> &'static str {
        "jsonc"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("@eslint/json")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(JSONC_FILES))
            .with_plugin("json", plugin)
            .with_language("json/jsonc")
            .with_extends("json/recommended")
            .into())
    }
}

/// JSONC files that Microsoft tooling writes with trailing commas.
pub struct MsJsonc;

impl Provider for MsJsonc {
    fn name(&self) -> &'static str {
        "jsonc with Microsoft extensions"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("@eslint/json")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(MS_JSONC_FILES))
            .with_plugin("json", plugin)
            .with_language("json/jsonc")
            .with_language_options(json!({ "allowTrailingCommas": true }))
            .with_extends("json/recommended")
            .into())
    }
}

/// GitHub-flavoured Markdown documents.
pub struct Markdown;

impl Provider for Markdown {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("@eslint/markdown")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(MARKDOWN_FILES))
            .with_plugin("markdown", plugin)
            .with_language("markdown/gfm")
            .with_extends("markdown/recommended")
            .into())
    }
}

/// Stylesheets.
pub struct Css;

impl Provider for Css {
    fn name(&self) -> &'static str {
        "css"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("@eslint/css")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(CSS_FILES))
            .with_plugin("css", plugin)
            .with_language("css/css")
            .with_extends("css/recommended")
            .into())
    }
}

/// CSS modules conventions.
pub struct CssModules;

impl Provider for CssModules {
    fn name(&self) -> &'static str {
        "css modules"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("eslint-plugin-css-modules")?;
        Ok(Fragment::named(self.name())
            .with_plugin("css-modules", plugin)
            .with_extends("css-modules/recommended")
            .into())
    }
}
