//! Lint-comment hygiene configuration.

use crate::file_globs::{patterns, ALL_JS_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};

/// Rules about `eslint-disable`-style comment directives.
pub struct CommentDirectives;

impl Provider for CommentDirectives {
    fn name(&self) -> &'static str {
        "comment directives"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("eslint-plugin-eslint-comments")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(ALL_JS_FILES))
            .with_plugin("eslint-comments", plugin)
            .with_extends("eslint-comments/recommended")
            .into())
    }
}
