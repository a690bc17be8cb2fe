//! Storybook configuration.

use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};

/// Storybook's flat recommended preset, gated on the storybook dependency.
pub struct Storybook;

impl Provider for Storybook {
    fn name(&self) -> &'static str {
        "storybook"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.flags().uses_storybook {
            return Ok(Contribution::Skip);
        }

        let plugin = ctx.resolve_plugin("eslint-plugin-storybook")?;
        Ok(Fragment::named(self.name())
            .with_plugin("storybook", plugin)
            .with_extends("storybook/flat/recommended")
            .into())
    }
}
