//! Lingui i18n configuration.

use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};

/// Lingui's flat recommended preset, gated on any `@lingui/*` dependency.
pub struct Lingui;

impl Provider for Lingui {
    fn name(&self) -> &'static str {
        "lingui"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.flags().uses_lingui {
            return Ok(Contribution::Skip);
        }

        let plugin = ctx.resolve_plugin("eslint-plugin-lingui")?;
        Ok(Fragment::named(self.name())
            .with_plugin("lingui", plugin)
            .with_extends("lingui/flat/recommended")
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TestCtx;
    use lintweave_core::FeatureFlags;

    #[test]
    fn gated_on_lingui_flag() {
        let fixture = TestCtx::new();
        assert!(Lingui.provide(&fixture.ctx(), &[]).expect("provide").is_skip());

        let fixture = TestCtx::new()
            .flags(FeatureFlags {
                uses_lingui: true,
                ..FeatureFlags::default()
            })
            .package("eslint-plugin-lingui");
        let fragments = Lingui
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();
        assert_eq!(fragments[0].extends, vec!["lingui/flat/recommended"]);
    }
}
