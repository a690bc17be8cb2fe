//! Prettier-as-a-lint-rule configuration.

use crate::file_globs::{patterns, ALL_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};

/// Runs the formatter as a lint rule across every supported file class.
///
/// Registered near the end of the registry so it can switch off stylistic
/// rules earlier presets enabled.
pub struct Prettier;

impl Provider for Prettier {
    fn name(&self) -> &'static str {
        "prettier"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("eslint-plugin-prettier")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(ALL_FILES))
            .with_plugin("prettier", plugin)
            .with_extends("prettier/recommended")
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TestCtx;

    #[test]
    fn applies_to_all_file_classes() {
        let fixture = TestCtx::new().package("eslint-plugin-prettier");
        let fragments = Prettier
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();
        assert_eq!(fragments[0].files, patterns(ALL_FILES));
    }
}
