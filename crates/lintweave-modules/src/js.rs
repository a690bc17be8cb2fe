//! Core recommended JavaScript rules.

use crate::file_globs::{patterns, ALL_JS_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};

/// The core recommended rule set, applied to every JS-family file.
pub struct JsRecommended;

impl Provider for JsRecommended {
    fn name(&self) -> &'static str {
        "js"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("@eslint/js")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(ALL_JS_FILES))
            .with_plugin("js", plugin)
            .with_extends("js/recommended")
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TestCtx;

    #[test]
    fn emits_recommended_preset() {
        let fixture = TestCtx::new().package("@eslint/js");
        let fragments = JsRecommended
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();

        assert_eq!(fragments[0].extends, vec!["js/recommended"]);
        assert!(fragments[0].plugin("js").is_some());
    }

    #[test]
    fn missing_core_package_is_recoverable() {
        let fixture = TestCtx::new();
        let err = JsRecommended
            .provide(&fixture.ctx(), &[])
            .expect_err("package absent");
        assert!(matches!(err, ProviderError::MissingDependency(name) if name == "@eslint/js"));
    }
}
