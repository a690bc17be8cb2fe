//! Next.js configuration.

use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};

/// Build artefacts Next.js generates; linting them is never useful.
const NEXT_IGNORES: &[&str] = &[".next/**", "out/**", "build/**", "next-env.d.ts"];

/// Next.js presets plus ignores for its build output.
pub struct NextJs;

impl Provider for NextJs {
    fn name(&self) -> &'static str {
        "next.js"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.flags().uses_next_js {
            return Ok(Contribution::Skip);
        }

        let plugin = ctx.resolve_plugin("eslint-config-next")?;

        // The import namespace stays with the import module; registering
        // it a second time here breaks the composed config.
        let vitals = Fragment::named("next/core-web-vitals")
            .with_plugin("@next/next", plugin)
            .with_extends("next/core-web-vitals");

        let mut fragments = vec![vitals];
        if ctx.flags().uses_typescript {
            fragments.push(Fragment::new().with_extends("next/typescript"));
        }
        fragments.push(
            Fragment::new().with_ignores(NEXT_IGNORES.iter().map(ToString::to_string)),
        );

        Ok(Contribution::Many(fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TestCtx;
    use lintweave_core::FeatureFlags;

    #[test]
    fn skips_without_next() {
        let fixture = TestCtx::new();
        assert!(NextJs.provide(&fixture.ctx(), &[]).expect("provide").is_skip());
    }

    #[test]
    fn plain_next_project_gets_vitals_and_ignores() {
        let fixture = TestCtx::new()
            .flags(FeatureFlags {
                uses_next_js: true,
                ..FeatureFlags::default()
            })
            .package("eslint-config-next");

        let fragments = NextJs
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].extends, vec!["next/core-web-vitals"]);
        assert_eq!(fragments[1].ignores, NEXT_IGNORES);
    }

    #[test]
    fn typescript_next_project_gets_typescript_preset_too() {
        let fixture = TestCtx::new()
            .flags(FeatureFlags {
                uses_next_js: true,
                uses_typescript: true,
                ..FeatureFlags::default()
            })
            .package("eslint-config-next");

        let fragments = NextJs
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[1].extends, vec!["next/typescript"]);
    }
}
