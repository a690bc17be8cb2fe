//! Import plugin configuration.

use crate::file_globs::{patterns, ALL_JS_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};
use serde_json::json;

/// Import hygiene: recommended preset plus resolver settings derived from
/// the probed feature flags.
pub struct ImportPlugin;

impl Provider for ImportPlugin {
    fn name(&self) -> &'static str {
        "import"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let plugin = ctx.resolve_plugin("eslint-plugin-import")?;
        let flags = ctx.flags();

        let mut preset = Fragment::named(self.name())
            .with_files(patterns(ALL_JS_FILES))
            .with_plugin("import", plugin)
            .with_extends("import/recommended");
        if flags.uses_typescript {
            preset = preset.with_extends("import/typescript");
        }
        if flags.uses_react {
            preset = preset.with_extends("import/react");
        }

        // TypeScript projects resolve through the TS resolver, everything
        // else through Node's.
        let settings = Fragment::new().with_settings(json!({
            "import/resolver": {
                "typescript": flags.uses_typescript,
                "node": !flags.uses_typescript,
                "exports": true,
            }
        }));

        Ok(Contribution::Many(vec![preset, settings]))
    }
}
