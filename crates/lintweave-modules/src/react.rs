//! React and React Hooks configuration.

use crate::file_globs::{patterns, ALL_JS_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};
use serde_json::json;

/// JSX parsing plus the jsx-runtime preset.
pub struct React;

impl Provider for React {
    fn name(&self) -> &'static str {
        "react"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.flags().uses_react {
            return Ok(Contribution::Skip);
        }

        let plugin = ctx.resolve_plugin("eslint-plugin-react")?;

        let jsx = Fragment::new()
            .with_files(patterns(ALL_JS_FILES))
            .with_language_options(json!({
                "parserOptions": {
                    "ecmaFeatures": { "jsx": true },
                },
            }));
        let preset = Fragment::named(self.name())
            .with_files(patterns(ALL_JS_FILES))
            .with_plugin("react", plugin)
            .with_extends("react/jsx-runtime");

        Ok(Contribution::Many(vec![jsx, preset]))
    }
}

/// Rules-of-hooks preset, gated on the same React flag.
pub struct ReactHooks;

impl Provider for ReactHooks {
    fn name(&self) -> &'static str {
        "react hooks"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        if !ctx.flags().uses_react {
            return Ok(Contribution::Skip);
        }

        let plugin = ctx.resolve_plugin("eslint-plugin-react-hooks")?;
        Ok(Fragment::named(self.name())
            .with_files(patterns(ALL_JS_FILES))
            .with_plugin("react-hooks", plugin)
            .with_extends("react-hooks/recommended")
            .into())
    }
}
