//! The default module registry.

use crate::{
    AppPrettierIgnore, BuiltInPrettierIgnore, CommentDirectives, Css, CssModules, GitIgnore,
    Globals, HouseOverrides, ImportPlugin, Json, Jsonc, JsRecommended, Lingui, Markdown, MsJsonc,
    NextJs, Prettier, React, ReactHooks, Storybook, TypeScript,
};
use lintweave_core::ProviderBox;

/// Returns the built-in providers in execution order.
///
/// Order is load-bearing twice over: later fragments overwrite earlier rule
/// settings in the composed config, and the house overrides inspect the
/// plugins registered by the TypeScript module.
#[must_use]
pub fn default_registry() -> Vec<ProviderBox> {
    vec![
        Box::new(GitIgnore),
        Box::new(BuiltInPrettierIgnore),
        Box::new(AppPrettierIgnore),
        Box::new(Globals),
        Box::new(JsRecommended),
        Box::new(ImportPlugin),
        Box::new(TypeScript),
        Box::new(React),
        Box::new(ReactHooks),
        Box::new(NextJs),
        Box::new(Storybook),
        Box::new(Lingui),
        Box::new(Json),
        Box::new(Jsonc),
        Box::new(MsJsonc),
        Box::new(Markdown),
        Box::new(Css),
        Box::new(CssModules),
        Box::new(Prettier),
        Box::new(CommentDirectives),
        Box::new(HouseOverrides),
    ]
}

/// Returns the registry's module names in execution order.
#[must_use]
pub fn module_names() -> Vec<&'static str> {
    default_registry().iter().map(|p| p.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_run_last() {
        let names = module_names();
        assert_eq!(names.first().copied(), Some("gitignore"));
        assert_eq!(names.last().copied(), Some("house overrides"));
    }

    #[test]
    fn typescript_runs_before_overrides() {
        let names = module_names();
        let typescript = names.iter().position(|n| *n == "typescript").expect("ts");
        let overrides = names
            .iter()
            .position(|n| *n == "house overrides")
            .expect("overrides");
        assert!(typescript < overrides);
    }

    #[test]
    fn names_are_unique() {
        let names = module_names();
        let unique: std::collections::BTreeSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }
}
