//! House rule overrides, applied on top of every preset that came before.

use crate::file_globs::{patterns, ALL_JS_FILES, CSS_FILES, MARKDOWN_FILES};
use lintweave_core::{
    ComposeContext, Contribution, Fragment, Provider, ProviderError, RestrictedImports,
    RestrictedPattern, RuleMap,
};
use serde_json::{json, Value};

/// File classes where strictness buys little: config files, CLI scripts,
/// and tests.
const NON_APPLICATION_FILES: &[&str] = &[
    ".storybook/**",
    "**/*.config.*",
    "**/.*rc*",
    "scripts/**",
    "**/*.test.*",
    "**/__tests__/**",
];

/// Inserts a rule that has a TypeScript-aware twin: with a TS plugin
/// namespace present the base rule is switched off in favour of the
/// namespaced one, otherwise the base rule carries the config.
fn maybe_ts_rule(rules: &mut RuleMap, ts_namespace: Option<&str>, rule: &str, config: Value) {
    match ts_namespace {
        Some(ns) => {
            rules.insert(rule.to_string(), json!("off"));
            rules.insert(format!("{ns}/{rule}"), config);
        }
        None => {
            rules.insert(rule.to_string(), config);
        }
    }
}

fn code_smells_rules(ts_namespace: Option<&str>) -> RuleMap {
    let mut rules = RuleMap::new();

    if let Some(ns) = ts_namespace {
        // Include a case for each possible value in switch statements
        rules.insert(format!("{ns}/switch-exhaustiveness-check"), json!("error"));
        // Allow using numbers in template expressions
        rules.insert(
            format!("{ns}/restrict-template-expressions"),
            json!(["error", { "allowNumber": true }]),
        );
        // Allow empty interface if it extends something
        rules.insert(
            format!("{ns}/no-empty-object-type"),
            json!(["error", { "allowInterfaces": "with-single-extends" }]),
        );
    }

    // Allow unused vars starting with "_", useful for destructuring
    // properties away
    maybe_ts_rule(
        &mut rules,
        ts_namespace,
        "no-unused-vars",
        json!([
            "error",
            {
                "argsIgnorePattern": "^_",
                "destructuredArrayIgnorePattern": "^_",
                "varsIgnorePattern": "^_",
            }
        ]),
    );
    maybe_ts_rule(&mut rules, ts_namespace, "no-shadow", json!("error"));
    maybe_ts_rule(&mut rules, ts_namespace, "no-use-before-define", json!("error"));

    rules.insert("no-console".into(), json!("error"));
    rules.insert("array-callback-return".into(), json!("error"));
    rules.insert("no-constructor-return".into(), json!("error"));
    rules.insert("no-self-compare".into(), json!("error"));
    rules.insert("no-unreachable-loop".into(), json!("error"));
    rules.insert("complexity".into(), json!(["error", { "max": 10 }]));
    rules.insert("eqeqeq".into(), json!(["error", "smart"]));
    rules.insert("no-return-assign".into(), json!(["error", "always"]));
    rules.insert("no-useless-assignment".into(), json!("error"));
    rules.insert("no-template-curly-in-string".into(), json!("error"));
    rules.insert("preserve-caught-error".into(), json!("error"));
    rules.insert("no-param-reassign".into(), json!("error"));
    // Allow disabling rules for the whole file
    rules.insert(
        "eslint-comments/disable-enable-pair".into(),
        json!(["error", { "allowWholeFile": true }]),
    );

    rules
}

fn promises_rules() -> RuleMap {
    let mut rules = RuleMap::new();
    rules.insert("require-atomic-updates".into(), json!("error"));
    rules.insert("no-promise-executor-return".into(), json!("error"));
    rules.insert("no-await-in-loop".into(), json!("error"));
    rules
}

fn imports_rules() -> RuleMap {
    let mut rules = RuleMap::new();
    // Always use `node:` specifiers for Node built-ins
    rules.insert(
        "import/enforce-node-protocol-usage".into(),
        json!(["error", "always"]),
    );
    rules.insert(
        "import/order".into(),
        json!([
            "error",
            {
                "alphabetize": { "order": "asc", "caseInsensitive": true },
                "newlines-between": "always",
                "named": { "enabled": true, "types": "types-last" },
            }
        ]),
    );
    rules
}

fn stylistic_rules(ts_namespace: Option<&str>) -> RuleMap {
    let mut rules = RuleMap::new();

    if let Some(ns) = ts_namespace {
        rules.insert(
            format!("{ns}/array-type"),
            json!(["error", { "default": "generic" }]),
        );
        // Allow @ts- comments only with a description
        rules.insert(
            format!("{ns}/ban-ts-comment"),
            json!([
                "error",
                {
                    "ts-expect-error": { "descriptionFormat": "^ -- TS\\d+" },
                    "ts-ignore": true,
                    "ts-nocheck": true,
                    "ts-check": true,
                }
            ]),
        );
        rules.insert(format!("{ns}/consistent-type-imports"), json!("error"));
        rules.insert(format!("{ns}/consistent-type-exports"), json!("error"));
    }

    rules.insert(
        "eslint-comments/require-description".into(),
        json!(["error", { "ignore": ["eslint-env", "eslint-enable"] }]),
    );
    rules.insert("prefer-const".into(), json!("error"));
    rules.insert("prefer-template".into(), json!("error"));
    rules
}

/// Rules that would be a great idea to enforce strictly; kept at warning
/// level until the codebases consuming this config catch up.
fn practical_rules(ts_namespace: Option<&str>) -> RuleMap {
    let mut rules = RuleMap::new();
    if let Some(ns) = ts_namespace {
        rules.insert(format!("{ns}/no-explicit-any"), json!("warn"));
        for rule in [
            "no-unsafe-argument",
            "no-unsafe-assignment",
            "no-unsafe-call",
            "no-unsafe-member-access",
            "no-unsafe-return",
        ] {
            rules.insert(format!("{ns}/{rule}"), json!("warn"));
        }
    }
    rules
}

fn builtin_restricted_imports() -> RestrictedImports {
    RestrictedImports {
        paths: vec![],
        patterns: vec![RestrictedPattern {
            group: vec!["../*".to_string()],
            message: Some(
                "Use absolute paths for importing files from parent directories.".to_string(),
            ),
        }],
    }
}

/// The package's own rule overrides.
///
/// Runs last so it can overwrite anything the presets configured. To
/// overwrite TypeScript-namespaced rules it must re-register the TS plugin,
/// which it discovers by scanning the fragments earlier providers produced.
pub struct HouseOverrides;

impl Provider for HouseOverrides {
    fn name(&self) -> &'static str {
        "house overrides"
    }

    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        // The TS plugin's presence in earlier output doubles as the signal
        // that TS-namespaced twins exist for the base rules.
        let ts_plugin = if ctx.flags().uses_typescript {
            acc.iter()
                .find_map(|fragment| fragment.plugins.get_key_value("@typescript-eslint"))
        } else {
            None
        };
        let ts_namespace = ts_plugin.map(|(ns, _)| ns.as_str());

        let mut rules = code_smells_rules(ts_namespace);
        rules.extend(promises_rules());
        rules.extend(imports_rules());
        rules.extend(stylistic_rules(ts_namespace));
        rules.extend(practical_rules(ts_namespace));

        let mut main = Fragment::named(self.name())
            .with_files(patterns(ALL_JS_FILES))
            .with_linter_options(json!({ "reportUnusedDisableDirectives": "error" }))
            .with_rules(rules);
        if let Some((ns, plugin)) = ts_plugin {
            main = main.with_plugin(ns.clone(), plugin.clone());
        }

        let relaxed = Fragment::named("relaxed non-application code")
            .with_files(patterns(NON_APPLICATION_FILES))
            .with_rule("complexity", json!(["error", { "max": 20 }]))
            .with_rule("no-console", json!("off"))
            .with_rule("no-await-in-loop", json!("off"));

        let css = Fragment::new()
            .with_files(patterns(CSS_FILES))
            // Vars are often defined globally in a separate stylesheet
            .with_rule(
                "css/no-invalid-properties",
                json!(["error", { "allowUnknownVariables": true }]),
            )
            // Newer CSS features are fine when used progressively
            .with_rule("css/use-baseline", json!("off"));

        let markdown = Fragment::new()
            .with_files(patterns(MARKDOWN_FILES))
            // The parser does not recognise GitHub alert labels
            .with_rule(
                "markdown/no-missing-label-refs",
                json!([
                    "error",
                    { "allowLabels": ["!NOTE", "!TIP", "!IMPORTANT", "!WARNING", "!CAUTION"] }
                ]),
            );

        let restricted = builtin_restricted_imports();
        let restricted = match &ctx.config.restricted_imports {
            Some(user) => restricted.merge(user),
            None => restricted,
        };
        let restricted_imports = Fragment::named("restricted imports")
            .with_files(patterns(ALL_JS_FILES))
            .with_rule("no-restricted-imports", restricted.to_rule_value());

        // Plain .mjs files often run natively in the browser, where
        // absolute import paths do not work.
        let mjs = Fragment::new()
            .with_files(["**/*.mjs"])
            .with_rule("no-restricted-imports", json!("off"));

        Ok(Contribution::Many(vec![
            main,
            relaxed,
            css,
            markdown,
            restricted_imports,
            mjs,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TestCtx;
    use lintweave_core::{FeatureFlags, PluginRef, RestrictedPath};

    fn ts_fixture() -> TestCtx {
        TestCtx::new().flags(FeatureFlags {
            uses_typescript: true,
            ..FeatureFlags::default()
        })
    }

    #[test]
    fn without_typescript_base_rules_carry_config() {
        let fixture = TestCtx::new();
        let fragments = HouseOverrides
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();

        let main = &fragments[0];
        assert_eq!(main.rules["no-shadow"], json!("error"));
        assert!(!main.rules.contains_key("@typescript-eslint/no-shadow"));
        assert!(main.plugins.is_empty());
    }

    #[test]
    fn discovers_ts_plugin_from_earlier_fragments() {
        let fixture = ts_fixture();
        let earlier = Fragment::new()
            .with_plugin("@typescript-eslint", PluginRef::new("typescript-eslint"));

        let fragments = HouseOverrides
            .provide(&fixture.ctx(), &[earlier])
            .expect("provide")
            .into_fragments();

        let main = &fragments[0];
        assert_eq!(main.rules["no-shadow"], json!("off"));
        assert_eq!(main.rules["@typescript-eslint/no-shadow"], json!("error"));
        assert!(main.plugin("@typescript-eslint").is_some());
        assert_eq!(
            main.rules["@typescript-eslint/switch-exhaustiveness-check"],
            json!("error")
        );
    }

    #[test]
    fn ts_flag_without_registered_plugin_falls_back_to_base_rules() {
        // TypeScript module disabled or its fragments absent: no namespace
        // to prefix, so the base rules stay authoritative.
        let fixture = ts_fixture();
        let fragments = HouseOverrides
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();
        assert_eq!(fragments[0].rules["no-shadow"], json!("error"));
    }

    #[test]
    fn restricted_imports_merge_builtins_first() {
        let mut fixture = TestCtx::new();
        fixture.config.restricted_imports = Some(RestrictedImports {
            paths: vec![RestrictedPath {
                name: "lodash".into(),
                message: None,
            }],
            patterns: vec![],
        });

        let fragments = HouseOverrides
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();
        let restricted = fragments
            .iter()
            .find(|f| f.name.as_deref() == Some("restricted imports"))
            .expect("fragment");
        let value = &restricted.rules["no-restricted-imports"];
        // Built-in pattern group survives, user path appended
        assert_eq!(value[1]["patterns"][0]["group"][0], "../*");
        assert_eq!(value[1]["paths"][0]["name"], "lodash");
    }

    #[test]
    fn relaxed_fragment_loosens_complexity() {
        let fixture = TestCtx::new();
        let fragments = HouseOverrides
            .provide(&fixture.ctx(), &[])
            .expect("provide")
            .into_fragments();
        let relaxed = fragments
            .iter()
            .find(|f| f.name.as_deref() == Some("relaxed non-application code"))
            .expect("fragment");
        assert_eq!(relaxed.rules["complexity"], json!(["error", { "max": 20 }]));
        assert_eq!(relaxed.rules["no-console"], json!("off"));
    }
}
