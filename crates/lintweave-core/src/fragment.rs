//! Fragment data model for flat lint configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A plugin package resolved from the consuming project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRef {
    /// Package name as published (e.g. "eslint-plugin-import").
    pub package: String,
    /// Version from the resolved package manifest, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Directory the package was resolved to, if resolved from disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl PluginRef {
    /// Creates a reference to a package by name only.
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: None,
            path: None,
        }
    }

    /// Sets the resolved version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the resolved path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Rule table: rule id mapped to its configuration value.
pub type RuleMap = BTreeMap<String, Value>;

/// One atomic, ordered unit of flat lint configuration.
///
/// Fragments are appended to the composition accumulator and never mutated
/// afterwards. Later providers may read earlier fragments but not alter them.
///
/// Serializes to the camelCase shape flat-config lint runners consume;
/// empty fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fragment {
    /// Human-readable fragment name, for diagnostics only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Glob patterns selecting the files this fragment applies to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    /// Glob patterns excluded from linting.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
    /// Plugin namespace to resolved plugin package.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, PluginRef>,
    /// Preset references (e.g. "json/recommended") expanded by the runner.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
    /// Language id for non-JS file classes (e.g. "markdown/gfm").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Parser and environment options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Value>,
    /// Linter behaviour options (e.g. unused-directive reporting).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linter_options: Option<Value>,
    /// Shared settings read by plugins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    /// Rule configuration table.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: RuleMap,
}

impl Fragment {
    /// Creates an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty fragment with a diagnostic name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the file patterns.
    #[must_use]
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the ignore patterns.
    #[must_use]
    pub fn with_ignores<I, S>(mut self, ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignores = ignores.into_iter().map(Into::into).collect();
        self
    }

    /// Registers a plugin under a namespace.
    #[must_use]
    pub fn with_plugin(mut self, namespace: impl Into<String>, plugin: PluginRef) -> Self {
        self.plugins.insert(namespace.into(), plugin);
        self
    }

    /// Adds a preset reference.
    #[must_use]
    pub fn with_extends(mut self, preset: impl Into<String>) -> Self {
        self.extends.push(preset.into());
        self
    }

    /// Sets the language id.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the language options.
    #[must_use]
    pub fn with_language_options(mut self, options: Value) -> Self {
        self.language_options = Some(options);
        self
    }

    /// Sets the linter options.
    #[must_use]
    pub fn with_linter_options(mut self, options: Value) -> Self {
        self.linter_options = Some(options);
        self
    }

    /// Sets the shared settings.
    #[must_use]
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Adds a single rule.
    #[must_use]
    pub fn with_rule(mut self, id: impl Into<String>, value: Value) -> Self {
        self.rules.insert(id.into(), value);
        self
    }

    /// Sets the whole rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleMap) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the plugin registered under `namespace`, if any.
    #[must_use]
    pub fn plugin(&self, namespace: &str) -> Option<&PluginRef> {
        self.plugins.get(namespace)
    }
}

/// What a provider contributed for one invocation.
///
/// Normalized by the composer before appending: `Skip` appends nothing,
/// `One` appends a single fragment, `Many` appends in the given order.
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
    /// The provider declined to contribute.
    Skip,
    /// One fragment.
    One(Fragment),
    /// An ordered sequence of fragments.
    Many(Vec<Fragment>),
}

impl Contribution {
    /// Returns `true` for [`Contribution::Skip`].
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }

    /// Flattens the contribution into a fragment list, preserving order.
    #[must_use]
    pub fn into_fragments(self) -> Vec<Fragment> {
        match self {
            Self::Skip => Vec::new(),
            Self::One(fragment) => vec![fragment],
            Self::Many(fragments) => fragments,
        }
    }
}

impl From<Fragment> for Contribution {
    fn from(fragment: Fragment) -> Self {
        Self::One(fragment)
    }
}

impl From<Vec<Fragment>> for Contribution {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self::Many(fragments)
    }
}

impl From<Option<Fragment>> for Contribution {
    fn from(fragment: Option<Fragment>) -> Self {
        fragment.map_or(Self::Skip, Self::One)
    }
}
