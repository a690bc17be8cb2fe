//! Merge policy for user-supplied override fragments.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Structural deep merge of two JSON values.
///
/// Maps merge per key, recursing into shared keys. Arrays concatenate,
/// base entries first so override entries are additions, not replacements.
/// Everything else: the override wins.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.remove(&key) {
                    Some(existing) => {
                        base.insert(key, deep_merge(existing, value));
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        (Value::Array(mut base), Value::Array(overlay)) => {
            base.extend(overlay);
            Value::Array(base)
        }
        (_, overlay) => overlay,
    }
}

/// A single restricted import path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictedPath {
    /// Module name that must not be imported.
    pub name: String,
    /// Explanation shown alongside the violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A group of restricted import patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictedPattern {
    /// Glob patterns that must not be imported.
    pub group: Vec<String>,
    /// Explanation shown alongside the violation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Mergeable restricted-imports configuration.
///
/// `paths` and `patterns` merge independently: built-ins first, then the
/// user's entries. User overrides add to the built-in defaults, they never
/// replace them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictedImports {
    /// Restricted module names.
    pub paths: Vec<RestrictedPath>,
    /// Restricted import patterns.
    pub patterns: Vec<RestrictedPattern>,
}

impl RestrictedImports {
    /// Returns a new configuration with `user` entries appended to `self`.
    #[must_use]
    pub fn merge(&self, user: &Self) -> Self {
        let mut merged = self.clone();
        merged.paths.extend(user.paths.iter().cloned());
        merged.patterns.extend(user.patterns.iter().cloned());
        merged
    }

    /// Renders the rule value for the `no-restricted-imports` rule.
    #[must_use]
    pub fn to_rule_value(&self) -> Value {
        json!([
            "error",
            {
                "paths": self.paths,
                "patterns": self.patterns,
            }
        ])
    }
}
