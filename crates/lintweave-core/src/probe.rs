//! Environment prober: detects which optional ecosystem features a
//! consuming project uses.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors probing the project environment.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Project manifest could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Project manifest is not valid JSON.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}

/// Which optional ecosystem features the project uses.
///
/// Computed once per composition run and immutable for its duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// TypeScript sources or tooling present.
    pub uses_typescript: bool,
    /// React is a dependency.
    pub uses_react: bool,
    /// Next.js is a dependency.
    pub uses_next_js: bool,
    /// Storybook is a dependency.
    pub uses_storybook: bool,
    /// A Lingui i18n package is a dependency.
    pub uses_lingui: bool,
}

/// Snapshot of the consuming project's environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEnv {
    /// Project root directory.
    pub root: PathBuf,
    /// Union of production and development dependency names, deduplicated.
    pub dependencies: BTreeSet<String>,
    /// Derived feature flags.
    pub flags: FeatureFlags,
    /// `.gitignore` exists in the root.
    pub has_gitignore: bool,
    /// `.prettierignore` exists in the root.
    pub has_prettierignore: bool,
    /// `tsconfig.json` exists in the root.
    pub has_tsconfig: bool,
}

impl ProjectEnv {
    /// Returns `true` if `name` is a declared dependency.
    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains(name)
    }
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

fn is_typescript_dep(dep: &str) -> bool {
    matches!(dep, "typescript" | "ts-node" | "jiti") || dep.starts_with("@types/")
}

/// Probes the project rooted at `root`.
///
/// Reads `package.json` (fatal when missing or unparsable) and checks a few
/// marker files for existence. Pure function of filesystem state: probing
/// twice without changes yields identical results.
///
/// # Errors
///
/// Returns [`ProbeError`] when the manifest is unreadable or invalid.
pub fn probe(root: &Path) -> Result<ProjectEnv, ProbeError> {
    let manifest_path = root.join("package.json");
    let content = std::fs::read_to_string(&manifest_path).map_err(|source| ProbeError::Io {
        path: manifest_path.clone(),
        source,
    })?;
    let manifest: Manifest = serde_json::from_str(&content).map_err(|e| ProbeError::Parse {
        path: manifest_path,
        message: e.to_string(),
    })?;

    let dependencies: BTreeSet<String> = manifest
        .dependencies
        .keys()
        .chain(manifest.dev_dependencies.keys())
        .cloned()
        .collect();

    let has_tsconfig = root.join("tsconfig.json").exists();
    let flags = FeatureFlags {
        uses_typescript: has_tsconfig || dependencies.iter().any(|d| is_typescript_dep(d)),
        uses_react: dependencies.contains("react") || dependencies.contains("react-dom"),
        uses_next_js: dependencies.contains("next"),
        uses_storybook: dependencies.contains("storybook"),
        uses_lingui: dependencies.iter().any(|d| d.starts_with("@lingui/")),
    };

    debug!("Uses TypeScript: {}", flags.uses_typescript);
    debug!("Uses React: {}", flags.uses_react);
    debug!("Uses Next.js: {}", flags.uses_next_js);

    Ok(ProjectEnv {
        root: root.to_path_buf(),
        dependencies,
        flags,
        has_gitignore: root.join(".gitignore").exists(),
        has_prettierignore: root.join(".prettierignore").exists(),
        has_tsconfig,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: &str) -> TempDir {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("package.json"), manifest).expect("write manifest");
        tmp
    }

    #[test]
    fn typescript_via_dev_dependency_and_tsconfig() {
        let tmp = project(r#"{"dependencies":{},"devDependencies":{"typescript":"^5.0.0"}}"#);
        fs::write(tmp.path().join("tsconfig.json"), "{}").expect("write tsconfig");

        let env = probe(tmp.path()).expect("probe");
        assert!(env.flags.uses_typescript);
        assert!(!env.flags.uses_react);
        assert!(env.has_tsconfig);
    }

    #[test]
    fn tsconfig_alone_flags_typescript() {
        let tmp = project(r#"{"dependencies":{}}"#);
        fs::write(tmp.path().join("tsconfig.json"), "{}").expect("write tsconfig");

        let env = probe(tmp.path()).expect("probe");
        assert!(env.flags.uses_typescript);
    }

    #[test]
    fn types_scope_flags_typescript() {
        let tmp = project(r#"{"devDependencies":{"@types/node":"^20.0.0"}}"#);
        assert!(probe(tmp.path()).expect("probe").flags.uses_typescript);
    }

    #[test]
    fn react_and_next_flags() {
        let tmp = project(r#"{"dependencies":{"react":"^18.0.0","next":"^14.0.0"}}"#);
        let env = probe(tmp.path()).expect("probe");
        assert!(env.flags.uses_react);
        assert!(env.flags.uses_next_js);
        assert!(!env.flags.uses_typescript);
    }

    #[test]
    fn dependency_union_collapses_duplicates() {
        let tmp = project(
            r#"{"dependencies":{"react":"^18.0.0"},"devDependencies":{"react":"^18.0.0","storybook":"^8.0.0"}}"#,
        );
        let env = probe(tmp.path()).expect("probe");
        assert_eq!(env.dependencies.len(), 2);
        assert!(env.flags.uses_storybook);
    }

    #[test]
    fn probe_is_idempotent() {
        let tmp = project(r#"{"dependencies":{"react":"^18.0.0"},"devDependencies":{"jiti":"^2.0.0"}}"#);
        fs::write(tmp.path().join(".gitignore"), "node_modules\n").expect("write");

        let first = probe(tmp.path()).expect("probe");
        let second = probe(tmp.path()).expect("probe");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_manifest_is_io_error() {
        let tmp = TempDir::new().expect("tempdir");
        assert!(matches!(probe(tmp.path()), Err(ProbeError::Io { .. })));
    }

    #[test]
    fn invalid_manifest_is_parse_error() {
        let tmp = project("not json");
        assert!(matches!(probe(tmp.path()), Err(ProbeError::Parse { .. })));
    }
}
