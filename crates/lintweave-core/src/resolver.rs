//! Plugin package resolution.
//!
//! Providers that need an optional backing plugin go through
//! [`PluginResolver`]. The contract matters more than the lookup: an absent
//! package must surface as [`ResolveError::NotFound`] carrying the package
//! name, so the composer can tell "not installed" apart from every other
//! failure without inspecting error text.

use crate::fragment::PluginRef;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from plugin resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The package is not installed. Recoverable for optional plugins.
    #[error("cannot find package `{0}`")]
    NotFound(String),

    /// The package exists but its manifest could not be read.
    #[error("failed to read manifest of `{package}`: {source}")]
    Manifest {
        /// Package whose manifest failed to read.
        package: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Resolves plugin packages for the consuming project.
pub trait PluginResolver: Send + Sync {
    /// Resolves `package` to a [`PluginRef`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when the package is not installed;
    /// any other error is treated as fatal by the composer.
    fn resolve(&self, package: &str) -> Result<PluginRef, ResolveError>;
}

/// Resolver backed by the project's `node_modules` directory.
#[derive(Debug, Clone)]
pub struct NodeModulesResolver {
    root: PathBuf,
}

#[derive(serde::Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

impl NodeModulesResolver {
    /// Creates a resolver for the project rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn package_dir(&self, package: &str) -> PathBuf {
        let mut dir = self.root.join("node_modules");
        // Scoped names ("@scope/name") span two directory levels.
        for part in package.split('/') {
            dir.push(part);
        }
        dir
    }
}

impl PluginResolver for NodeModulesResolver {
    fn resolve(&self, package: &str) -> Result<PluginRef, ResolveError> {
        let dir = self.package_dir(package);
        let manifest_path = dir.join("package.json");
        if !manifest_path.exists() {
            return Err(ResolveError::NotFound(package.to_string()));
        }

        let content =
            std::fs::read_to_string(&manifest_path).map_err(|source| ResolveError::Manifest {
                package: package.to_string(),
                source,
            })?;
        // A malformed manifest still identifies the package; only the
        // version is lost.
        let version = serde_json::from_str::<PackageManifest>(&content)
            .ok()
            .and_then(|m| m.version);

        tracing::debug!("Resolved {} at {}", package, dir.display());
        let mut plugin = PluginRef::new(package).with_path(dir);
        if let Some(version) = version {
            plugin = plugin.with_version(version);
        }
        Ok(plugin)
    }
}

/// In-memory resolver with a fixed package table.
///
/// Useful for tests and hermetic runs where no `node_modules` exists.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    packages: BTreeMap<String, PluginRef>,
}

impl StaticResolver {
    /// Creates an empty resolver that finds nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resolvable package.
    #[must_use]
    pub fn with_package(mut self, plugin: PluginRef) -> Self {
        self.packages.insert(plugin.package.clone(), plugin);
        self
    }

    /// Adds several resolvable packages by name.
    #[must_use]
    pub fn with_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for package in packages {
            let plugin = PluginRef::new(package);
            self.packages.insert(plugin.package.clone(), plugin);
        }
        self
    }
}

impl PluginResolver for StaticResolver {
    fn resolve(&self, package: &str) -> Result<PluginRef, ResolveError> {
        self.packages
            .get(package)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(package.to_string()))
    }
}
