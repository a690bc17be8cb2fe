//! Configuration file resolution.
//!
//! Resolves the tool configuration file path using a deterministic
//! priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/lintweave.toml` or `.lintweave.toml`
//! 3. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::Default => None,
        }
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["lintweave.toml", ".lintweave.toml"];

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order. The explicit path is trusted
/// as-is; the caller surfaces a missing-file error when loading it.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    ConfigSource::Default
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().expect("tempdir");
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "").expect("write");
        fs::write(tmp.path().join("lintweave.toml"), "").expect("write");

        let result = resolve(tmp.path(), Some(&explicit));
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn explicit_does_not_check_existence() {
        let result = resolve(Path::new("/tmp"), Some(Path::new("/nonexistent.toml")));
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn project_config_found() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join(".lintweave.toml"), "").expect("write");

        let result = resolve(tmp.path(), None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join(".lintweave.toml"))
        );
    }

    #[test]
    fn undotted_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("lintweave.toml"), "").expect("write");
        fs::write(tmp.path().join(".lintweave.toml"), "").expect("write");

        let result = resolve(tmp.path(), None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("lintweave.toml"))
        );
    }

    #[test]
    fn no_config_anywhere_returns_default() {
        let tmp = TempDir::new().expect("tempdir");
        assert_eq!(resolve(tmp.path(), None), ConfigSource::Default);
        assert!(ConfigSource::Default.path().is_none());
    }
}
