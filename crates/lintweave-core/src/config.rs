//! Tool configuration for lintweave.

use crate::merge::RestrictedImports;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level tool configuration, read from `lintweave.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ToolConfig {
    /// Extra filenames allowed outside the tsconfig project service.
    pub allow_default_project: Vec<String>,

    /// Per-module configuration, keyed by module name.
    pub modules: HashMap<String, ModuleConfig>,

    /// User additions to the built-in restricted-imports defaults.
    ///
    /// Deep-merged with the built-ins, never replacing them.
    pub restricted_imports: Option<RestrictedImports>,
}

impl ToolConfig {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a module is enabled. Modules are enabled by default.
    #[must_use]
    pub fn is_module_enabled(&self, module_name: &str) -> bool {
        self.modules
            .get(module_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }
}

/// Per-module configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Whether this module runs at all.
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
