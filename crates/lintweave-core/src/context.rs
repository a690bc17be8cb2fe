//! Run and composition contexts.

use crate::config::ToolConfig;
use crate::fragment::PluginRef;
use crate::probe::{FeatureFlags, ProjectEnv};
use crate::provider::ProviderError;
use crate::resolver::PluginResolver;

/// Explicit per-run settings.
///
/// Passed into the composer at construction instead of being read from
/// ambient process state, so composition stays a pure function of its
/// inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunContext {
    /// Emit verbose diagnostics.
    pub verbose: bool,
    /// Use ANSI colour in user-facing messages.
    pub color: bool,
}

impl RunContext {
    /// Log filter directive for this run: `debug` when verbose, `info`
    /// otherwise.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Everything a provider may consult during one composition run.
pub struct ComposeContext<'a> {
    /// Probed project environment.
    pub env: &'a ProjectEnv,
    /// Resolver for optional plugin packages.
    pub resolver: &'a dyn PluginResolver,
    /// Tool configuration.
    pub config: &'a ToolConfig,
}

impl ComposeContext<'_> {
    /// Shorthand for the probed feature flags.
    #[must_use]
    pub fn flags(&self) -> &FeatureFlags {
        &self.env.flags
    }

    /// Resolves an optional plugin package.
    ///
    /// # Errors
    ///
    /// An absent package maps to [`ProviderError::MissingDependency`], which
    /// the composer recovers from; other resolution failures are fatal.
    pub fn resolve_plugin(&self, package: &str) -> Result<PluginRef, ProviderError> {
        self.resolver.resolve(package).map_err(ProviderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_run_raises_log_filter_to_debug() {
        let run = RunContext {
            verbose: true,
            color: false,
        };
        assert_eq!(run.log_directive(), "debug");
        assert_eq!(RunContext::default().log_directive(), "info");
    }
}
