//! Provider trait for configuration modules.

use crate::context::ComposeContext;
use crate::fragment::{Contribution, Fragment};
use crate::resolver::ResolveError;
use thiserror::Error;

/// Errors a provider can fail with.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An optional backing plugin is not installed.
    ///
    /// The only recoverable class: the composer records the package name
    /// and continues with the next provider.
    #[error("optional dependency `{0}` is not installed")]
    MissingDependency(String),

    /// IO error reading project files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input the provider cannot work around.
    #[error("{0}")]
    Invalid(String),
}

impl From<ResolveError> for ProviderError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound(package) => Self::MissingDependency(package),
            ResolveError::Manifest { source, .. } => Self::Io(source),
        }
    }
}

/// A named configuration module.
///
/// Providers are invoked sequentially in registry order. Each receives the
/// fragments produced by all earlier providers and contributes zero, one, or
/// many fragments of its own.
///
/// # Example
///
/// ```ignore
/// use lintweave_core::{Contribution, Fragment, Provider};
///
/// pub struct Globals;
///
/// impl Provider for Globals {
///     fn name(&self) -> &'static str { "globals" }
///
///     fn provide(&self, ctx: &ComposeContext<'_>, _acc: &[Fragment])
///         -> Result<Contribution, ProviderError>
///     {
///         Ok(Fragment::named(self.name()).into())
///     }
/// }
/// ```
pub trait Provider: Send + Sync {
    /// Returns the human-readable module name, used in diagnostics and in
    /// the tool config's per-module enable switch.
    fn name(&self) -> &'static str;

    /// Inspects the environment and earlier fragments and contributes.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Project environment, plugin resolver, and tool config
    /// * `acc` - Fragments contributed by all earlier providers, read-only
    ///
    /// # Errors
    ///
    /// [`ProviderError::MissingDependency`] is recovered by the composer;
    /// anything else aborts composition immediately.
    fn provide(
        &self,
        ctx: &ComposeContext<'_>,
        acc: &[Fragment],
    ) -> Result<Contribution, ProviderError>;
}

/// Type alias for boxed provider trait objects.
pub type ProviderBox = Box<dyn Provider>;
