//! Composer: ordered, fault-tolerant assembly of configuration fragments.

use crate::config::ToolConfig;
use crate::context::{ComposeContext, RunContext};
use crate::fragment::Fragment;
use crate::probe::ProjectEnv;
use crate::provider::{Provider, ProviderBox, ProviderError};
use crate::report::MissingDependencyReport;
use crate::resolver::{NodeModulesResolver, PluginResolver};

use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a composition run.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A provider failed with a non-recoverable error.
    #[error("module `{name}` failed: {source}")]
    Provider {
        /// Name of the failing provider.
        name: String,
        /// Underlying provider error.
        source: ProviderError,
    },

    /// One or more optional dependencies were missing; composition ran to
    /// the end of the registry and aggregated them.
    #[error("{0}")]
    MissingDependencies(MissingDependencyReport),
}

/// Builder for configuring a [`Composer`].
pub struct ComposerBuilder {
    env: ProjectEnv,
    providers: Vec<ProviderBox>,
    resolver: Option<Box<dyn PluginResolver>>,
    config: ToolConfig,
    run: RunContext,
}

impl ComposerBuilder {
    /// Creates a builder for the given project environment.
    #[must_use]
    pub fn new(env: ProjectEnv) -> Self {
        Self {
            env,
            providers: Vec::new(),
            resolver: None,
            config: ToolConfig::default(),
            run: RunContext::default(),
        }
    }

    /// Adds a provider to the end of the registry.
    #[must_use]
    pub fn provider<P: Provider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Adds a boxed provider to the end of the registry.
    #[must_use]
    pub fn provider_box(mut self, provider: ProviderBox) -> Self {
        self.providers.push(provider);
        self
    }

    /// Appends a whole provider registry, preserving order.
    #[must_use]
    pub fn providers(mut self, providers: Vec<ProviderBox>) -> Self {
        self.providers.extend(providers);
        self
    }

    /// Sets the plugin resolver. Defaults to [`NodeModulesResolver`] rooted
    /// at the project root.
    #[must_use]
    pub fn resolver(mut self, resolver: Box<dyn PluginResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Sets the tool configuration.
    #[must_use]
    pub fn config(mut self, config: ToolConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the run context.
    #[must_use]
    pub fn run_context(mut self, run: RunContext) -> Self {
        self.run = run;
        self
    }

    /// Builds the composer.
    #[must_use]
    pub fn build(self) -> Composer {
        let resolver = self
            .resolver
            .unwrap_or_else(|| Box::new(NodeModulesResolver::new(self.env.root.clone())));
        Composer {
            env: self.env,
            providers: self.providers,
            resolver,
            config: self.config,
            run: self.run,
        }
    }
}

/// Executes a provider registry against a probed project environment.
///
/// Use [`Composer::builder()`] to construct an instance.
pub struct Composer {
    env: ProjectEnv,
    providers: Vec<ProviderBox>,
    resolver: Box<dyn PluginResolver>,
    config: ToolConfig,
    run: RunContext,
}

impl Composer {
    /// Creates a new builder for the given project environment.
    #[must_use]
    pub fn builder(env: ProjectEnv) -> ComposerBuilder {
        ComposerBuilder::new(env)
    }

    /// Returns the probed project environment.
    #[must_use]
    pub fn env(&self) -> &ProjectEnv {
        &self.env
    }

    /// Returns the run context this composer was built with.
    #[must_use]
    pub fn run_context(&self) -> &RunContext {
        &self.run
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Runs every provider in registry order and returns the accumulated
    /// fragment list.
    ///
    /// Providers run strictly sequentially; each sees the fragments of all
    /// earlier providers. A provider failing with
    /// [`ProviderError::MissingDependency`] is skipped and its package name
    /// recorded; after the full traversal a non-empty record aborts with
    /// [`ComposeError::MissingDependencies`]. Any other provider failure
    /// aborts immediately, before later providers run.
    ///
    /// Deterministic: for a fixed filesystem snapshot the output list is
    /// identical across runs, in content and in order.
    ///
    /// # Errors
    ///
    /// See [`ComposeError`].
    pub fn compose(&self) -> Result<Vec<Fragment>, ComposeError> {
        info!("Composing lint config for {}", self.env.root.display());

        let ctx = ComposeContext {
            env: &self.env,
            resolver: self.resolver.as_ref(),
            config: &self.config,
        };

        let mut fragments: Vec<Fragment> = Vec::new();
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for provider in &self.providers {
            let name = provider.name();
            if !self.config.is_module_enabled(name) {
                debug!("Skipping disabled module: {name}");
                continue;
            }

            debug!("Getting: {name}");
            match provider.provide(&ctx, &fragments) {
                Ok(contribution) if contribution.is_skip() => {
                    debug!("Skip: {name}");
                }
                Ok(contribution) => {
                    let produced = contribution.into_fragments();
                    debug!("{name}: {} fragment(s)", produced.len());
                    fragments.extend(produced);
                }
                Err(ProviderError::MissingDependency(package)) => {
                    warn!("Module {name} needs `{package}`, which is not installed");
                    missing.insert(package);
                }
                Err(source) => {
                    return Err(ComposeError::Provider {
                        name: name.to_string(),
                        source,
                    });
                }
            }
        }

        if !missing.is_empty() {
            return Err(ComposeError::MissingDependencies(
                MissingDependencyReport::new(missing),
            ));
        }

        info!("Composed {} fragment(s)", fragments.len());
        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Contribution;
    use crate::probe::{FeatureFlags, ProjectEnv};
    use crate::resolver::StaticResolver;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn env() -> ProjectEnv {
        ProjectEnv {
            root: std::path::PathBuf::from("/project"),
            dependencies: std::collections::BTreeSet::new(),
            flags: FeatureFlags::default(),
            has_gitignore: false,
            has_prettierignore: false,
            has_tsconfig: false,
        }
    }

    struct Emits(&'static str);

    impl Provider for Emits {
        fn name(&self) -> &'static str {
            self.0
        }
        fn provide(
            &self,
            _ctx: &ComposeContext<'_>,
            _acc: &[Fragment],
        ) -> Result<Contribution, ProviderError> {
            Ok(Fragment::named(self.0).into())
        }
    }

    struct Skips;

    impl Provider for Skips {
        fn name(&self) -> &'static str {
            "skips"
        }
        fn provide(
            &self,
            _ctx: &ComposeContext<'_>,
            _acc: &[Fragment],
        ) -> Result<Contribution, ProviderError> {
            Ok(Contribution::Skip)
        }
    }

    struct NeedsPackage(&'static str);

    impl Provider for NeedsPackage {
        fn name(&self) -> &'static str {
            "needs-package"
        }
        fn provide(
            &self,
            ctx: &ComposeContext<'_>,
            _acc: &[Fragment],
        ) -> Result<Contribution, ProviderError> {
            let plugin = ctx.resolve_plugin(self.0)?;
            Ok(Fragment::new().with_plugin("x", plugin).into())
        }
    }

    struct Fatal;

    impl Provider for Fatal {
        fn name(&self) -> &'static str {
            "fatal"
        }
        fn provide(
            &self,
            _ctx: &ComposeContext<'_>,
            _acc: &[Fragment],
        ) -> Result<Contribution, ProviderError> {
            Err(ProviderError::Invalid("broken input".into()))
        }
    }

    struct Tracks(Arc<AtomicBool>);

    impl Provider for Tracks {
        fn name(&self) -> &'static str {
            "tracks"
        }
        fn provide(
            &self,
            _ctx: &ComposeContext<'_>,
            _acc: &[Fragment],
        ) -> Result<Contribution, ProviderError> {
            self.0.store(true, Ordering::SeqCst);
            Ok(Contribution::Skip)
        }
    }

    /// Emits a fragment naming how many fragments it observed, proving
    /// later providers see earlier output.
    struct CountsPrior;

    impl Provider for CountsPrior {
        fn name(&self) -> &'static str {
            "counts-prior"
        }
        fn provide(
            &self,
            _ctx: &ComposeContext<'_>,
            acc: &[Fragment],
        ) -> Result<Contribution, ProviderError> {
            Ok(Fragment::named(format!("saw-{}", acc.len())).into())
        }
    }

    #[test]
    fn fragments_accumulate_in_registry_order() {
        let composer = Composer::builder(env())
            .provider(Emits("first"))
            .provider(Skips)
            .provider(Emits("second"))
            .build();

        let fragments = composer.compose().expect("compose");
        let names: Vec<&str> = fragments.iter().filter_map(|f| f.name.as_deref()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn later_provider_observes_earlier_fragments() {
        let composer = Composer::builder(env())
            .provider(Emits("a"))
            .provider(Emits("b"))
            .provider(CountsPrior)
            .build();

        let fragments = composer.compose().expect("compose");
        assert_eq!(fragments[2].name.as_deref(), Some("saw-2"));
    }

    #[test]
    fn missing_dependencies_aggregate_across_providers() {
        let composer = Composer::builder(env())
            .provider(NeedsPackage("pkg-a"))
            .provider(Emits("mid"))
            .provider(NeedsPackage("pkg-b"))
            .provider(NeedsPackage("pkg-a"))
            .resolver(Box::new(StaticResolver::new()))
            .build();

        let err = composer.compose().expect_err("should abort");
        match err {
            ComposeError::MissingDependencies(report) => {
                let names: Vec<&str> = report.packages().collect();
                assert_eq!(names, vec!["pkg-a", "pkg-b"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fatal_error_short_circuits() {
        let invoked = Arc::new(AtomicBool::new(false));
        let composer = Composer::builder(env())
            .provider(Emits("before"))
            .provider(Fatal)
            .provider(Tracks(Arc::clone(&invoked)))
            .build();

        let err = composer.compose().expect_err("should abort");
        assert!(matches!(err, ComposeError::Provider { ref name, .. } if name == "fatal"));
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[test]
    fn disabled_module_is_never_invoked() {
        let invoked = Arc::new(AtomicBool::new(false));
        let config = ToolConfig::parse("[modules.tracks]\nenabled = false\n").expect("parse");
        let composer = Composer::builder(env())
            .provider(Tracks(Arc::clone(&invoked)))
            .config(config)
            .build();

        composer.compose().expect("compose");
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[test]
    fn composition_is_deterministic() {
        let composer = Composer::builder(env())
            .provider(Emits("a"))
            .provider(CountsPrior)
            .provider(Emits("b"))
            .build();

        let first = composer.compose().expect("compose");
        let second = composer.compose().expect("compose");
        assert_eq!(first, second);
    }
}
