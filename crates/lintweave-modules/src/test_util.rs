//! Test fixtures for exercising providers in isolation.

use lintweave_core::{
    ComposeContext, FeatureFlags, PluginRef, ProjectEnv, StaticResolver, ToolConfig,
};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Owns everything a [`ComposeContext`] borrows.
pub struct TestCtx {
    pub env: ProjectEnv,
    pub resolver: StaticResolver,
    pub config: ToolConfig,
}

impl TestCtx {
    pub fn new() -> Self {
        Self {
            env: ProjectEnv {
                root: PathBuf::from("/project"),
                dependencies: BTreeSet::new(),
                flags: FeatureFlags::default(),
                has_gitignore: false,
                has_prettierignore: false,
                has_tsconfig: false,
            },
            resolver: StaticResolver::new(),
            config: ToolConfig::default(),
        }
    }

    pub fn flags(mut self, flags: FeatureFlags) -> Self {
        self.env.flags = flags;
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.env.root = root.into();
        self
    }

    pub fn package(mut self, name: &str) -> Self {
        self.resolver = self.resolver.with_package(PluginRef::new(name));
        self
    }

    pub fn ctx(&self) -> ComposeContext<'_> {
        ComposeContext {
            env: &self.env,
            resolver: &self.resolver,
            config: &self.config,
        }
    }
}
