//! # lintweave-core
//!
//! Core framework for composing flat lint configuration from an ordered
//! registry of providers.
//!
//! This crate provides the foundational traits and types for building a
//! lint-config composer. It includes:
//!
//! - [`Provider`] trait for configuration modules
//! - [`Composer`] for ordered, fault-tolerant composition
//! - [`probe`] for detecting which ecosystem features a project uses
//! - [`PluginResolver`] for locating optional plugin packages
//! - [`deep_merge`] and [`RestrictedImports`] for override merging
//!
//! ## Example
//!
//! ```ignore
//! use lintweave_core::{probe, Composer};
//!
//! let env = probe(project_root)?;
//! let composer = Composer::builder(env)
//!     .providers(lintweave_modules::default_registry())
//!     .build();
//! let fragments = composer.compose()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod config;
mod context;
mod fragment;
mod merge;
mod probe;
mod provider;
mod report;
mod resolver;

pub use composer::{Composer, ComposerBuilder, ComposeError};
pub use config::{ConfigError, ModuleConfig, ToolConfig};
pub use context::{ComposeContext, RunContext};
pub use fragment::{Contribution, Fragment, PluginRef, RuleMap};
pub use merge::{deep_merge, RestrictedImports, RestrictedPath, RestrictedPattern};
pub use probe::{probe, FeatureFlags, ProbeError, ProjectEnv};
pub use provider::{Provider, ProviderBox, ProviderError};
pub use report::{MissingDependencyReport, EXIT_CONFIG};
pub use resolver::{NodeModulesResolver, PluginResolver, ResolveError, StaticResolver};
