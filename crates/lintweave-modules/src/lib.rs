//! # lintweave-modules
//!
//! Built-in configuration modules for lintweave: the ordered registry of
//! providers that assemble the default flat lint configuration, plus the
//! file-glob tables they share.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comments;
mod data_formats;
/// File glob constants shared by the built-in modules.
pub mod file_globs;
mod globals;
mod ignore_file;
mod imports;
mod js;
mod lingui;
mod next;
mod overrides;
mod prettier;
mod react;
mod registry;
mod storybook;
#[cfg(test)]
mod test_util;
mod typescript;

pub use comments::CommentDirectives;
pub use data_formats::{Css, CssModules, Json, Jsonc, Markdown, MsJsonc};
pub use globals::Globals;
pub use ignore_file::{AppPrettierIgnore, BuiltInPrettierIgnore, GitIgnore};
pub use imports::ImportPlugin;
pub use js::JsRecommended;
pub use lingui::Lingui;
pub use next::NextJs;
pub use overrides::HouseOverrides;
pub use prettier::Prettier;
pub use react::{React, ReactHooks};
pub use registry::{default_registry, module_names};
pub use storybook::Storybook;
pub use typescript::TypeScript;
