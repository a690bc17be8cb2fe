//! Global identifier declarations for browser and Node environments.

use crate::file_globs::{patterns, ALL_JS_FILES};
use lintweave_core::{ComposeContext, Contribution, Fragment, Provider, ProviderError};
use serde_json::{json, Map, Value};

const BROWSER_GLOBALS: &[&str] = &[
    "window",
    "document",
    "navigator",
    "location",
    "history",
    "console",
    "fetch",
    "localStorage",
    "sessionStorage",
    "setTimeout",
    "clearTimeout",
    "setInterval",
    "clearInterval",
    "requestAnimationFrame",
    "cancelAnimationFrame",
    "URL",
    "URLSearchParams",
    "Blob",
    "File",
    "FormData",
    "Event",
    "CustomEvent",
    "AbortController",
    "WebSocket",
    "Worker",
    "MutationObserver",
    "IntersectionObserver",
    "ResizeObserver",
    "performance",
    "crypto",
    "atob",
    "btoa",
    "queueMicrotask",
    "structuredClone",
    "alert",
    "confirm",
    "prompt",
];

const NODE_GLOBALS: &[&str] = &[
    "process",
    "Buffer",
    "global",
    "globalThis",
    "__dirname",
    "__filename",
    "module",
    "require",
    "exports",
    "setImmediate",
    "clearImmediate",
    "TextDecoder",
    "TextEncoder",
];

/// Declares browser and Node globals for all JS-family files.
pub struct Globals;

impl Provider for Globals {
    fn name(&self) -> &'static str {
        "globals"
    }

    fn provide(
        &self,
        _ctx: &ComposeContext<'_>,
        _acc: &[Fragment],
    ) -> Result<Contribution, ProviderError> {
        let mut globals = Map::new();
        for name in BROWSER_GLOBALS.iter().chain(NODE_GLOBALS) {
            globals.insert((*name).to_string(), Value::from("readonly"));
        }

        Ok(Fragment::named(self.name())
            .with_files(patterns(ALL_JS_FILES))
            .with_language_options(json!({
                "ecmaVersion": "latest",
                "globals": globals,
            }))
            .into())
    }
}
