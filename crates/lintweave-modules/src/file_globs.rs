//! File glob constants for the file classes the built-in modules target.

/// TypeScript sources, including JSX variants.
pub const ALL_TS_FILES: &[&str] = &["**/*.{ts,mts,tsx}"];

/// Every JavaScript-family source file.
pub const ALL_JS_FILES: &[&str] = &["**/*.{js,mjs,cjs,ts,mts,jsx,tsx}"];

/// Stylesheets.
pub const CSS_FILES: &[&str] = &["**/*.{css,scss}"];

/// Plain JSON and JSONC files.
pub const JSON_FILES: &[&str] = &["**/*.{json,jsonc}"];

/// JSONC files that tooling writes with Microsoft conventions
/// (trailing commas allowed).
pub const MS_JSONC_FILES: &[&str] = &["tsconfig.json", ".vscode/**/*.json"];

/// JSONC files, the Microsoft-flavoured ones included.
pub const JSONC_FILES: &[&str] = &["**/*.jsonc", "tsconfig.json", ".vscode/**/*.json"];

/// Markdown documents.
pub const MARKDOWN_FILES: &[&str] = &["**/*.{md,markdown}"];

/// Every file class any module targets.
pub const ALL_FILES: &[&str] = &["**/*.{js,mjs,cjs,ts,mts,jsx,tsx,css,scss,json,jsonc,md,markdown}"];

/// Copies a glob table into an owned list for a fragment field.
#[must_use]
pub fn patterns(globs: &[&str]) -> Vec<String> {
    globs.iter().map(ToString::to_string).collect()
}
