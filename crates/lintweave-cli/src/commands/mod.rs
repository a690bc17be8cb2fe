//! CLI command implementations.

pub mod compose;
pub mod list_modules;
pub mod output;
pub mod probe;
