//! Fragment serialization for the `compose` command.

use crate::OutputFormat;
use anyhow::{Context, Result};
use lintweave_core::Fragment;

/// Serializes the composed fragment list in the requested format.
pub fn render(fragments: &[Fragment], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(fragments),
        OutputFormat::Pretty => serde_json::to_string_pretty(fragments),
    };
    rendered.context("Failed to serialize composed config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_json_is_one_line() {
        let fragments = vec![Fragment::named("a"), Fragment::named("b")];
        let out = render(&fragments, OutputFormat::Json).expect("render");
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains(r#""name":"a""#));
    }

    #[test]
    fn pretty_json_spans_lines() {
        let fragments = vec![Fragment::named("a")];
        let out = render(&fragments, OutputFormat::Pretty).expect("render");
        assert!(out.lines().count() > 1);
    }
}
