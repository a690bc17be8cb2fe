//! Missing-dependency reporting.

use crate::context::RunContext;
use std::collections::BTreeSet;

/// Process exit code for configuration/environment errors (BSD `EX_CONFIG`).
///
/// Distinct from the generic failure code `1`: a missing optional dependency
/// is an environment problem, not a logic error.
pub const EXIT_CONFIG: i32 = 78;

/// Aggregated set of missing optional packages from one composition run.
///
/// Collected across the whole registry traversal so the user sees the
/// complete remediation list in one run. Set semantics: a package reported
/// by several providers appears once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependencyReport {
    packages: BTreeSet<String>,
}

impl MissingDependencyReport {
    /// Creates a report from the collected package names.
    #[must_use]
    pub fn new(packages: BTreeSet<String>) -> Self {
        Self { packages }
    }

    /// Missing package names in sorted order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    /// Number of distinct missing packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Returns `true` when nothing is missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// The literal install command remediating every missing package.
    #[must_use]
    pub fn install_command(&self) -> String {
        let names: Vec<&str> = self.packages().collect();
        format!("npm install --save-dev {}", names.join(" "))
    }

    /// Renders the consolidated diagnostic block.
    #[must_use]
    pub fn render(&self, run: &RunContext) -> String {
        let (error, reset) = if run.color {
            ("\x1b[31m", "\x1b[0m")
        } else {
            ("", "")
        };
        format!(
            "\n{error}ERROR: Failed to compose lint config, because some dependencies are missing{reset}. Run:\n    {}\n",
            self.install_command()
        )
    }
}

impl std::fmt::Display for MissingDependencyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.packages().collect();
        write!(f, "missing dependencies: {}", names.join(", "))
    }
}
