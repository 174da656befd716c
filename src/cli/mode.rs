use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{CLI_SUBCOMMANDS, FLAG_PREFIX};

/// Which side of the manager an invocation is headed for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Launch the TUI
    #[default]
    Interactive,
    /// Run one of the CLI subcommands
    Subcommand,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Subcommand => "subcommand",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if a token names one of the CLI subcommands
pub fn is_cli_subcommand(token: &str) -> bool {
    CLI_SUBCOMMANDS.contains(&token)
}

/// First token that is not a flag
pub fn first_positional<S: AsRef<str>>(args: &[S]) -> Option<&str> {
    args.iter()
        .map(AsRef::<str>::as_ref)
        .find(|arg| !arg.starts_with(FLAG_PREFIX))
}

/// Classify by the first non-flag token; no such token means interactive
pub fn classify<S: AsRef<str>>(args: &[S]) -> ExecutionMode {
    match first_positional(args) {
        Some(token) if is_cli_subcommand(token) => ExecutionMode::Subcommand,
        _ => ExecutionMode::Interactive,
    }
}
