mod command;
mod json;
mod table;

pub use command::{build_command, print_command};
pub use json::print_raw;
pub use table::print_table;

use crate::model::AuditReport;
use anyhow::Result;
use std::io::Write;

/// Process exit codes for CI integration.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const VULNERABILITIES: u8 = 1;
    pub const ERROR: u8 = 2;
}

/// Output mode for audit results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable advisory table
    Table,
    /// Raw audit response for programmatic use
    Json,
    /// Equivalent composer upgrade command
    Command,
}

impl OutputMode {
    /// Resolves the mode from the two CLI flags. `--json` is checked before
    /// `--command`, so it wins when both are given.
    pub fn from_flags(json: bool, command: bool) -> Self {
        if json {
            OutputMode::Json
        } else if command {
            OutputMode::Command
        } else {
            OutputMode::Table
        }
    }
}

/// Renders the report in the selected mode and returns the exit status.
pub fn print_report(out: &mut dyn Write, report: &AuditReport, mode: OutputMode) -> Result<u8> {
    match mode {
        OutputMode::Table => print_table(out, report),
        OutputMode::Json => print_raw(out, report),
        OutputMode::Command => print_command(out, &report.advisories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Table);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Json);
        assert_eq!(OutputMode::from_flags(false, true), OutputMode::Command);
    }

    #[test]
    fn test_json_wins_over_command() {
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Json);
    }
}
