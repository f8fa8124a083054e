use crate::model::AuditReport;
use anyhow::Result;
use std::io::Write;

use super::exit_codes;

/// Emits the audit response exactly as the service sent it. Always succeeds,
/// whether or not vulnerabilities were found.
pub fn print_raw(out: &mut dyn Write, report: &AuditReport) -> Result<u8> {
    let json = serde_json::to_string(&report.raw)?;
    writeln!(out, "{}", json)?;
    Ok(exit_codes::SUCCESS)
}
