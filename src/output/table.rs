use crate::model::{Advisory, AuditReport};
use anyhow::Result;
use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

use super::exit_codes;

#[derive(Tabled)]
struct AdvisoryRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Dependency")]
    dependency: String,
    #[tabled(rename = "Vulnerable versions")]
    vulnerable_versions: String,
    #[tabled(rename = "Recommendation")]
    recommendation: String,
    #[tabled(rename = "URL")]
    url: String,
}

/// Renders the advisory table.
///
/// Returns the "vulnerabilities found" status when the table is non-empty so
/// CI callers can fail a build step on it; an empty advisory list is a
/// success.
pub fn print_table(out: &mut dyn Write, report: &AuditReport) -> Result<u8> {
    if report.advisories.is_empty() {
        writeln!(out, "\x1b[32mNo known vulnerabilities.\x1b[0m")?;
        return Ok(exit_codes::SUCCESS);
    }

    writeln!(out)?;
    writeln!(
        out,
        "Audit completed at: {}",
        report.audited_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out)?;
    writeln!(out, "Found {} vulnerabilities:", report.advisories.len())?;
    writeln!(out)?;

    let rows: Vec<AdvisoryRow> = report.advisories.iter().map(advisory_row).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    writeln!(out, "{}", table)?;

    Ok(exit_codes::VULNERABILITIES)
}

fn advisory_row(advisory: &Advisory) -> AdvisoryRow {
    AdvisoryRow {
        severity: format_severity(&advisory.severity),
        title: advisory.title.clone(),
        dependency: advisory.module_name.clone(),
        vulnerable_versions: advisory.vulnerable_versions.clone(),
        recommendation: advisory.recommendation.clone(),
        url: advisory.url.clone(),
    }
}

fn format_severity(severity: &str) -> String {
    match severity {
        "critical" => "\x1b[31mcritical\x1b[0m".to_string(),
        "high" => "\x1b[91mhigh\x1b[0m".to_string(),
        "moderate" => "\x1b[33mmoderate\x1b[0m".to_string(),
        "low" => "\x1b[32mlow\x1b[0m".to_string(),
        _ => severity.to_string(),
    }
}
