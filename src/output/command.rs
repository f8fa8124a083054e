use crate::collector::ASSET_TYPE;
use crate::model::Advisory;
use anyhow::Result;
use std::io::Write;

use super::exit_codes;

/// Builds the single `composer require` line that upgrades every vulnerable
/// package to its patched versions, or `None` when there is nothing to fix.
pub fn build_command(advisories: &[Advisory]) -> Option<String> {
    if advisories.is_empty() {
        return None;
    }

    let clauses: Vec<String> = advisories
        .iter()
        .map(|a| format!("'{}/{}:{}'", ASSET_TYPE, a.module_name, a.patched_versions))
        .collect();

    Some(format!(
        "composer require {} --update-with-dependencies",
        clauses.join(" ")
    ))
}

/// Prints the upgrade command. This mode reports a remediation command, not a
/// pass/fail signal, so the status is success either way.
pub fn print_command(out: &mut dyn Write, advisories: &[Advisory]) -> Result<u8> {
    if let Some(command) = build_command(advisories) {
        writeln!(out, "{}", command)?;
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisory(module_name: &str, patched_versions: &str) -> Advisory {
        Advisory {
            severity: "high".to_string(),
            title: "X".to_string(),
            module_name: module_name.to_string(),
            vulnerable_versions: "<1.0.0".to_string(),
            recommendation: "upgrade".to_string(),
            patched_versions: patched_versions.to_string(),
            url: "http://x".to_string(),
        }
    }

    #[test]
    fn test_build_command_single_advisory() {
        let command = build_command(&[advisory("left-pad", "^1.0.0")]).unwrap();
        assert_eq!(
            command,
            "composer require 'npm-asset/left-pad:^1.0.0' --update-with-dependencies"
        );
    }

    #[test]
    fn test_build_command_joins_clauses_with_spaces() {
        let command = build_command(&[
            advisory("left-pad", "^1.0.0"),
            advisory("lodash", ">=4.17.12"),
        ])
        .unwrap();

        assert_eq!(
            command,
            "composer require 'npm-asset/left-pad:^1.0.0' 'npm-asset/lodash:>=4.17.12' --update-with-dependencies"
        );
    }

    #[test]
    fn test_no_advisories_prints_nothing_and_succeeds() {
        let mut buffer = Vec::new();
        let status = print_command(&mut buffer, &[]).unwrap();

        assert_eq!(status, exit_codes::SUCCESS);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_print_command_status_with_advisories() {
        let mut buffer = Vec::new();
        let status = print_command(&mut buffer, &[advisory("left-pad", "^1.0.0")]).unwrap();

        assert_eq!(status, exit_codes::SUCCESS);
        let printed = String::from_utf8(buffer).unwrap();
        assert_eq!(
            printed,
            "composer require 'npm-asset/left-pad:^1.0.0' --update-with-dependencies\n"
        );
    }
}
