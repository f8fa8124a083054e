use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single known-vulnerability record returned by the audit service.
///
/// Fields are carried verbatim from the API response; nothing is derived
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub severity: String,
    pub title: String,
    pub module_name: String,
    pub vulnerable_versions: String,
    pub recommendation: String,
    pub patched_versions: String,
    pub url: String,
}

/// The decoded response of one audit request.
///
/// `raw` keeps the response body exactly as the service sent it so raw mode
/// can pass it through without reshaping; `advisories` is the typed view the
/// table and command presenters work from.
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub raw: serde_json::Value,
    pub advisories: Vec<Advisory>,
    pub audited_at: DateTime<Utc>,
}

impl AuditReport {
    pub fn new(raw: serde_json::Value, advisories: Vec<Advisory>) -> Self {
        Self {
            raw,
            advisories,
            audited_at: Utc::now(),
        }
    }

    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_advisory() -> Advisory {
        Advisory {
            severity: "high".to_string(),
            title: "Prototype Pollution".to_string(),
            module_name: "lodash".to_string(),
            vulnerable_versions: "<4.17.12".to_string(),
            recommendation: "Upgrade to version 4.17.12 or later.".to_string(),
            patched_versions: ">=4.17.12".to_string(),
            url: "https://npmjs.com/advisories/1065".to_string(),
        }
    }

    #[test]
    fn test_report_has_advisories() {
        let report = AuditReport::new(json!({"advisories": []}), vec![]);
        assert!(!report.has_advisories());

        let report = AuditReport::new(json!({}), vec![sample_advisory()]);
        assert!(report.has_advisories());
    }

    #[test]
    fn test_advisory_round_trips_verbatim() {
        let advisory = sample_advisory();
        let value = serde_json::to_value(&advisory).unwrap();
        let back: Advisory = serde_json::from_value(value).unwrap();
        assert_eq!(back, advisory);
    }
}
