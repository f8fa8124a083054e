use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::model::{Advisory, AuditReport};

use super::AuditRequest;

/// Security-audit endpoint of the public npm registry.
pub const DEFAULT_ENDPOINT: &str = "https://registry.npmjs.org/-/npm/v1/security/audits";

pub struct NpmAuditClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl NpmAuditClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

#[derive(Deserialize)]
struct AuditResponse {
    advisories: AdvisoryListing,
}

/// The endpoint documents `advisories` as a list, but the live service
/// answers with an object keyed by advisory id. Accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum AdvisoryListing {
    List(Vec<Advisory>),
    ById(BTreeMap<String, Advisory>),
}

/// Decodes the advisory list out of a raw audit response.
///
/// # Errors
///
/// Returns an error when the response does not carry a recognizable
/// `advisories` field, so a malformed answer fails with a clear message
/// instead of an unchecked field access downstream.
pub fn parse_advisories(raw: &serde_json::Value) -> Result<Vec<Advisory>> {
    let response: AuditResponse =
        serde_json::from_value(raw.clone()).context("unexpected audit response shape")?;

    Ok(match response.advisories {
        AdvisoryListing::List(advisories) => advisories,
        AdvisoryListing::ById(by_id) => by_id.into_values().collect(),
    })
}

#[async_trait]
impl super::AuditClient for NpmAuditClient {
    fn name(&self) -> &'static str {
        "npm registry"
    }

    async fn audit(&self, request: &AuditRequest) -> Result<AuditReport> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .with_context(|| format!("failed to contact audit service at {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("audit service at {} answered {}", self.endpoint, status);
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .context("audit response is not valid JSON")?;
        let advisories = parse_advisories(&raw)?;

        Ok(AuditReport::new(raw, advisories))
    }
}
