mod npm;
mod request;

pub use npm::{NpmAuditClient, DEFAULT_ENDPOINT};
pub use request::AuditRequest;

use crate::model::AuditReport;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait AuditClient: Send + Sync {
    fn name(&self) -> &'static str;
    async fn audit(&self, request: &AuditRequest) -> Result<AuditReport>;
}

pub fn default_client(endpoint: impl Into<String>, timeout: Duration) -> NpmAuditClient {
    NpmAuditClient::new(endpoint, timeout)
}
