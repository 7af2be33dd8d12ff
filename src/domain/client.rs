use std::time::Duration;

use tracing::instrument;

use super::types::{DomainCheckRequest, DomainCheckResponse};
use crate::error::Result;
use crate::executor::{normalize_base_url, RequestExecutor, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Client for the domain reputation endpoint.
///
/// Immutable after construction; one instance may issue any number of
/// sequential or concurrent checks.
#[derive(Debug, Clone)]
pub struct DomainCheckClient {
    executor: RequestExecutor,
    base_url: String,
}

impl DomainCheckClient {
    /// Create a new client authenticating with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            executor: RequestExecutor::new(api_key.into(), DEFAULT_TIMEOUT),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the timeout for the HTTP round trip.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.executor = self.executor.with_timeout(timeout);
        self
    }

    /// Point the client at a different API host, e.g. a proxy or a local
    /// test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    /// Check the reputation of a domain.
    ///
    /// Issues exactly one request per call. The domain is sent as-is;
    /// format validation happens server-side.
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn check(&self, domain: &str) -> Result<DomainCheckResponse> {
        let url = format!("{}/check", self.base_url);
        let request = DomainCheckRequest {
            domain: domain.to_string(),
        };

        self.executor.post_json(&url, &request).await
    }
}
