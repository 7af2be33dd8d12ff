//! Unified entry point over both check endpoints.

use std::time::Duration;

use crate::domain::{DomainCheckClient, DomainCheckResponse};
use crate::email::{EmailCheckClient, EmailCheckResponse};
use crate::error::Result;

/// Combined client exposing both reputation checks behind one API key.
#[derive(Debug, Clone)]
pub struct Detector {
    domain: DomainCheckClient,
    email: EmailCheckClient,
}

impl Detector {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();

        Self {
            domain: DomainCheckClient::new(api_key.clone()),
            email: EmailCheckClient::new(api_key),
        }
    }

    /// Set the timeout for the HTTP round trip on both clients.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.domain = self.domain.with_timeout(timeout);
        self.email = self.email.with_timeout(timeout);
        self
    }

    /// Point both clients at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.domain = self.domain.with_base_url(base_url.clone());
        self.email = self.email.with_base_url(base_url);
        self
    }

    pub async fn check_domain(&self, domain: &str) -> Result<DomainCheckResponse> {
        self.domain.check(domain).await
    }

    pub async fn check_email(&self, email: &str) -> Result<EmailCheckResponse> {
        self.email.check(email).await
    }
}
