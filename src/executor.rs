use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{DetectorError, Result};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.tempmaildetector.com";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CONTENT_TYPE_JSON: &str = "application/json";
const USER_AGENT: &str = "tempmail-detector/0.1";

/// Shared request pipeline behind both check clients.
///
/// Owns the HTTP transport and the API credential. Each call is a single
/// linear marshal, send, status-check, unmarshal sequence; every stage
/// that can fail maps to its own [`DetectorError`] kind.
#[derive(Debug, Clone)]
pub(crate) struct RequestExecutor {
    http: Client,
    api_key: String,
}

impl RequestExecutor {
    pub(crate) fn new(api_key: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self { http, api_key }
    }

    /// Rebuild the transport with a new timeout; reqwest fixes the timeout
    /// at client construction.
    pub(crate) fn with_timeout(self, timeout: Duration) -> Self {
        Self::new(self.api_key, timeout)
    }

    /// POST `request` as JSON to `url` and decode the 200 response body.
    ///
    /// Any status other than 200 is a failure carrying the raw body text;
    /// the body is never parsed in that case, only surfaced as context.
    pub(crate) async fn post_json<Req, Resp>(&self, url: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_vec(request).map_err(DetectorError::Encode)?;

        debug!(url = %url, "Sending check request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(AUTHORIZATION, self.api_key.as_str())
            .body(body)
            .send()
            .await
            .map_err(DetectorError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(DetectorError::ResponseRead)?;

        if status != StatusCode::OK {
            return Err(DetectorError::UnexpectedStatus { status, body: text });
        }

        serde_json::from_str(&text).map_err(DetectorError::Decode)
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
