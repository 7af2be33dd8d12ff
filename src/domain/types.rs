use serde::{Deserialize, Serialize};

/// Request payload for a domain check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCheckRequest {
    pub domain: String,
}

/// Reputation verdict for a single domain.
///
/// Fields the service omits decode to their zero values; a field of the
/// wrong type fails decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainCheckResponse {
    /// The domain that was checked, echoed back by the service.
    #[serde(default)]
    pub domain: String,

    /// Risk score; range and direction are defined by the provider.
    #[serde(default)]
    pub score: i64,

    #[serde(default)]
    pub meta: DomainMeta,
}

/// Risk signals accompanying a domain score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainMeta {
    /// Domain appears on a disposable-provider blocklist.
    #[serde(default)]
    pub block_list: bool,

    /// Age of the domain registration in days.
    #[serde(default)]
    pub domain_age: i64,

    /// Domain serves a resolvable website.
    #[serde(default)]
    pub website_resolves: bool,

    /// Mail server accepts mail for any local part (catch-all).
    #[serde(default)]
    pub accepts_all_addresses: bool,

    /// Domain publishes valid email security records.
    #[serde(default)]
    pub valid_email_security: bool,
}
