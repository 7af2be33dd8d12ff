use serde::{Deserialize, Serialize};

/// Request payload for an email address check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailCheckRequest {
    pub email: String,
}

/// Reputation verdict for a single email address.
///
/// Fields the service omits decode to their zero values; a field of the
/// wrong type fails decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailCheckResponse {
    /// The address that was checked, echoed back by the service.
    #[serde(default)]
    pub email: String,

    /// Risk score; range and direction are defined by the provider.
    #[serde(default)]
    pub score: i64,

    #[serde(default)]
    pub meta: EmailMeta,
}

/// Risk signals accompanying an email score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailMeta {
    /// Domain appears on a disposable-provider blocklist.
    #[serde(default)]
    pub block_list: bool,

    /// Age of the domain registration in days.
    #[serde(default)]
    pub domain_age: i64,

    /// Domain serves a resolvable website.
    #[serde(default)]
    pub website_resolves: bool,

    /// Local part looks machine-generated.
    #[serde(default)]
    pub random_characters: bool,

    /// Mail server accepts mail for any local part (catch-all).
    #[serde(default)]
    pub accepts_all_addresses: bool,

    /// Address uses plus-addressing.
    #[serde(default)]
    pub uses_plus: bool,
}
