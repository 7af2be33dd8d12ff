//! Domain reputation checking.
//!
//! Scores how likely a domain is to belong to a disposable email provider,
//! with supporting signals (blocklist membership, domain age, website
//! resolution, catch-all acceptance, email security records).

mod client;
mod types;

pub use client::DomainCheckClient;
pub use types::{DomainCheckRequest, DomainCheckResponse, DomainMeta};
