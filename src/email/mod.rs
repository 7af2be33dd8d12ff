//! Email address reputation checking.
//!
//! Scores how likely an address is to be disposable, with the same domain
//! signals as the domain check plus address-level ones (machine-generated
//! local parts, plus-addressing).

mod client;
mod types;

pub use client::EmailCheckClient;
pub use types::{EmailCheckRequest, EmailCheckResponse, EmailMeta};
