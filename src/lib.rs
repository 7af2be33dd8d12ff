//! Client library for the Temp Mail Detector reputation API.
//!
//! The service scores how likely a domain or email address is to belong to
//! a disposable email provider. This crate wraps its two endpoints behind
//! typed clients: [`DomainCheckClient`], [`EmailCheckClient`], and the
//! combined [`Detector`].

pub mod detector;
pub mod domain;
pub mod email;
pub mod error;

mod executor;

pub use error::{DetectorError, Result};

pub use detector::Detector;
pub use domain::{DomainCheckClient, DomainCheckRequest, DomainCheckResponse, DomainMeta};
pub use email::{EmailCheckClient, EmailCheckRequest, EmailCheckResponse, EmailMeta};
