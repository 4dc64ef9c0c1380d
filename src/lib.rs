//! # Urlwarden
//!
//! **Expiring, tamper-evident signed URLs for Rust.**
//!
//! Urlwarden appends an expiry timestamp and a keyed HMAC signature to a
//! URL's query string, and later verifies that the URL is unexpired and
//! untouched. Typical use: web servers issuing time-limited download or
//! callback links and validating them on the way back in.
//!
//! ## Features
//!
//! - **Deterministic canonicalization** — query keys are sorted before
//!   signing, so logically equal parameter sets sign identically
//! - **Inclusive expiry boundary** — a URL is valid through its expiry
//!   second, invalid after
//! - **Constant-time comparison** — signature checks leak nothing through
//!   response timing
//! - **Collision rejection** — signing refuses URLs that already carry a
//!   reserved parameter instead of silently overwriting caller data
//! - **Pluggable scheme and clock** — HMAC-SHA256 by default, HMAC-SHA512
//!   or your own [`SignatureScheme`]; time comes from a [`Clock`] you can
//!   replace in tests
//!
//! ## Quickstart
//!
//! ```
//! use chrono::{Duration, Utc};
//! use urlwarden::{SignerConfig, UrlSigner};
//!
//! fn main() -> Result<(), urlwarden::UrlwardenError> {
//!     let signer = UrlSigner::new(SignerConfig::new("my-secret-key"))?;
//!
//!     let signed = signer.sign(
//!         "https://example.com/download?file=report.pdf",
//!         Utc::now() + Duration::hours(1),
//!     )?;
//!
//!     assert!(signer.verify(&signed)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Threat Model
//!
//! Urlwarden protects against:
//! - **Tampering** — changing the path or any query parameter of a signed
//!   URL invalidates it
//! - **Forgery** — producing a valid signature requires the signer key
//! - **Timing probes** — digest comparison is constant-time
//!
//! Urlwarden does **not** hide the URL's contents (parameters travel in
//! the clear), does not manage key rotation or storage, and is not a
//! session or authentication system.
//!
//! ## Verification is order-sensitive
//!
//! Signing sorts query keys; verification recomputes over the parameter
//! order the URL arrived with, minus the signature parameter. An
//! intermediary that reorders parameters invalidates the URL even when no
//! value changed.

#![deny(warnings)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/urlwarden/0.1.0")]

// Core modules
pub mod clock;
pub mod config;
pub mod errors;

// Canonicalization layer
pub mod canonical;

// Crypto layer
pub mod crypto;

// Signer (main public API)
pub mod signer;

// Re-exports for public API
pub use canonical::{ParsedUrl, QueryParams};
pub use clock::{Clock, SystemClock};
pub use config::{SignerConfig, DEFAULT_EXPIRE_PARAM, DEFAULT_SIGNATURE_PARAM};
pub use crypto::{HmacSha256, HmacSha512, SignatureScheme};
pub use errors::UrlwardenError;
pub use signer::UrlSigner;

#[cfg(any(test, feature = "test-seams"))]
pub use clock::MockClock;
