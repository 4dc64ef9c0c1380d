//! Urlwarden error types.

use thiserror::Error;

/// Errors that can occur during URL signing and verification.
#[derive(Debug, Error)]
pub enum UrlwardenError {
    /// Signer key is empty.
    #[error("Signer key must not be empty")]
    InvalidSignerKey,

    /// A reserved parameter name is empty, or both names are identical.
    #[error("Invalid url parameter: {0}")]
    InvalidUrlParameter(String),

    /// Input is not a parseable absolute URL.
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    /// The URL to sign already carries a reserved parameter.
    #[error("Url already contains reserved parameter '{0}'")]
    ReservedParameter(String),
}
