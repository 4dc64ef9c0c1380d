//! Signer configuration.

use crate::UrlwardenError;

/// Default name of the signature query parameter.
pub const DEFAULT_SIGNATURE_PARAM: &str = "signature";

/// Default name of the expiry query parameter.
pub const DEFAULT_EXPIRE_PARAM: &str = "url_expires_at";

/// Configuration for a URL signer.
///
/// Holds the signing secret and the names of the two reserved query
/// parameters the signer manages. Validated once at signer construction
/// and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SignerConfig {
    /// Signing secret. Must not be empty.
    ///
    /// SECURITY: treat this as an opaque secret; it never appears in
    /// signed output or log records.
    pub signer_key: String,

    /// Query parameter carrying the hex signature.
    pub signature_param: String,

    /// Query parameter carrying the expiry unix timestamp.
    pub expire_param: String,
}

impl SignerConfig {
    /// Create a configuration with the default parameter names.
    pub fn new(signer_key: impl Into<String>) -> Self {
        Self {
            signer_key: signer_key.into(),
            signature_param: DEFAULT_SIGNATURE_PARAM.to_string(),
            expire_param: DEFAULT_EXPIRE_PARAM.to_string(),
        }
    }

    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), UrlwardenError> {
        if self.signer_key.is_empty() {
            return Err(UrlwardenError::InvalidSignerKey);
        }
        if self.signature_param.is_empty() {
            return Err(UrlwardenError::InvalidUrlParameter(
                "signature parameter must not be empty".to_string(),
            ));
        }
        if self.expire_param.is_empty() {
            return Err(UrlwardenError::InvalidUrlParameter(
                "expire parameter must not be empty".to_string(),
            ));
        }
        if self.signature_param == self.expire_param {
            return Err(UrlwardenError::InvalidUrlParameter(
                "signature and expire parameters must differ".to_string(),
            ));
        }
        Ok(())
    }
}
