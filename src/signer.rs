//! URL signer - the main public API.
//!
//! `sign` runs: parse → reject reserved-parameter collisions → inject
//! expiry → sort keys → compute signature over the canonical string →
//! append the signature parameter → reassemble.
//!
//! `verify` runs: parse → require both signer parameters → check expiry
//! against the clock → strip the signature parameter → recompute over the
//! remaining parameters in their observed order → constant-time compare.
//!
//! The order asymmetry is deliberate: signing sorts keys so logically
//! equal inputs sign identically, while verification trusts the order the
//! signed URL arrived with. An intermediary that reorders parameters
//! invalidates the URL even if no value changed.

use crate::canonical::{ParsedUrl, QueryParams};
use crate::clock::{Clock, SystemClock};
use crate::config::SignerConfig;
use crate::crypto::{digests_match, HmacSha256, SignatureScheme};
use crate::UrlwardenError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Signs URLs with an expiry, and verifies previously signed URLs.
///
/// Holds only immutable state after construction, so a shared reference
/// can sign and verify from multiple threads concurrently.
pub struct UrlSigner {
    config: SignerConfig,
    clock: Arc<dyn Clock>,
    scheme: Box<dyn SignatureScheme>,
}

impl UrlSigner {
    /// Create a signer with the system clock and HMAC-SHA256.
    ///
    /// # Errors
    /// Returns [`UrlwardenError::InvalidSignerKey`] or
    /// [`UrlwardenError::InvalidUrlParameter`] when the configuration is
    /// invalid.
    pub fn new(config: SignerConfig) -> Result<Self, UrlwardenError> {
        Self::build(config, Arc::new(SystemClock), Box::new(HmacSha256))
    }

    /// Create a signer with a custom clock (tests, alternative time sources).
    pub fn with_clock(
        config: SignerConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, UrlwardenError> {
        Self::build(config, clock, Box::new(HmacSha256))
    }

    /// Create a signer with an alternative signature scheme.
    pub fn with_scheme(
        config: SignerConfig,
        scheme: Box<dyn SignatureScheme>,
    ) -> Result<Self, UrlwardenError> {
        Self::build(config, Arc::new(SystemClock), scheme)
    }

    /// Create a signer with both a custom clock and scheme.
    pub fn with_clock_and_scheme(
        config: SignerConfig,
        clock: Arc<dyn Clock>,
        scheme: Box<dyn SignatureScheme>,
    ) -> Result<Self, UrlwardenError> {
        Self::build(config, clock, scheme)
    }

    fn build(
        config: SignerConfig,
        clock: Arc<dyn Clock>,
        scheme: Box<dyn SignatureScheme>,
    ) -> Result<Self, UrlwardenError> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            scheme,
        })
    }

    /// Sign `url` so it stays valid through `expires_at` inclusive.
    ///
    /// Appends `<expire_param>=<unix seconds>` and
    /// `<signature_param>=<hex digest>` to the query string. Deterministic
    /// for identical inputs; the clock is not consulted here.
    ///
    /// # Errors
    /// - [`UrlwardenError::InvalidUrl`] - `url` is not an absolute URL
    /// - [`UrlwardenError::ReservedParameter`] - `url` already carries a
    ///   signer-managed parameter
    pub fn sign(
        &self,
        url: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<String, UrlwardenError> {
        let parsed = ParsedUrl::parse(url)?;
        let mut params = QueryParams::parse(parsed.query().unwrap_or(""));

        for reserved in [&self.config.signature_param, &self.config.expire_param] {
            if params.contains(reserved) {
                return Err(UrlwardenError::ReservedParameter(reserved.clone()));
            }
        }

        params.insert(&self.config.expire_param, &expires_at.timestamp().to_string());
        params.sort_keys();

        let signable = parsed.assemble(&params);
        let signature = self
            .scheme
            .compute(self.config.signer_key.as_bytes(), &signable);

        debug!(%signable, "computed url signature");

        // Appended after the sorted set; the signature never covers itself.
        params.insert(&self.config.signature_param, &signature);
        Ok(parsed.assemble(&params))
    }

    /// Verify a previously signed URL.
    ///
    /// Returns `Ok(false)` when either signer parameter is missing, the
    /// expiry is unparseable or in the past, or the signature does not
    /// match. `now == expiry` is still valid. Signatures are compared in
    /// constant time.
    ///
    /// # Errors
    /// Returns [`UrlwardenError::InvalidUrl`] only when `url` cannot be
    /// parsed at all; every other failure is a `false` result.
    pub fn verify(&self, url: &str) -> Result<bool, UrlwardenError> {
        let parsed = ParsedUrl::parse(url)?;
        let mut params = QueryParams::parse(parsed.query().unwrap_or(""));

        let Some(provided_signature) = params.remove(&self.config.signature_param) else {
            debug!("signature parameter missing");
            return Ok(false);
        };

        let Some(expires_raw) = params.get(&self.config.expire_param) else {
            debug!("expire parameter missing");
            return Ok(false);
        };
        let Ok(expires_at) = expires_raw.parse::<i64>() else {
            debug!("expire parameter is not an integer");
            return Ok(false);
        };

        let now = self.clock.now_utc().timestamp();
        if expires_at < now {
            debug!(expires_at, now, "url expired");
            return Ok(false);
        }

        // Remaining parameters keep their observed order.
        let signable = parsed.assemble(&params);
        let expected = self
            .scheme
            .compute(self.config.signer_key.as_bytes(), &signable);

        let matched = digests_match(&expected, &provided_signature);
        if !matched {
            debug!(%signable, "signature mismatch");
        }
        Ok(matched)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SignerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    fn frozen_signer(now: i64) -> UrlSigner {
        let clock = Arc::new(MockClock::at_unix(now));
        UrlSigner::with_clock(SignerConfig::new("valid"), clock).unwrap()
    }

    fn expiry(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn empty_key_rejected_at_construction() {
        let result = UrlSigner::new(SignerConfig::new(""));
        assert!(matches!(result, Err(UrlwardenError::InvalidSignerKey)));
    }

    #[test]
    fn identical_params_rejected_at_construction() {
        let mut config = SignerConfig::new("valid");
        config.expire_param = config.signature_param.clone();
        let result = UrlSigner::new(config);
        assert!(matches!(result, Err(UrlwardenError::InvalidUrlParameter(_))));
    }

    #[test]
    fn sign_appends_expiry_then_signature() {
        let signer = frozen_signer(1600000000);
        let signed = signer
            .sign("https://example.com/path?q=1#a", expiry(1600000000))
            .unwrap();

        assert!(signed.starts_with("https://example.com/path?q=1&url_expires_at=1600000000&signature="));
        assert!(signed.ends_with("#a"));
        let digest = signed
            .trim_end_matches("#a")
            .rsplit("signature=")
            .next()
            .unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn sign_is_deterministic() {
        let signer = frozen_signer(1600000000);
        let a = signer.sign("https://example.com/p?b=2&a=1", expiry(1600000000));
        let b = signer.sign("https://example.com/p?a=1&b=2", expiry(1600000000));
        // Key sorting makes both orderings sign identically.
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn sign_rejects_reserved_signature_param() {
        let signer = frozen_signer(1600000000);
        let result = signer.sign("https://example.com/?signature=1", expiry(1600000000));
        assert!(matches!(result, Err(UrlwardenError::ReservedParameter(p)) if p == "signature"));
    }

    #[test]
    fn sign_rejects_reserved_expire_param() {
        let signer = frozen_signer(1600000000);
        let result = signer.sign("https://example.com/?url_expires_at=1", expiry(1600000000));
        assert!(
            matches!(result, Err(UrlwardenError::ReservedParameter(p)) if p == "url_expires_at")
        );
    }

    #[test]
    fn sign_rejects_invalid_url() {
        let signer = frozen_signer(1600000000);
        let result = signer.sign("not a url", expiry(1600000000));
        assert!(matches!(result, Err(UrlwardenError::InvalidUrl(_))));
    }

    #[test]
    fn verify_rejects_invalid_url() {
        let signer = frozen_signer(1600000000);
        let result = signer.verify("not a url");
        assert!(matches!(result, Err(UrlwardenError::InvalidUrl(_))));
    }

    #[test]
    fn verify_round_trips_at_expiry_instant() {
        let signer = frozen_signer(1600000000);
        let signed = signer
            .sign("https://example.com/path?q=1#a", expiry(1600000000))
            .unwrap();
        // now == expiry is inclusive
        assert!(signer.verify(&signed).unwrap());
    }

    #[test]
    fn verify_fails_one_second_after_expiry() {
        let signing = frozen_signer(1600000000);
        let signed = signing
            .sign("https://example.com/path?q=1", expiry(1600000000))
            .unwrap();

        let verifying = frozen_signer(1600000001);
        assert!(!verifying.verify(&signed).unwrap());
    }

    #[test]
    fn verify_missing_parameters_is_false_not_error() {
        let signer = frozen_signer(1600000000);
        assert!(!signer.verify("https://example.com/?q=1").unwrap());
        assert!(!signer
            .verify("https://example.com/?url_expires_at=1600000000")
            .unwrap());
        assert!(!signer.verify("https://example.com/?signature=abc").unwrap());
    }

    #[test]
    fn verify_non_integer_expiry_is_false() {
        let signer = frozen_signer(1600000000);
        assert!(!signer
            .verify("https://example.com/?url_expires_at=soon&signature=abc")
            .unwrap());
    }

    #[test]
    fn config_accessor() {
        let signer = frozen_signer(1600000000);
        assert_eq!(signer.config().signature_param, "signature");
    }
}
