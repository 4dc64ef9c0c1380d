//! Keyed signature schemes.
//!
//! A scheme turns `(key, message)` into a hex digest. The signer holds a
//! scheme as a trait object, so alternative algorithms plug in without
//! touching the signing pipeline.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

/// A keyed-hash strategy producing a lowercase hex digest.
pub trait SignatureScheme: Send + Sync {
    /// Compute the digest of `message` under `key`.
    fn compute(&self, key: &[u8], message: &str) -> String;
}

/// HMAC-SHA256, the default scheme (256-bit digest, 64 hex chars).
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256;

impl SignatureScheme for HmacSha256 {
    fn compute(&self, key: &[u8], message: &str) -> String {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(key).expect("HMAC can accept keys of any length");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// HMAC-SHA512 (512-bit digest, 128 hex chars).
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha512;

impl SignatureScheme for HmacSha512 {
    fn compute(&self, key: &[u8], message: &str) -> String {
        let mut mac =
            Hmac::<Sha512>::new_from_slice(key).expect("HMAC can accept keys of any length");
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}
