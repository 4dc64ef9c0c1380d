//! Cryptographic primitives for URL signing.

pub mod compare;
pub mod scheme;

pub use self::compare::digests_match;
pub use self::scheme::{HmacSha256, HmacSha512, SignatureScheme};
