//! Constant-time digest comparison.

use subtle::ConstantTimeEq;

/// Compare two hex digests in constant time.
///
/// Execution time does not depend on where the first differing byte
/// occurs, so a caller probing signatures learns nothing from response
/// timing. Length is not secret; digests of different lengths compare
/// unequal immediately.
pub fn digests_match(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}
