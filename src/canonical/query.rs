//! Ordered query-parameter container.
//!
//! Query strings are decoded into an order-preserving key/value list.
//! Order matters: sign-time canonicalization sorts keys before building
//! the signable string, while verification reuses whatever order the
//! incoming URL had. Keeping both behaviors on one container makes the
//! asymmetry explicit.

/// An ordered collection of query parameters.
///
/// Duplicate keys follow later-insert-wins semantics: the value is
/// overwritten in place and the key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw query string (`a=1&b=two`) preserving parameter order.
    ///
    /// Percent-escapes and `+` are decoded per form-encoding rules. A key
    /// without `=` decodes to an empty value, so `?a` and `?a=` are the
    /// same parameter set.
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            params.insert(&key, &value);
        }
        params
    }

    /// Insert a parameter. A duplicate key overwrites the existing value
    /// and keeps the key's original position.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a key, returning its value. The relative order of the
    /// remaining parameters is unchanged.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    /// Sort parameters by key, ascending and byte-wise.
    ///
    /// Invoked only when building the signable string, so that logically
    /// equal parameter sets produce the same signature input.
    pub fn sort_keys(&mut self) {
        self.pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    /// Whether the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Encode as a form-encoded query string (`a=1&b=two`, no leading `?`).
    ///
    /// Space encodes as `+`, reserved characters percent-encode, an empty
    /// value renders as `key=`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
