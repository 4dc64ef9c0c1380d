//! URL canonicalization: parsing, query normalization, reassembly.

pub mod query;
pub mod url;

pub use self::query::QueryParams;
pub use self::url::ParsedUrl;
