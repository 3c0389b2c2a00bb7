//! Common domain types, serialization helpers and the library-wide error type.

pub mod serialization;
pub mod types;

pub use serialization::{from_json, to_json, to_json_pretty};
pub use types::*;

/// Errors surfaced by the API.
///
/// Documented fallbacks (unknown strategy, unknown option label, degenerate
/// market inputs, all-`any` preferences) are ordinary return values and never
/// reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A loosely typed preference map is missing one of the five Greeks.
    MissingGreek(String),
    /// A label outside its domain.
    InvalidLabel { field: String, value: String },
    /// Catalog with unknown or duplicated strategies.
    InvalidCatalog(String),
    /// Evaluation settings that cannot produce a report.
    InvalidConfig(String),
    /// JSON encode/decode failure.
    Serialization(String),
}

impl std::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingGreek(greek) => write!(f, "missing preference for greek: {greek}"),
            Self::InvalidLabel { field, value } => write!(f, "invalid {field} label: {value:?}"),
            Self::InvalidCatalog(msg) => write!(f, "invalid catalog: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for SelectorError {}

impl From<serde_json::Error> for SelectorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
