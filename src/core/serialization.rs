//! JSON helpers shared by catalogs, preference sets, market parameters and reports.
//!
//! # Examples
//! ```rust
//! use greekfit::core::{from_json, to_json_pretty};
//! use greekfit::strategy::Catalog;
//!
//! let catalog = Catalog::standard();
//! let json = to_json_pretty(&catalog).expect("json serialization");
//! let decoded: Catalog = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, catalog);
//! ```

use serde::de::DeserializeOwned;

use crate::core::SelectorError;

/// Serialize a value to compact JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, SelectorError> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a value to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, SelectorError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, SelectorError> {
    Ok(serde_json::from_str(payload)?)
}

/// `#[serde(with = ...)]` adapter for prices that may be NaN or infinite.
///
/// JSON has no literal for non-finite numbers and `serde_json` writes them as
/// `null`, which then fails to decode. Finite values stay plain numbers; the
/// rest are written as the strings `"NaN"`, `"inf"` and `"-inf"`.
pub mod non_finite_f64 {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const NAN: &str = "NaN";
    pub const INFINITY: &str = "inf";
    pub const NEG_INFINITY: &str = "-inf";

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value.is_sign_positive() {
            serializer.serialize_str(INFINITY)
        } else {
            serializer.serialize_str(NEG_INFINITY)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Label(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Label(label) => match label.as_str() {
                NAN => Ok(f64::NAN),
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!(
                    "expected a number, \"{NAN}\", \"{INFINITY}\" or \"{NEG_INFINITY}\", got \"{other}\""
                ))),
            },
        }
    }
}
