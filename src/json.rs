//! JSON support for `Value`, `List` and `Dict` (behind the `json` feature).
//!
//! Values map onto JSON untagged: `None` ↔ `null`, bools, integers (`i64`), floats, strings, arrays ↔ lists and
//! objects ↔ dicts. Integers that do not fit `i64` decode as floats.
//!
//! ## Notes
//! - Decoding creates a fresh handle for every nested container; sharing between keys is not preserved.
//! - Serializing a nested container that is mutably borrowed at the time fails with a serde error.
//! - Serializing a container that contains its own handle fails with a serde error.
//! - `NaN` and infinities serialize as `null` (serde_json behavior).

use serde::{Deserialize, Serialize};

/// Types that can be serialized to a JSON string.
///
/// Implemented for every `serde::Serialize` type.
pub trait ToJson: Serialize {
    /// Serialize to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Types that can be deserialized from a JSON string.
///
/// Implemented for every `serde::Deserialize` type.
pub trait FromJson: for<'de> Deserialize<'de> {
    /// Deserialize from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON for `Self`.
    fn from_json(json: &str) -> Result<Self, serde_json::Error>
    where
        Self: Sized,
    {
        serde_json::from_str(json)
    }
}

impl<T: Serialize> ToJson for T {}
impl<T: for<'de> Deserialize<'de>> FromJson for T {}
