//! JSON stringify/parse wrappers over `serde_json`.

use log::trace;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize any value to a compact JSON string.
///
/// # Errors
/// Returns the `serde_json` error unchanged if the value cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let out = serde_json::to_string(value)?;
    trace!("serialized {} bytes of JSON", out.len());
    Ok(out)
}

/// Rebuild a typed value from JSON by its named fields.
///
/// # Errors
/// Returns the `serde_json` error unchanged on malformed JSON or a missing
/// or mistyped field.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    trace!("parsing {} bytes of JSON", json.len());
    serde_json::from_str(json)
}

/// A value that round-trips through JSON.
pub trait JsonObject: Serialize + DeserializeOwned {
    /// Serialize `self`.
    ///
    /// # Errors
    /// See [`to_json`].
    fn to_json(&self) -> Result<String, serde_json::Error> {
        to_json(self)
    }

    /// Parse an instance of `Self`.
    ///
    /// # Errors
    /// See [`from_json`].
    fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        from_json(json)
    }
}
