//! Text encoding for list and map columns.
//!
//! Composite fields live in plain TEXT columns as JSON so the same schema works
//! on SQLite and Postgres. An empty or missing blob decodes to the empty value.

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// Serialize a composite field to the text stored in its column.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, ModelError> {
    Ok(serde_json::to_string(value)?)
}

/// Inverse of [`encode`]. `None`, `""` and whitespace-only blobs yield `T::default()`.
pub fn decode<T: DeserializeOwned + Default>(blob: Option<&str>) -> Result<T, ModelError> {
    match blob.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}
