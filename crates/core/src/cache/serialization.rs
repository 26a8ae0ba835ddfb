//! Pure functions for the persistent cache envelope.
//!
//! Each persisted document is stored as `{ "data": <document>, "timestamp":
//! <epoch millis> }`, where `timestamp` is the moment it was fetched.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during envelope serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// A persisted document and the time it was fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Fetch time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    data: &'a T,
    timestamp: i64,
}

/// Serializes a document and its fetch time to JSON bytes.
pub fn encode_envelope<T: Serialize>(data: &T, timestamp: i64) -> Result<Vec<u8>> {
    serde_json::to_vec(&EnvelopeRef { data, timestamp })
        .map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes into an envelope.
pub fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<Envelope<T>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
