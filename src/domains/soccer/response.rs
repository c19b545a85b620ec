//! Uniform result shape of an upstream lookup.

use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// Result of a single upstream lookup.
///
/// A payload is passed through untouched. An error serializes as
/// `{"error": "<message>"}`, which is exactly what tool callers receive.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Body of an HTTP 200 response, parsed as JSON.
    Payload(Value),

    /// Non-200 status, transport failure, parse failure or rejected input.
    Error(String),
}

impl ApiResponse {
    /// Create an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Convert into the JSON value returned to tool callers.
    pub fn into_value(self) -> Value {
        match self {
            Self::Payload(value) => value,
            Self::Error(message) => json!({ "error": message }),
        }
    }
}

impl Serialize for ApiResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Payload(value) => value.serialize(serializer),
            Self::Error(message) => json!({ "error": message }).serialize(serializer),
        }
    }
}
