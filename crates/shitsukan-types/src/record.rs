//! Texture configuration records and their wire decoding.
//!
//! The material service answers with either a JSON object or a JSON string
//! whose contents are the object (some deployments double-encode). Both are
//! accepted; anything else is a [`DecodeError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::parameter::ParameterSchema;

/// Error decoding a configuration record from a response body.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Body is not JSON at all.
    #[error("response body is not JSON: {0}")]
    Json(#[source] serde_json::Error),
    /// Body is a JSON string whose contents are not JSON.
    #[error("string-encoded record does not decode: {0}")]
    EncodedPayload(#[source] serde_json::Error),
    /// Body is JSON but lacks required fields or has the wrong shape.
    #[error("malformed configuration record: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// A fetched texture configuration. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecord {
    /// Shader/material name. Older services spell the key `sharderName`.
    #[serde(alias = "sharderName")]
    pub shader_name: String,

    /// Human-readable name of the main texture.
    #[serde(default)]
    pub main_texture_name: String,

    /// Ordered parameter schemas.
    pub parameters: Vec<ParameterSchema>,
}

impl ConfigurationRecord {
    /// Decode a raw response body.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(body).map_err(DecodeError::Json)?;
        Self::from_value(value)
    }

    /// Decode an already-parsed payload, unwrapping one level of string
    /// encoding if present.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let value = match value {
            Value::String(encoded) => {
                serde_json::from_str::<Value>(&encoded).map_err(DecodeError::EncodedPayload)?
            }
            other => other,
        };
        serde_json::from_value(value).map_err(DecodeError::Malformed)
    }

    /// Schema ids in declaration order.
    pub fn parameter_ids(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.id.as_str())
    }

    pub fn schema(&self, id: &str) -> Option<&ParameterSchema> {
        self.parameters.iter().find(|p| p.id == id)
    }
}
