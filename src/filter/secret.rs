//! Secret decoding: replace base64 `data` values with their plaintext

use crate::utils::DecodeError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// Metadata fields kelp reads from a Secret. Everything else rides along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretMetadata {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Typed view of a `kind: Secret` document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretDocument {
    #[serde(rename = "apiVersion", default)]
    pub api_version: String,

    #[serde(default)]
    pub kind: String,

    #[serde(default)]
    pub metadata: SecretMetadata,

    /// base64 on input, plaintext after [`SecretDocument::decode_data`]
    #[serde(default)]
    pub data: IndexMap<String, String>,

    #[serde(flatten)]
    pub extra: Mapping,
}

impl SecretDocument {
    /// Parse a single YAML document
    pub fn parse(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Decode every `data` value in place
    ///
    /// Keys that fail to decode keep their original value and are returned;
    /// the remaining keys are still decoded.
    pub fn decode_data(&mut self) -> Vec<DecodeError> {
        let mut failures = Vec::new();

        for (key, value) in self.data.iter_mut() {
            match decode_value(key, value) {
                Ok(plain) => *value = plain,
                Err(e) => failures.push(e),
            }
        }

        failures
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Decode one base64 value (standard alphabet, padded) into UTF-8 text
pub fn decode_value(key: &str, encoded: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|source| DecodeError::Base64 {
            key: key.to_string(),
            source,
        })?;

    String::from_utf8(bytes).map_err(|_| DecodeError::NotUtf8 {
        key: key.to_string(),
    })
}
