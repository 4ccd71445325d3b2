//! Body returned when a create-gallery request has no usable `name`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which schema rule failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaErrorPayload {
    pub paths: Vec<String>,
    pub validator: String,
    pub example: Option<Value>,
}

/// Schema failure envelope.
///
/// ```json
/// {"code":400,"payload":{"paths":["name"],"validator":"required","example":null},
///  "name":"INVALID_SCHEMA","description":"Bad JSON object: 'name' is a required property"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaErrorResponse {
    pub code: u16,
    pub payload: SchemaErrorPayload,
    pub name: String,
    pub description: String,
}

impl SchemaErrorResponse {
    /// The failure for a missing or unusable `name` property.
    pub fn name_required(description: impl Into<String>) -> Self {
        Self {
            code: 400,
            payload: SchemaErrorPayload {
                paths: vec!["name".to_string()],
                validator: "required".to_string(),
                example: None,
            },
            name: "INVALID_SCHEMA".to_string(),
            description: description.into(),
        }
    }
}
