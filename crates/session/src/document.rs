use serde::{Deserialize, Serialize};

use crate::errors::SessionError;

/// On-disk shape of one field: `{ "type": "...", "input": ... }`.
///
/// `input` stays an untyped JSON value at this level; the codec validates its
/// shape against the declared `type` before any field is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub input: serde_json::Value,
}

/// Root of the persisted session document: the ordered `inputs` collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionDocument {
    pub inputs: Vec<FieldRecord>,
}

impl SessionDocument {
    /// Parse a UTF-8 JSON document.
    pub fn from_json(text: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render as pretty-printed JSON. The document is user-editable.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
