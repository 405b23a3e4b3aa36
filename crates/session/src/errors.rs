use composer::FieldKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized field type: {0:?}")]
    UnrecognizedFieldType(String),

    #[error("malformed {kind} record: expected {expected}, got {input}")]
    MalformedRecord {
        kind: FieldKind,
        expected: &'static str,
        input: serde_json::Value,
    },
}
