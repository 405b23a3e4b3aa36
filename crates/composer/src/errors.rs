use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("unknown field kind: {0:?}")]
    UnknownKind(String),

    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
