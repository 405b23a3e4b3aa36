use std::fs;
use std::path::{Path, PathBuf};

use composer::{CompositionList, Field, FieldKind};

use crate::codec::{decode, encode};
use crate::document::SessionDocument;
use crate::errors::SessionError;

/// Session state context: the current composition is loaded from here once
/// at startup and written back once at shutdown.
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the persisted composition.
    ///
    /// A missing document yields the default arrangement. A document that
    /// cannot be read or decoded also yields the default arrangement; the
    /// failure is logged as a warning and never propagates past this
    /// boundary.
    pub fn load(&self) -> CompositionList {
        if !self.file_path.exists() {
            tracing::info!(
                "no session document at {:?}, starting from the default arrangement",
                self.file_path
            );
            return default_arrangement();
        }

        match self.try_load() {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(
                    "discarding unreadable session document {:?} ({err}), starting from the default arrangement",
                    self.file_path
                );
                default_arrangement()
            }
        }
    }

    fn try_load(&self) -> Result<CompositionList, SessionError> {
        let text = fs::read_to_string(&self.file_path)?;
        let doc = SessionDocument::from_json(&text)?;
        decode(&doc)
    }

    /// Encode and write the composition, replacing any existing document.
    /// The write goes through a sibling temp file and a rename.
    pub fn save(&self, list: &CompositionList) -> Result<(), SessionError> {
        if let Some(dir) = self.file_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let text = encode(list).to_json()?;
        let tmp = self.file_path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.file_path)?;
        Ok(())
    }
}

/// The arrangement used when no session document exists: two empty word
/// fields followed by one digits field.
pub fn default_arrangement() -> CompositionList {
    [
        Field::new(FieldKind::Words),
        Field::new(FieldKind::Words),
        Field::new(FieldKind::Digits),
    ]
    .into_iter()
    .collect()
}
