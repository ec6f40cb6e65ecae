use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// One file of the corpus. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub source: String,
    pub content: String,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// This is the ONLY way to construct a Document.
    /// It validates the content and computes the version from it.
    pub fn ingest(id: DocumentId, source: String, raw_content: Vec<u8>) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;

        let version = DocumentVersion::from_content(content.as_bytes());

        Ok(Document {
            id,
            version,
            source,
            content,
        })
    }

    /// Lines of the content, the passages sentence extraction works on.
    pub fn passages(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}
