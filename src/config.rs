use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::EnglishTokenizer;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// How many files survive the file ranking phase.
    pub file_matches: NonZeroUsize,
    /// How many sentences make up the answer.
    pub sentence_matches: NonZeroUsize,
    /// Replaces the built-in English stopword list when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<Vec<String>>,
}

impl RetrievalConfig {
    pub const DEFAULT_FILE_MATCHES: NonZeroUsize = match NonZeroUsize::new(7) {
        Some(n) => n,
        None => unreachable!(),
    };
    pub const DEFAULT_SENTENCE_MATCHES: NonZeroUsize = match NonZeroUsize::new(2) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn v0() -> Self {
        Self {
            file_matches: Self::DEFAULT_FILE_MATCHES,
            sentence_matches: Self::DEFAULT_SENTENCE_MATCHES,
            stopwords: None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The tokenizer this configuration describes.
    pub fn tokenizer(&self) -> EnglishTokenizer {
        match &self.stopwords {
            Some(words) => EnglishTokenizer::with_stopwords(words),
            None => EnglishTokenizer::new(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self::v0()
    }
}
