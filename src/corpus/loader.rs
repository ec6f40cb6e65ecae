use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::corpus::Corpus;
use crate::document::{Document, DocumentError};
use crate::types::identifiers::{DocumentId, DocumentIdError};

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Corpus path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    #[error("Cannot name document {path}: {source}")]
    DocumentId {
        path: PathBuf,
        #[source]
        source: DocumentIdError,
    },
}

/// Load every regular file directly inside `dir` into a [`Corpus`].
///
/// Subdirectories are skipped. Any unreadable or non-UTF-8 file aborts the
/// whole load.
pub fn load_corpus(dir: &Path) -> Result<Corpus, CorpusError> {
    let meta = fs::metadata(dir).map_err(io_err(dir))?;
    if !meta.is_dir() {
        return Err(CorpusError::NotADirectory(dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();

        let is_dir = fs::metadata(&path).map_err(io_err(&path))?.is_dir();
        if is_dir {
            warn!(path = %path.display(), "skipping subdirectory in corpus");
            continue;
        }

        let id = DocumentId::from_path(dir, &path).map_err(|source| CorpusError::DocumentId {
            path: path.clone(),
            source,
        })?;
        let raw = fs::read(&path).map_err(io_err(&path))?;
        let doc = Document::ingest(id, path.display().to_string(), raw).map_err(|source| {
            CorpusError::Document {
                path: path.clone(),
                source,
            }
        })?;

        debug!(id = %doc.id, source = %doc.source, bytes = doc.content.len(), "loaded document");
        documents.push(doc);
    }

    let corpus = Corpus::new(documents);
    info!(
        dir = %dir.display(),
        documents = corpus.len(),
        fingerprint = %corpus.fingerprint(),
        "corpus loaded"
    );

    Ok(corpus)
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> CorpusError {
    let path = path.to_path_buf();
    move |source| CorpusError::Io { path, source }
}
