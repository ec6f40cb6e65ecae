// Read-only after construction: no update or removal methods.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::analysis::Tokenizer;
use crate::document::Document;
use crate::types::identifiers::DocumentId;

/// The full document set for one run, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: BTreeMap<DocumentId, Document>,
}

impl Corpus {
    /// Build a corpus from documents. A repeated id keeps the last document.
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (doc.id.clone(), doc))
            .collect();

        Self { documents }
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Token sequence of every document, keyed by id.
    pub fn tokenize<T: Tokenizer + ?Sized>(&self, tokenizer: &T) -> BTreeMap<DocumentId, Vec<String>> {
        self.documents
            .iter()
            .map(|(id, doc)| (id.clone(), tokenizer.tokenize(&doc.content)))
            .collect()
    }

    /// Content hash over the whole document set.
    ///
    /// `sha256` of `id:version` for each document in id order, so two corpora
    /// with the same files and contents share a fingerprint regardless of
    /// directory listing order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for doc in self.documents.values() {
            let line = format!("{}:{}\n", doc.id.as_str(), doc.version.as_str());
            hasher.update(line.as_bytes());
        }

        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}
