use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentId;

/// A file chosen by the file ranker, with the evidence for its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFile {
    pub id: DocumentId,
    /// Sum of the IDF of each distinct query word present in the file.
    pub score: f64,
    /// Query words found in the file, in sorted order.
    pub matched_terms: Vec<String>,
}

/// A sentence chosen by the sentence ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    pub text: String,
    /// Sum of IDF over every occurrence of a query word in the sentence.
    pub score: f64,
    /// `query_term_matches / total_tokens`.
    pub density: f64,
    pub query_term_matches: usize,
    pub total_tokens: usize,
}

/// Metadata describing how an answer was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerMetadata {
    pub query: String,
    pub query_terms: Vec<String>,
    pub corpus_fingerprint: String,

    pub documents_considered: usize,
    pub sentences_considered: usize,

    pub file_matches: usize,
    pub sentence_matches: usize,
}

/// The final result of answering one query against one corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub files: Vec<RankedFile>,
    pub sentences: Vec<RankedSentence>,
    pub metadata: AnswerMetadata,
}

impl Answer {
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}
