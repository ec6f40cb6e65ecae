use std::collections::BTreeSet;

use crate::analysis::Tokenizer;

/// A normalized query: the raw text as typed plus its deduplicated terms.
///
/// Terms come from the same tokenizer as the documents, so stopwords and
/// punctuation never reach the rankers. An empty term set is valid and
/// scores every candidate 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub terms: BTreeSet<String>,
}

impl Query {
    pub fn parse<T: Tokenizer + ?Sized>(raw: impl Into<String>, tokenizer: &T) -> Self {
        let raw = raw.into();
        let terms = tokenizer.tokenize(&raw).into_iter().collect();

        Self { raw, terms }
    }

    /// Build a query from already-normalized terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        let raw = terms.iter().cloned().collect::<Vec<_>>().join(" ");

        Self { raw, terms }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.terms.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
