use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroUsize;

use crate::analysis::{SentenceSegmenter, Tokenizer};
use crate::document::Document;
use crate::ranking::idf::IdfTable;
use crate::types::{Query, RankedSentence};

/// A sentence and its (never empty) token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<String>,
}

/// Sentences keyed by their text, in extraction order.
///
/// Inserting a text that is already present replaces its tokens but keeps
/// its original position. Sentences that tokenize to nothing are refused,
/// so every member has at least one token.
#[derive(Debug, Clone, Default)]
pub struct SentenceSet {
    sentences: Vec<Sentence>,
    positions: HashMap<String, usize>,
}

impl SentenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the sentence was refused (no tokens) or was
    /// already present.
    pub fn insert(&mut self, text: impl Into<String>, tokens: Vec<String>) -> bool {
        if tokens.is_empty() {
            return false;
        }

        let text = text.into();
        match self.positions.get(&text) {
            Some(&pos) => {
                self.sentences[pos].tokens = tokens;
                false
            }
            None => {
                self.positions.insert(text.clone(), self.sentences.len());
                self.sentences.push(Sentence { text, tokens });
                true
            }
        }
    }

    pub fn get(&self, text: &str) -> Option<&Sentence> {
        self.positions.get(text).map(|&pos| &self.sentences[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }

    pub fn token_sequences(&self) -> impl Iterator<Item = &[String]> {
        self.sentences.iter().map(|s| s.tokens.as_slice())
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for SentenceSet {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut set = SentenceSet::new();
        for (text, tokens) in iter {
            set.insert(text, tokens);
        }
        set
    }
}

/// Split documents into tokenized sentences.
///
/// Documents are walked in the order given, each line by line, each line
/// sentence by sentence. That walk defines the extraction order used as the
/// last sentence tie-break.
pub fn extract_sentences<'a, D, T, G>(documents: D, tokenizer: &T, segmenter: &G) -> SentenceSet
where
    D: IntoIterator<Item = &'a Document>,
    T: Tokenizer + ?Sized,
    G: SentenceSegmenter + ?Sized,
{
    let mut set = SentenceSet::new();
    for doc in documents {
        for passage in doc.passages() {
            for sentence in segmenter.segment(passage) {
                set.insert(sentence, tokenizer.tokenize(sentence));
            }
        }
    }
    set
}

struct SentenceScore {
    position: usize,
    score: f64,
    matches: usize,
    total: usize,
}

impl SentenceScore {
    // Exact comparison of matches/total as rationals.
    fn cmp_density(&self, other: &Self) -> Ordering {
        (self.matches * other.total).cmp(&(other.matches * self.total))
    }
}

/// Rank sentences against a query and keep the best `n`.
///
/// Primary key: the sum of `idf(w)` over every token of the sentence that is
/// a query word, so a query word appearing twice counts twice. Secondary key,
/// consulted only on equal primary keys: query-term density, the share of the
/// sentence's tokens that are query words. Remaining ties keep extraction
/// order. `idfs` is expected to be computed over exactly `sentences`.
pub fn top_sentences(query: &Query, sentences: &SentenceSet, idfs: &IdfTable, n: NonZeroUsize) -> Vec<RankedSentence> {
    let mut scores: Vec<SentenceScore> = sentences
        .iter()
        .enumerate()
        .map(|(position, sentence)| score_sentence(query, position, &sentence.tokens, idfs))
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.cmp_density(a))
            .then_with(|| a.position.cmp(&b.position))
    });

    scores
        .into_iter()
        .take(n.get())
        .map(|s| RankedSentence {
            text: sentences.sentences[s.position].text.clone(),
            score: s.score,
            density: s.matches as f64 / s.total as f64,
            query_term_matches: s.matches,
            total_tokens: s.total,
        })
        .collect()
}

fn score_sentence(query: &Query, position: usize, tokens: &[String], idfs: &IdfTable) -> SentenceScore {
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for token in tokens.iter().filter(|t| query.contains(t)) {
        *occurrences.entry(token.as_str()).or_insert(0) += 1;
    }

    // Summed in term order so equal token multisets give identical scores.
    let score = occurrences
        .iter()
        .filter_map(|(term, &count)| idfs.get(term).map(|idf| idf * count as f64))
        .fold(0.0, |acc, v| acc + v);

    SentenceScore {
        position,
        score,
        matches: occurrences.values().sum(),
        total: tokens.len(),
    }
}
