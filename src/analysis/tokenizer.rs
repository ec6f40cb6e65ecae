use std::collections::BTreeSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::stopwords::ENGLISH_STOPWORDS;

/// Maps raw text to an ordered sequence of normalized word tokens.
///
/// Implementations must be deterministic: the rankers assume the same text
/// always yields the same tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercases, splits on Unicode word boundaries and apostrophes, keeps
/// purely alphabetic words and drops stopwords.
///
/// Splitting on apostrophes turns "python's" into "python" + "s" and
/// "don't" into "don" + "t"; clitic pieces are in the stopword list.
#[derive(Debug, Clone)]
pub struct EnglishTokenizer {
    stopwords: BTreeSet<String>,
}

impl EnglishTokenizer {
    /// Tokenizer with the built-in English stopword list.
    pub fn new() -> Self {
        Self::with_stopwords(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Tokenizer with a caller-supplied stopword list. Entries are lowercased.
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Default for EnglishTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .unicode_words()
            .flat_map(|word| word.split(is_apostrophe))
            .filter(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
            .filter(|word| !self.is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}
