use std::collections::{BTreeMap, BTreeSet};

/// Inverse document frequency of every word seen in a document set.
///
/// `idf(w) = ln(D / df(w))` where `D` is the number of documents the table
/// was computed over and `df(w)` the number of those documents containing
/// `w` at least once. Words absent from every document have no entry; use
/// [`IdfTable::get`] and treat `None` as contributing nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdfTable {
    values: BTreeMap<String, f64>,
    document_count: usize,
}

impl IdfTable {
    pub fn get(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.values.contains_key(word)
    }

    /// Number of documents the table was computed over.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(w, v)| (w.as_str(), *v))
    }
}

/// Compute IDF values over a set of token sequences, one per document.
///
/// Document frequency counts each document once per word no matter how
/// often the word repeats in it. With a single document every value is 0.
pub fn compute_idfs<I, D>(documents: I) -> IdfTable
where
    I: IntoIterator<Item = D>,
    D: AsRef<[String]>,
{
    let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
    let mut document_count = 0;

    for tokens in documents {
        document_count += 1;
        let distinct: BTreeSet<&String> = tokens.as_ref().iter().collect();
        for word in distinct {
            match document_frequency.get_mut(word) {
                Some(df) => *df += 1,
                None => {
                    document_frequency.insert(word.clone(), 1);
                }
            }
        }
    }

    let total = document_count as f64;
    let values = document_frequency
        .into_iter()
        .map(|(word, df)| (word, (total / df as f64).ln()))
        .collect();

    IdfTable {
        values,
        document_count,
    }
}
