use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use crate::ranking::idf::IdfTable;
use crate::types::{DocumentId, Query, RankedFile};

/// Rank files against a query and keep the best `n`.
///
/// A file scores the sum of `idf(w)` over each distinct query word `w` it
/// contains. Repetition inside the file does not count: a word present once
/// and a word present fifty times contribute the same. Query words missing
/// from `idfs` contribute 0. Files without any match still take part with
/// score 0, so asking for more files than match returns non-matching files
/// too.
///
/// Ordering is score descending, then id ascending, so the result does not
/// depend on the iteration order of `files`. Ids are expected to be unique.
pub fn top_files<'a, I, V>(query: &Query, files: I, idfs: &IdfTable, n: NonZeroUsize) -> Vec<RankedFile>
where
    I: IntoIterator<Item = (&'a DocumentId, &'a V)>,
    V: AsRef<[String]> + ?Sized + 'a,
{
    let mut ranked: Vec<RankedFile> = files
        .into_iter()
        .map(|(id, tokens)| score_file(query, id, tokens.as_ref(), idfs))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    debug_assert!(ranked
        .windows(2)
        .all(|w| w[0].score > w[1].score || (w[0].score == w[1].score && w[0].id <= w[1].id)));

    ranked.truncate(n.get());
    ranked
}

fn score_file(query: &Query, id: &DocumentId, tokens: &[String], idfs: &IdfTable) -> RankedFile {
    let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();

    let matched_terms: Vec<String> = query
        .terms
        .iter()
        .filter(|term| distinct.contains(term.as_str()))
        .cloned()
        .collect();

    let score = matched_terms
        .iter()
        .filter_map(|term| idfs.get(term))
        .fold(0.0, |acc, idf| acc + idf);

    RankedFile {
        id: id.clone(),
        score,
        matched_terms,
    }
}
