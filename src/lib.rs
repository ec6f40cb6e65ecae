//! Deterministic question answering over a plain-text corpus.
//!
//! `qa-core` ranks the files of a corpus against a query by IDF-weighted
//! term presence, then ranks the sentences of the best files by the IDF of
//! the query words they contain, breaking ties on query-term density. All
//! operations are deterministic: identical inputs always produce identical
//! outputs, in the same order.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod document;
pub mod ranking;
pub mod types;
