pub mod files;
pub mod idf;
pub mod sentences;

use tracing::debug;

use crate::analysis::{EnglishTokenizer, SentenceSegmenter, Tokenizer, UnicodeSentences};
use crate::config::RetrievalConfig;
use crate::corpus::Corpus;
use crate::types::{Answer, AnswerMetadata, Query};
pub use files::top_files;
pub use idf::{compute_idfs, IdfTable};
pub use sentences::{extract_sentences, top_sentences, Sentence, SentenceSet};

/// Runs the full pipeline: file IDF, file ranking, sentence extraction,
/// sentence IDF, sentence ranking.
pub struct Answerer<T, G> {
	tokenizer: T,
	segmenter: G,
	config: RetrievalConfig,
}

impl Answerer<EnglishTokenizer, UnicodeSentences> {
	pub fn from_config(config: RetrievalConfig) -> Self {
		Self {
			tokenizer: config.tokenizer(),
			segmenter: UnicodeSentences,
			config,
		}
	}
}

impl Default for Answerer<EnglishTokenizer, UnicodeSentences> {
	fn default() -> Self {
		Self::from_config(RetrievalConfig::v0())
	}
}

impl<T, G> Answerer<T, G>
where
	T: Tokenizer,
	G: SentenceSegmenter,
{
	pub fn new(tokenizer: T, segmenter: G, config: RetrievalConfig) -> Self {
		Self {
			tokenizer,
			segmenter,
			config,
		}
	}

	/// Tokenize free text into a query with this answerer's tokenizer.
	pub fn parse_query(&self, raw: &str) -> Query {
		Query::parse(raw, &self.tokenizer)
	}

	pub fn answer(&self, corpus: &Corpus, query: &Query) -> Answer {
		// 1. File phase: IDF over whole files
		let file_words = corpus.tokenize(&self.tokenizer);
		let file_idfs = compute_idfs(file_words.values());
		debug!(
			documents = file_words.len(),
			vocabulary = file_idfs.len(),
			"computed file idfs"
		);

		let files = top_files(query, &file_words, &file_idfs, self.config.file_matches);
		debug!(
			selected = files.len(),
			top = ?files.first().map(|f| f.id.as_str()),
			"ranked files"
		);

		// 2. Sentence phase: fresh IDF where each sentence is a document
		let selected_docs = files.iter().filter_map(|f| corpus.get(&f.id));
		let sentences = extract_sentences(selected_docs, &self.tokenizer, &self.segmenter);
		let sentence_idfs = compute_idfs(sentences.token_sequences());
		debug!(
			sentences = sentences.len(),
			vocabulary = sentence_idfs.len(),
			"computed sentence idfs"
		);

		let ranked = top_sentences(query, &sentences, &sentence_idfs, self.config.sentence_matches);
		debug!(selected = ranked.len(), "ranked sentences");

		let metadata = AnswerMetadata {
			query: query.raw.clone(),
			query_terms: query.terms.iter().cloned().collect(),
			corpus_fingerprint: corpus.fingerprint(),
			documents_considered: corpus.len(),
			sentences_considered: sentences.len(),
			file_matches: self.config.file_matches.get(),
			sentence_matches: self.config.sentence_matches.get(),
		};

		Answer {
			files,
			sentences: ranked,
			metadata,
		}
	}
}
