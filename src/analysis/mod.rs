pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;

pub use segmenter::{SentenceSegmenter, UnicodeSentences};
pub use stopwords::ENGLISH_STOPWORDS;
pub use tokenizer::{EnglishTokenizer, Tokenizer};
