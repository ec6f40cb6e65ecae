use unicode_segmentation::UnicodeSegmentation;

/// Splits a block of text into sentences.
pub trait SentenceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// UAX #29 sentence boundaries, trimmed, blank pieces dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentences;

impl SentenceSegmenter for UnicodeSentences {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
