//! Word-level tokenization behind a trait seam.
//!
//! The default tokenizer lowercases and splits on Unicode word boundaries
//! (UAX #29), which handles mixed Korean/Latin/digit complaint text without
//! language-specific rules. A morphological analyzer can be plugged in by
//! implementing [`Tokenizer`]; index and query must use the same one.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into the terms the lexical index is keyed by.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Unicode word-boundary tokenizer, lowercasing for case-insensitive match.
///
/// No stop-word removal and no length filter: Korean single-syllable words
/// (수도, 물, 불) carry meaning, and particles stay attached to their word
/// the same way in queries and documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_lowercase()).collect()
    }
}
