//! Streaming whitespace tokenizer.
//!
//! Second stage of the pipeline: takes cleaned text from the normalizer and
//! emits each space-separated word as a slice of the input, in order.
//!
//! Only the ASCII space (0x20) separates words, since the normalizer has
//! already dropped every other whitespace character. Runs of spaces and
//! leading/trailing spaces produce no empty tokens.
//!
//! ## Usage
//!
//! ```rust
//! use lexifeat_core::analyzer::Tokenizer;
//!
//! let mut seen = Vec::new();
//! Tokenizer::new().tokenize("hello  world", |word| seen.push(word));
//! assert_eq!(seen, ["hello", "world"]);
//! ```

use memchr::memchr_iter;

/// Streaming tokenizer that splits normalized text on spaces.
///
/// Tokens are not copied; they are `&str` slices into the input.
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input and emits every non-empty word.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str),
    {
        let bytes = normalized.as_bytes();
        let mut start = 0usize;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // Splitting on an ASCII byte keeps both halves on char boundaries.
                emit(&normalized[start..i]);
            }
            start = i + 1;
        }

        if start < bytes.len() {
            emit(&normalized[start..]);
        }
    }
}
