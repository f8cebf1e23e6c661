//! Phonological and orthographic feature extraction.
//!
//! Turns a sentence into a fixed 22-slot numeric vector (vowel density,
//! consonant clustering, diacritics, word-final sound class) for a
//! downstream language classifier.
//!
//! ```text
//! text ─► TextNormalizer ─► Tokenizer ─► merge_digraphs ─► extract_word ─► aggregate
//! ```
//!
//! ```
//! let v = lexifeat_core::normalize_and_extract("¡Hola, señor!").unwrap();
//! assert_eq!(v[lexifeat_types::Feature::ContainsEnye], 0.5);
//! ```

pub mod analyzer;
mod charclass;
pub mod features;
pub mod pipeline;

pub use lexifeat_types::{Feature, FeatureError, FeatureVector, FEATURE_COUNT};
pub use pipeline::{
    convert, normalize_and_extract, Conversion, ExtractorConfig, ExtractorStats, FeatureExtractor,
};
