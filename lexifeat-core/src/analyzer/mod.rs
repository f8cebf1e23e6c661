//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Drops non-letters, lowercases, splits into words
//! - **Tokenizer**: Splits cleaned text on spaces
//! - **Digraph**: Collapses consonant + `h`/`g` pairs into single symbols

pub mod digraph;
pub mod normalizer;
pub mod tokenizer;

pub use digraph::{merge_digraphs, Word};
pub use normalizer::{NormalizerConfig, TextNormalizer};
pub use tokenizer::Tokenizer;
