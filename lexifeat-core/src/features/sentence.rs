//! Sentence-level aggregation.

use crate::features::word::extract_word;
use lexifeat_types::{FeatureError, FeatureVector};
use tracing::trace;

/// Averages per-word vectors element-wise.
///
/// Every word counts equally regardless of its length. Words are summed in
/// order, so the result is deterministic for a given input.
///
/// # Errors
///
/// Returns `FeatureError::EmptyInput` if `words` is empty.
pub fn aggregate<W>(words: &[W]) -> Result<FeatureVector, FeatureError>
where
    W: AsRef<[char]>,
{
    aggregate_with(words, |word| extract_word(word.as_ref()))
}

/// Averages vectors produced by `extract` for each word.
///
/// Lets callers put a cache in front of [`extract_word`].
///
/// # Errors
///
/// Returns `FeatureError::EmptyInput` if `words` is empty.
pub fn aggregate_with<W, F>(words: &[W], mut extract: F) -> Result<FeatureVector, FeatureError>
where
    F: FnMut(&W) -> FeatureVector,
{
    if words.is_empty() {
        return Err(FeatureError::EmptyInput);
    }

    let mut total = FeatureVector::zeroed();
    for word in words {
        total.accumulate(&extract(word));
    }
    total.scale_down(words.len() as f64);

    trace!(words = words.len(), "aggregated sentence vector");
    Ok(total)
}
