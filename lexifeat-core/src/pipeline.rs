//! End-to-end pipeline: text in, sentence vector out.
//!
//! [`normalize_and_extract`] is the one-shot entry point. [`FeatureExtractor`]
//! does the same work but keeps its buffers and a per-word vector cache
//! between calls, which pays off when featurizing a whole corpus.
//!
//! Threading:
//! - [`FeatureExtractor`] takes `&mut self` everywhere. Create one per thread.

use crate::analyzer::{NormalizerConfig, TextNormalizer, Word};
use crate::features::{aggregate, aggregate_with, extract_word};
use lexifeat_types::{FeatureError, FeatureVector};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Default upper bound on memoized words before the cache is reset.
pub const DEFAULT_MAX_CACHED_WORDS: usize = 1 << 16;

/// Normalizes a sentence and returns its averaged feature vector.
///
/// # Errors
///
/// Returns `FeatureError::EmptyInput` if the sentence has no words after
/// normalization (empty, blank, or only digits and punctuation).
///
/// # Example
///
/// ```
/// use lexifeat_core::normalize_and_extract;
/// use lexifeat_types::{FeatureError, FEATURE_COUNT};
///
/// let v = normalize_and_extract("This is just an example").unwrap();
/// assert_eq!(v.len(), FEATURE_COUNT);
///
/// assert_eq!(normalize_and_extract("42 !?"), Err(FeatureError::EmptyInput));
/// ```
pub fn normalize_and_extract(sentence: &str) -> Result<FeatureVector, FeatureError> {
    let words = TextNormalizer::default().words(sentence);
    aggregate(&words).inspect_err(|_| debug!("sentence normalized to zero words"))
}

/// Normalizes a sentence and returns both the words and the vector.
///
/// # Errors
///
/// Returns `FeatureError::EmptyInput` if the sentence has no words.
pub fn convert(sentence: &str) -> Result<Conversion, FeatureError> {
    let words = TextNormalizer::default().words(sentence);
    let vector = aggregate(&words)?;
    Ok(Conversion { words, vector })
}

/// A converted sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Normalized, digraph-merged words in input order.
    pub words: Vec<Word>,
    /// Element-wise mean of the per-word vectors.
    pub vector: FeatureVector,
}

impl Conversion {
    /// Words rendered back to strings.
    pub fn word_strings(&self) -> Vec<String> {
        self.words.iter().map(|w| w.iter().collect()).collect()
    }
}

/// Configuration for [`FeatureExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Normalizer settings.
    pub normalizer: NormalizerConfig,
    /// Cache per-word vectors across calls.
    pub memoize_words: bool,
    /// Cache size at which the cache is cleared.
    pub max_cached_words: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            normalizer: NormalizerConfig::default(),
            memoize_words: true,
            max_cached_words: DEFAULT_MAX_CACHED_WORDS,
        }
    }
}

impl ExtractorConfig {
    /// No memoization; every word is extracted afresh.
    pub fn uncached() -> Self {
        Self {
            memoize_words: false,
            ..Self::default()
        }
    }
}

/// A snapshot of extractor statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractorStats {
    /// Sentences successfully featurized.
    pub sentences: u64,
    /// Words featurized, cache hits included.
    pub words: u64,
    /// Words served from the cache.
    pub cache_hits: u64,
    /// Sentences rejected as empty.
    pub rejected: u64,
    /// Words currently cached.
    pub cached_words: usize,
}

/// Reusable feature extraction pipeline.
pub struct FeatureExtractor {
    normalizer: TextNormalizer,
    config: ExtractorConfig,
    cache: FxHashMap<Word, FeatureVector>,
    norm_buf: String,
    word_buf: Vec<Word>,
    sentences: u64,
    words: u64,
    cache_hits: u64,
    rejected: u64,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl FeatureExtractor {
    /// Creates an extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config.normalizer),
            config,
            cache: FxHashMap::default(),
            norm_buf: String::new(),
            word_buf: Vec::new(),
            sentences: 0,
            words: 0,
            cache_hits: 0,
            rejected: 0,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> ExtractorConfig {
        self.config
    }

    /// Featurizes one sentence.
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::EmptyInput` if the sentence has no words.
    pub fn featurize(&mut self, sentence: &str) -> Result<FeatureVector, FeatureError> {
        self.word_buf.clear();
        self.normalizer
            .words_into(sentence, &mut self.norm_buf, &mut self.word_buf);
        self.aggregate_buffered()
    }

    /// Featurizes one sentence and keeps the normalized words.
    ///
    /// # Errors
    ///
    /// Returns `FeatureError::EmptyInput` if the sentence has no words.
    pub fn convert(&mut self, sentence: &str) -> Result<Conversion, FeatureError> {
        let vector = self.featurize(sentence)?;
        Ok(Conversion {
            words: self.word_buf.clone(),
            vector,
        })
    }

    /// Featurizes many sentences.
    ///
    /// Returns one result per input, in input order; an empty sentence does
    /// not stop the batch.
    pub fn featurize_batch(
        &mut self,
        sentences: &[&str],
    ) -> Vec<Result<FeatureVector, FeatureError>> {
        let out: Vec<_> = sentences.iter().map(|s| self.featurize(s)).collect();
        debug!(
            sentences = sentences.len(),
            rejected = out.iter().filter(|r| r.is_err()).count(),
            "featurized batch"
        );
        out
    }

    /// Drops every cached word vector.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Returns extractor statistics.
    pub fn stats(&self) -> ExtractorStats {
        ExtractorStats {
            sentences: self.sentences,
            words: self.words,
            cache_hits: self.cache_hits,
            rejected: self.rejected,
            cached_words: self.cache.len(),
        }
    }

    fn aggregate_buffered(&mut self) -> Result<FeatureVector, FeatureError> {
        let Self {
            config,
            cache,
            word_buf,
            cache_hits,
            ..
        } = self;

        let result = if config.memoize_words {
            aggregate_with(word_buf.as_slice(), |word| {
                cached_extract(cache, cache_hits, config.max_cached_words, word)
            })
        } else {
            aggregate(word_buf.as_slice())
        };

        match result {
            Ok(_) => {
                self.sentences += 1;
                self.words += self.word_buf.len() as u64;
            }
            Err(_) => {
                self.rejected += 1;
                debug!("sentence normalized to zero words");
            }
        }
        result
    }
}

fn cached_extract(
    cache: &mut FxHashMap<Word, FeatureVector>,
    hits: &mut u64,
    limit: usize,
    word: &Word,
) -> FeatureVector {
    if let Some(v) = cache.get(word.as_slice()) {
        *hits += 1;
        return *v;
    }

    let v = extract_word(word);
    if limit == 0 {
        return v;
    }
    if cache.len() >= limit {
        debug!(cached = cache.len(), "word cache full, resetting");
        cache.clear();
    }
    cache.insert(word.clone(), v);
    v
}
