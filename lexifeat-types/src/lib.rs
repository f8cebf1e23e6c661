//! Core types for the lexifeat feature extractor.
//!
//! This crate holds the vocabulary shared between the extractor and the
//! collaborators that consume its output (training pipelines, CSV writers):
//!
//! - **[`Feature`]**: names each of the 22 slots of a feature vector
//! - **[`FeatureVector`]**: the fixed-width numeric record itself
//! - **[`FeatureError`]**: the failure modes of sentence-level extraction

#![warn(missing_docs)]

use core::fmt;
use core::ops::{Index, IndexMut};

/// Number of slots in every feature vector.
pub const FEATURE_COUNT: usize = 22;

/// A single slot of a [`FeatureVector`].
///
/// The discriminant is the slot index. Ratios live in slots 0 and 1,
/// everything else is a 0/1 flag (or the mean of flags, after aggregation).
///
/// `#[repr(u8)]` keeps the slot order stable; downstream models are trained
/// against this exact layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feature {
    /// Vowel count divided by word length.
    VowelRatio = 0,
    /// Interior cluster consonants divided by consonant count.
    ClusterRatio = 1,
    /// Last character is neither a vowel nor a nasal.
    EndsConsonant = 2,
    /// Last character is a nasal.
    EndsNasal = 3,
    /// Last character is a vowel.
    EndsVowel = 4,
    /// Last character is `a` or `o`.
    EndsAOrO = 5,
    /// Last character is `e`.
    EndsE = 6,
    /// Last character is `k`.
    EndsK = 7,
    /// Last character is the velar nasal `ŋ`.
    EndsVelarNasal = 8,
    /// Contains a uvular.
    ContainsUvular = 9,
    /// Contains thorn `þ`.
    ContainsThorn = 10,
    /// Contains a lateral.
    ContainsLateral = 11,
    /// Contains a tone-marked vowel (creak, falling, accented or long).
    ContainsTone = 12,
    /// Contains an umlauted vowel.
    ContainsUmlaut = 13,
    /// Contains dotless `ı`.
    ContainsDotlessI = 14,
    /// Contains an acute-accented vowel.
    ContainsAccented = 15,
    /// Contains a macron (long) vowel.
    ContainsLongVowel = 16,
    /// Has a run of exactly two consonants followed by a vowel.
    HasTwoCluster = 17,
    /// Has a run of three or more consonants followed by a vowel.
    HasThreeCluster = 18,
    /// Contains palatal `ñ`.
    ContainsEnye = 19,
    /// Contains a cedilla or breve letter (`ş ç ğ`).
    ContainsCedilla = 20,
    /// Contains `c`.
    ContainsC = 21,
}

impl Feature {
    /// Every feature, in slot order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::VowelRatio,
        Feature::ClusterRatio,
        Feature::EndsConsonant,
        Feature::EndsNasal,
        Feature::EndsVowel,
        Feature::EndsAOrO,
        Feature::EndsE,
        Feature::EndsK,
        Feature::EndsVelarNasal,
        Feature::ContainsUvular,
        Feature::ContainsThorn,
        Feature::ContainsLateral,
        Feature::ContainsTone,
        Feature::ContainsUmlaut,
        Feature::ContainsDotlessI,
        Feature::ContainsAccented,
        Feature::ContainsLongVowel,
        Feature::HasTwoCluster,
        Feature::HasThreeCluster,
        Feature::ContainsEnye,
        Feature::ContainsCedilla,
        Feature::ContainsC,
    ];

    /// Slot index of this feature.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case column name.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::VowelRatio => "vowel_ratio",
            Feature::ClusterRatio => "cluster_ratio",
            Feature::EndsConsonant => "ends_consonant",
            Feature::EndsNasal => "ends_nasal",
            Feature::EndsVowel => "ends_vowel",
            Feature::EndsAOrO => "ends_a_or_o",
            Feature::EndsE => "ends_e",
            Feature::EndsK => "ends_k",
            Feature::EndsVelarNasal => "ends_ng",
            Feature::ContainsUvular => "contains_uvulars",
            Feature::ContainsThorn => "contains_thorns",
            Feature::ContainsLateral => "contains_laterals",
            Feature::ContainsTone => "contains_tones",
            Feature::ContainsUmlaut => "contains_umlauts",
            Feature::ContainsDotlessI => "contains_dotless_i",
            Feature::ContainsAccented => "contains_accented_vowels",
            Feature::ContainsLongVowel => "contains_long_vowels",
            Feature::HasTwoCluster => "contains_clusters_two",
            Feature::HasThreeCluster => "contains_clusters_three",
            Feature::ContainsEnye => "contains_enye",
            Feature::ContainsCedilla => "contains_cedillas",
            Feature::ContainsC => "contains_c",
        }
    }

    /// Looks a feature up by slot index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < FEATURE_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-width feature record for one word or one sentence.
///
/// Always exactly [`FEATURE_COUNT`] slots. Consumers should treat it as an
/// opaque numeric row; use [`Feature`] to address individual slots.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl FeatureVector {
    /// A vector with every slot set to zero.
    #[inline(always)]
    pub const fn zeroed() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    /// Sets a flag slot to 1.0 when `on` is true. Never clears a slot.
    #[inline(always)]
    pub fn flag(&mut self, feature: Feature, on: bool) {
        if on {
            self.0[feature.index()] = 1.0;
        }
    }

    /// Element-wise `self += other`.
    #[inline]
    pub fn accumulate(&mut self, other: &FeatureVector) {
        for (acc, v) in self.0.iter_mut().zip(other.0.iter()) {
            *acc += *v;
        }
    }

    /// Divides every slot by `divisor`.
    #[inline]
    pub fn scale_down(&mut self, divisor: f64) {
        for slot in self.0.iter_mut() {
            *slot /= divisor;
        }
    }

    /// Slot values as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of slots (always [`FEATURE_COUNT`]).
    #[inline(always)]
    pub const fn len(&self) -> usize {
        FEATURE_COUNT
    }

    /// Always false; present for API symmetry with slices.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates `(feature, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

impl IndexMut<Feature> for FeatureVector {
    #[inline(always)]
    fn index_mut(&mut self, feature: Feature) -> &mut f64 {
        &mut self.0[feature.index()]
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<FeatureVector> for [f64; FEATURE_COUNT] {
    #[inline(always)]
    fn from(v: FeatureVector) -> Self {
        v.0
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(v: FeatureVector) -> Self {
        v.0.to_vec()
    }
}

/// Comma-separated slot values, the row format the training data uses.
impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Errors that can occur when extracting sentence-level features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    /// The sentence contained no words after normalization.
    #[error("input contains no words after normalization")]
    EmptyInput,
}
