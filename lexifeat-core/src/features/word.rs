//! Per-word feature extraction.

use crate::charclass::{
    is_accented_vowel, is_cedilla, is_dotless_i, is_lateral, is_long_vowel, is_nasal,
    is_tone_vowel, is_umlauted_vowel, is_uvular, is_vowel, ENYE, THORN, VELAR_NASAL,
};
use crate::features::cluster::scan_clusters;
use lexifeat_types::{Feature, FeatureVector};

/// Computes the 22-slot feature vector for one normalized word.
///
/// A zero-length word yields the all-zero vector.
///
/// # Example
///
/// ```
/// use lexifeat_core::features::extract_word;
/// use lexifeat_types::Feature;
///
/// let v = extract_word(&['a', 'k', 'k', 'a']);
/// assert_eq!(v[Feature::VowelRatio], 0.5);
/// assert_eq!(v[Feature::HasTwoCluster], 1.0);
/// ```
pub fn extract_word(word: &[char]) -> FeatureVector {
    let mut v = FeatureVector::zeroed();
    let Some(&tail) = word.last() else {
        return v;
    };

    let mut vowels = 0usize;
    for &c in word {
        if is_vowel(c) {
            vowels += 1;
        }
        v.flag(Feature::ContainsUvular, is_uvular(c));
        v.flag(Feature::ContainsThorn, c == THORN);
        v.flag(Feature::ContainsLateral, is_lateral(c));
        v.flag(Feature::ContainsTone, is_tone_vowel(c));
        v.flag(Feature::ContainsUmlaut, is_umlauted_vowel(c));
        v.flag(Feature::ContainsDotlessI, is_dotless_i(c));
        v.flag(Feature::ContainsAccented, is_accented_vowel(c));
        v.flag(Feature::ContainsLongVowel, is_long_vowel(c));
        v.flag(Feature::ContainsEnye, c == ENYE);
        v.flag(Feature::ContainsCedilla, is_cedilla(c));
        v.flag(Feature::ContainsC, c == 'c');
    }

    let tail_vowel = is_vowel(tail);
    let tail_nasal = is_nasal(tail);
    v.flag(Feature::EndsConsonant, !tail_vowel && !tail_nasal);
    v.flag(Feature::EndsNasal, tail_nasal);
    v.flag(Feature::EndsVowel, tail_vowel);
    v.flag(Feature::EndsAOrO, matches!(tail, 'a' | 'o'));
    v.flag(Feature::EndsE, tail == 'e');
    v.flag(Feature::EndsK, tail == 'k');
    v.flag(Feature::EndsVelarNasal, tail == VELAR_NASAL);

    let clusters = scan_clusters(word);
    v.flag(Feature::HasTwoCluster, clusters.has_pair);
    v.flag(Feature::HasThreeCluster, clusters.has_triple);

    let len = word.len();
    let consonants = len - vowels;
    v[Feature::VowelRatio] = vowels as f64 / len as f64;
    v[Feature::ClusterRatio] = if consonants == 0 {
        0.0
    } else {
        clusters.interior as f64 / consonants as f64
    };

    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::merge_digraphs;
    use crate::analyzer::Word;
    use lexifeat_types::FEATURE_COUNT;

    fn extract(word: &str) -> FeatureVector {
        let chars: Vec<char> = word.chars().collect();
        extract_word(&chars)
    }

    fn on(v: &FeatureVector) -> Vec<Feature> {
        v.iter()
            .filter(|(f, value)| *value == 1.0 && f.index() > 1)
            .map(|(f, _)| f)
            .collect()
    }

    #[test]
    fn empty_word_is_all_zero() {
        assert_eq!(extract_word(&[]), FeatureVector::zeroed());
    }

    #[test]
    fn single_vowel_words() {
        for c in "aeiouǒàóīöüı".chars() {
            let v = extract_word(&[c]);
            assert_eq!(v[Feature::VowelRatio], 1.0, "{c}");
            assert_eq!(v[Feature::ClusterRatio], 0.0, "{c}");
            assert_eq!(v[Feature::EndsConsonant], 0.0, "{c}");
            assert_eq!(v[Feature::EndsNasal], 0.0, "{c}");
            assert_eq!(v[Feature::EndsVowel], 1.0, "{c}");
        }
    }

    #[test]
    fn single_consonant_word() {
        let v = extract("k");
        assert_eq!(v[Feature::VowelRatio], 0.0);
        assert_eq!(v[Feature::ClusterRatio], 1.0);
        assert_eq!(on(&v), vec![Feature::EndsConsonant, Feature::EndsK]);
    }

    #[test]
    fn akka() {
        let v = extract("akka");
        assert_eq!(v[Feature::VowelRatio], 0.5);
        assert_eq!(v[Feature::ClusterRatio], 1.0);
        assert_eq!(v[Feature::HasTwoCluster], 1.0);
        assert_eq!(v[Feature::HasThreeCluster], 0.0);
        assert_eq!(
            on(&v),
            vec![Feature::EndsVowel, Feature::EndsAOrO, Feature::HasTwoCluster]
        );
    }

    #[test]
    fn akkta() {
        let v = extract("akkta");
        assert_eq!(v[Feature::HasThreeCluster], 1.0);
        assert_eq!(v[Feature::HasTwoCluster], 0.0);
        assert_eq!(v[Feature::VowelRatio], 0.4);
        assert_eq!(v[Feature::ClusterRatio], 1.0);
    }

    #[test]
    fn ash_merged() {
        let mut word = Word::new();
        merge_digraphs("ash", &mut word);
        assert_eq!(word.len(), 2);

        let v = extract_word(&word);
        assert_eq!(v[Feature::VowelRatio], 0.5);
        assert_eq!(v[Feature::ClusterRatio], 0.0);
        assert_eq!(on(&v), vec![Feature::EndsConsonant]);
    }

    #[test]
    fn nasal_endings() {
        let v = extract("man");
        assert_eq!(on(&v), vec![Feature::EndsNasal]);

        let v = extract("þiŋ");
        assert_eq!(
            on(&v),
            vec![
                Feature::EndsNasal,
                Feature::EndsVelarNasal,
                Feature::ContainsThorn
            ]
        );
    }

    #[test]
    fn vowel_endings() {
        assert_eq!(extract("casa")[Feature::EndsAOrO], 1.0);
        assert_eq!(extract("tempo")[Feature::EndsAOrO], 1.0);
        assert_eq!(extract("nice")[Feature::EndsE], 1.0);
        assert_eq!(extract("nice")[Feature::EndsAOrO], 0.0);
        // accented finals are vowels but not a/o/e
        let v = extract("café");
        assert_eq!(v[Feature::EndsVowel], 1.0);
        assert_eq!(v[Feature::EndsE], 0.0);
        assert_eq!(v[Feature::ContainsAccented], 1.0);
        assert_eq!(v[Feature::ContainsTone], 1.0);
        assert_eq!(v[Feature::ContainsC], 1.0);
    }

    #[test]
    fn diacritic_classes() {
        assert_eq!(extract("mǎ")[Feature::ContainsTone], 1.0);
        assert_eq!(extract("mǎ")[Feature::ContainsAccented], 0.0);
        assert_eq!(extract("tōkyō")[Feature::ContainsLongVowel], 1.0);
        assert_eq!(extract("tōkyō")[Feature::ContainsTone], 1.0);
        assert_eq!(extract("über")[Feature::ContainsUmlaut], 1.0);
        assert_eq!(extract("über")[Feature::ContainsTone], 0.0);
        assert_eq!(extract("kız")[Feature::ContainsDotlessI], 1.0);
        assert_eq!(extract("niño")[Feature::ContainsEnye], 1.0);
        assert_eq!(extract("şeker")[Feature::ContainsCedilla], 1.0);
        assert_eq!(extract("ʿarab")[Feature::ContainsUvular], 1.0);
        assert_eq!(extract("qatar")[Feature::ContainsUvular], 1.0);
        assert_eq!(extract("hello")[Feature::ContainsLateral], 1.0);
    }

    #[test]
    fn unrecognized_script_counts_as_consonants() {
        let v = extract("мир");
        assert_eq!(v[Feature::VowelRatio], 0.0);
        assert_eq!(v[Feature::EndsConsonant], 1.0);
        assert_eq!(v[Feature::ClusterRatio], 1.0);
    }

    #[test]
    fn ratios_stay_in_unit_interval() {
        for w in ["strengths", "aeiou", "tkaie", "aka", "ŋ", "queueing"] {
            let v = extract(w);
            for (f, value) in v.iter() {
                assert!((0.0..=1.0).contains(&value), "{w}: {f} = {value}");
            }
            assert_eq!(v.len(), FEATURE_COUNT);
        }
    }
}
