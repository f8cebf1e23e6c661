//! Consonant-cluster scan.
//!
//! A single left-to-right fold over a word with state `{run, interior}`:
//!
//! - `run` counts consecutive non-vowels and is checked when a vowel closes
//!   the run (2 → pair, 3+ → triple). Runs at the end of a word never close.
//! - `interior` counts consonants treated as cluster material. A lone
//!   consonant between two vowels (V-C-V) or at the start before the first
//!   vowel (C-V) is discarded when the vowel arrives, as is a lone word-final
//!   consonant after a vowel.
//!
//! The discard rule fires whenever the char two positions back is a vowel
//! and anything is left in `interior`, even if the discarded consonant came
//! from an earlier run. Downstream models depend on these exact counts.

use crate::charclass::is_vowel;

/// Result of scanning one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClusterSummary {
    /// Consonants retained as interior cluster material.
    pub interior: usize,
    /// A run of exactly two consonants was closed by a vowel.
    pub has_pair: bool,
    /// A run of three or more consonants was closed by a vowel.
    pub has_triple: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    run: usize,
    summary: ClusterSummary,
}

/// Scans `word` for consonant clusters.
pub fn scan_clusters(word: &[char]) -> ClusterSummary {
    let Some(last) = word.len().checked_sub(1) else {
        return ClusterSummary::default();
    };

    word.iter()
        .enumerate()
        .fold(ScanState::default(), |mut state, (i, &c)| {
            if is_vowel(c) {
                let onset = i == 1 || (i > 1 && is_vowel(word[i - 2]));
                if onset && state.summary.interior > 0 {
                    state.summary.interior -= 1;
                    state.run = 0;
                }
                match state.run {
                    2 => state.summary.has_pair = true,
                    r if r > 2 => state.summary.has_triple = true,
                    _ => {}
                }
                state.run = 0;
            } else {
                state.run += 1;
                state.summary.interior += 1;
                if i == last && i > 0 && is_vowel(word[i - 1]) {
                    state.summary.interior -= 1;
                }
            }
            state
        })
        .summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(word: &str) -> ClusterSummary {
        let chars: Vec<char> = word.chars().collect();
        scan_clusters(&chars)
    }

    #[test]
    fn empty_word() {
        assert_eq!(scan(""), ClusterSummary::default());
    }

    #[test]
    fn single_chars() {
        assert_eq!(scan("a"), ClusterSummary::default());
        // a lone consonant is its own word-final run, nothing precedes it
        assert_eq!(scan("k").interior, 1);
    }

    #[test]
    fn two_consonant_cluster() {
        let s = scan("akka");
        assert!(s.has_pair);
        assert!(!s.has_triple);
        assert_eq!(s.interior, 2);
    }

    #[test]
    fn three_consonant_cluster() {
        let s = scan("akkta");
        assert!(!s.has_pair);
        assert!(s.has_triple);
        assert_eq!(s.interior, 3);
    }

    #[test]
    fn intervocalic_consonant_discarded() {
        let s = scan("aka");
        assert_eq!(s.interior, 0);
        assert!(!s.has_pair && !s.has_triple);
    }

    #[test]
    fn leading_single_onset_discarded() {
        // "ka": the vowel at index 1 discards k
        assert_eq!(scan("ka").interior, 0);
        // no discard in "kra": the char two back from 'a' is not a vowel
        let s = scan("kra");
        assert_eq!(s.interior, 2);
        assert!(s.has_pair);
    }

    #[test]
    fn word_final_consonant_after_vowel_discarded() {
        assert_eq!(scan("ak").interior, 0);
        assert_eq!(scan("akt").interior, 2);
    }

    #[test]
    fn trailing_run_never_sets_flags() {
        let s = scan("ankst");
        assert!(!s.has_pair && !s.has_triple);
        assert_eq!(s.interior, 4);
    }

    #[test]
    fn discard_reaches_back_into_earlier_run() {
        // t k a i e: at 'e' the char two back is the vowel 'a', so the
        // most recent interior consonant (k) is dropped
        let s = scan("tkaie");
        assert!(s.has_pair);
        assert_eq!(s.interior, 1);
    }

    #[test]
    fn unknown_letters_are_consonants() {
        let s = scan("aжжa");
        assert!(s.has_pair);
        assert_eq!(s.interior, 2);
    }

    #[test]
    fn merged_symbols_are_consonants() {
        // "aš" after merging "ash"
        let s = scan("aš");
        assert_eq!(s.interior, 0);
        let s = scan("ašta");
        assert!(s.has_pair);
    }
}
