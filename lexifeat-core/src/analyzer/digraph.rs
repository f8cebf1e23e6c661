//! Digraph merging.
//!
//! Collapses a base consonant followed by `h` or `g` into one derived symbol
//! that stands for a single phoneme:
//!
//! | base | derived |
//! |------|---------|
//! | `s`  | `š`     |
//! | `c`  | `č`     |
//! | `z`  | `ž`     |
//! | `t`  | `þ`     |
//! | `n`  | `ŋ`     |
//! | `g`  | `ǧ`     |
//!
//! Only the immediately preceding source position is inspected. A position
//! consumed by a merge is empty, so it cannot feed the next one:
//! `"ngg"` becomes `"ŋg"`, never `"ŋǧ"`.

use smallvec::SmallVec;

/// Inline capacity of a [`Word`]; longer words spill to the heap.
pub const WORD_INLINE_CHARS: usize = 16;

/// A normalized word, one `char` per slot.
pub type Word = SmallVec<[char; WORD_INLINE_CHARS]>;

/// `(base, derived)` pairs.
pub const DIGRAPH_TABLE: [(char, char); 6] = [
    ('s', 'š'),
    ('c', 'č'),
    ('z', 'ž'),
    ('t', 'þ'),
    ('n', 'ŋ'),
    ('g', 'ǧ'),
];

/// Returns the derived symbol for a base consonant.
#[inline(always)]
pub const fn derived_symbol(base: char) -> Option<char> {
    let mut i = 0;
    while i < DIGRAPH_TABLE.len() {
        if DIGRAPH_TABLE[i].0 == base {
            return Some(DIGRAPH_TABLE[i].1);
        }
        i += 1;
    }
    None
}

#[inline(always)]
const fn is_trigger(c: char) -> bool {
    matches!(c, 'h' | 'g')
}

/// Merges digraphs in `token` and writes the result into `out`.
///
/// Clears `out` first.
pub fn merge_digraphs(token: &str, out: &mut Word) {
    out.clear();

    // false right after a merge: the previous source position is empty
    let mut prev_live = false;

    for c in token.chars() {
        if prev_live && is_trigger(c) {
            if let Some(last) = out.last_mut() {
                if let Some(derived) = derived_symbol(*last) {
                    *last = derived;
                    prev_live = false;
                    continue;
                }
            }
        }
        out.push(c);
        prev_live = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(token: &str) -> String {
        let mut out = Word::new();
        merge_digraphs(token, &mut out);
        out.iter().collect()
    }

    #[test]
    fn lookup_by_base() {
        assert_eq!(derived_symbol('s'), Some('š'));
        assert_eq!(derived_symbol('g'), Some('ǧ'));
        assert_eq!(derived_symbol('h'), None);
        assert_eq!(derived_symbol('š'), None);
    }

    #[test]
    fn every_base_with_both_triggers() {
        for (base, symbol) in DIGRAPH_TABLE {
            for trigger in ['h', 'g'] {
                let token: String = [base, trigger].iter().collect();
                assert_eq!(merge(&token), symbol.to_string(), "{token}");
            }
        }
    }

    #[test]
    fn ash_becomes_two_chars() {
        let mut out = Word::new();
        merge_digraphs("ash", &mut out);
        assert_eq!(out.as_slice(), &['a', 'š']);
    }

    #[test]
    fn non_base_before_trigger() {
        assert_eq!(merge("ah"), "ah");
        assert_eq!(merge("kg"), "kg");
        assert_eq!(merge("hh"), "hh");
    }

    #[test]
    fn leading_trigger_kept() {
        assert_eq!(merge("h"), "h");
        assert_eq!(merge("g"), "g");
        assert_eq!(merge("hat"), "hat");
    }

    #[test]
    fn merges_do_not_chain() {
        assert_eq!(merge("ngg"), "ŋg");
        assert_eq!(merge("ngh"), "ŋh");
        assert_eq!(merge("gggg"), "ǧǧ");
        assert_eq!(merge("ghg"), "ǧg");
    }

    #[test]
    fn multiple_merges_in_one_word() {
        assert_eq!(merge("shushing"), "šušiŋ");
        assert_eq!(merge("thatch"), "þatč");
    }

    #[test]
    fn clears_output() {
        let mut out = Word::new();
        merge_digraphs("longword", &mut out);
        merge_digraphs("sh", &mut out);
        assert_eq!(out.as_slice(), &['š']);
    }

    #[test]
    fn long_words_spill() {
        let token = "a".repeat(WORD_INLINE_CHARS * 2);
        let mut out = Word::new();
        merge_digraphs(&token, &mut out);
        assert_eq!(out.len(), WORD_INLINE_CHARS * 2);
        assert!(out.spilled());
    }
}
