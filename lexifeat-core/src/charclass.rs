//! Character class tables.
//!
//! Every class is a compile-time `match` over single code points, so
//! membership is exact: no case folding, no decomposition. `ǎ` written as
//! `a` + U+030C is *not* a creak vowel.

#[inline(always)]
pub const fn is_base_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Caron-marked vowels.
#[inline(always)]
pub const fn is_creak_vowel(c: char) -> bool {
    matches!(c, 'ǒ' | 'ǎ' | 'ǔ' | 'ě' | 'ǐ')
}

/// Grave-marked vowels.
#[inline(always)]
pub const fn is_falling_vowel(c: char) -> bool {
    matches!(c, 'à' | 'ì' | 'è' | 'ò' | 'ù')
}

/// Acute-marked vowels.
#[inline(always)]
pub const fn is_accented_vowel(c: char) -> bool {
    matches!(c, 'ó' | 'é' | 'í' | 'ú' | 'á')
}

/// Macron-marked vowels.
#[inline(always)]
pub const fn is_long_vowel(c: char) -> bool {
    matches!(c, 'ī' | 'ā' | 'ū' | 'ē' | 'ō')
}

#[inline(always)]
pub const fn is_umlauted_vowel(c: char) -> bool {
    matches!(c, 'ö' | 'ü')
}

#[inline(always)]
pub const fn is_dotless_i(c: char) -> bool {
    c == 'ı'
}

/// Union of every vowel subclass.
#[inline(always)]
pub const fn is_vowel(c: char) -> bool {
    is_base_vowel(c)
        || is_tone_vowel(c)
        || is_umlauted_vowel(c)
        || is_dotless_i(c)
}

/// Creak, falling, accented and long vowels. Excludes base vowels,
/// umlauts and dotless-i.
#[inline(always)]
pub const fn is_tone_vowel(c: char) -> bool {
    is_creak_vowel(c) || is_falling_vowel(c) || is_accented_vowel(c) || is_long_vowel(c)
}

pub const VELAR_NASAL: char = 'ŋ';

#[inline(always)]
pub const fn is_nasal(c: char) -> bool {
    matches!(c, 'n' | VELAR_NASAL)
}

#[inline(always)]
pub const fn is_lateral(c: char) -> bool {
    c == 'l'
}

/// `q` plus the two half-ring modifier letters used for hamza and ayin.
#[inline(always)]
pub const fn is_uvular(c: char) -> bool {
    matches!(c, 'q' | '\u{02BE}' | '\u{02BF}')
}

pub const THORN: char = 'þ';

pub const ENYE: char = 'ñ';

#[inline(always)]
pub const fn is_cedilla(c: char) -> bool {
    matches!(c, 'ş' | 'ç' | 'ğ')
}
