use crate::analyzer::digraph::{merge_digraphs, Word};
use crate::analyzer::tokenizer::Tokenizer;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Maps each ASCII byte to its lowercase letter, to `b' '` for the space
/// character, and to 0 for everything that gets dropped.
#[rustfmt::skip]
const ASCII_KEEP_TABLE: [u8; 128] = [
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x20,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x00,0x00,0x00,0x00,0x00,
    0x00,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x00,0x00,0x00,0x00,0x00,
];

/// Whether a character survives the cleaning filter.
///
/// Letters are the five `L*` general categories. Combining marks (vowel
/// signs, niqqud, harakat) are `M*` and get dropped even though Unicode
/// calls some of them Alphabetic.
///
/// Only the ASCII space counts as a separator; tabs and newlines are dropped
/// like punctuation, so `"foo\tbar"` becomes the single word `"foobar"`.
#[inline(always)]
fn keep(c: char) -> bool {
    c == ' '
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When enabled, collapses `s c z t n g` followed by `h` or `g` into a
    /// single derived symbol. For example, "ship" becomes "šip".
    pub merge_digraphs: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            merge_digraphs: true,
        }
    }
}

/// Unicode text normalizer.
///
/// Performs the following operations:
/// - Drops every character that is neither a letter nor an ASCII space
/// - Converts all characters to lowercase (Unicode-aware, with final sigma)
/// - Splits the result into words on runs of spaces
/// - Optionally merges digraphs inside each word
///
/// # Performance
///
/// Pure-ASCII input is filtered and lowercased in one table-driven byte pass.
/// Anything else takes the `char` path.
///
/// # Examples
///
/// ```
/// use lexifeat_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("Hello, World 42!"), "hello world ");
///
/// let words = normalizer.words("Shh, the night");
/// assert_eq!(words.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Filters and lowercases text into an existing String buffer.
    ///
    /// Clears the buffer before writing. Spaces are kept verbatim (runs are
    /// not collapsed); the tokenizer skips empty fields.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        if input.is_ascii() {
            for &b in input.as_bytes() {
                let mapped = ASCII_KEEP_TABLE[b as usize];
                if mapped != 0 {
                    out.push(mapped as char);
                }
            }
            return;
        }

        out.extend(input.chars().filter(|&c| keep(c)));

        if !out.is_ascii() {
            // Whole-string lowercase so that a word-final sigma folds to ς.
            let lowered = out.to_lowercase();
            out.clear();
            out.push_str(&lowered);
        } else {
            out.make_ascii_lowercase();
        }
    }

    /// Filters and lowercases text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Runs the full normalization and appends the resulting words to `out`.
    ///
    /// `scratch` holds the cleaned text and is reused across calls.
    pub fn words_into(&self, input: &str, scratch: &mut String, out: &mut Vec<Word>) {
        self.normalize_into(input, scratch);

        let merge = self.config.merge_digraphs;
        Tokenizer::new().tokenize(scratch, |token| {
            let mut word = Word::new();
            if merge {
                merge_digraphs(token, &mut word);
            } else {
                word.extend(token.chars());
            }
            out.push(word);
        });
    }

    /// Runs the full normalization and returns the words.
    pub fn words(&self, input: &str) -> Vec<Word> {
        let mut scratch = String::with_capacity(input.len());
        let mut out = Vec::new();
        self.words_into(input, &mut scratch, &mut out);
        out
    }
}
