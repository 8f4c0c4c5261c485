// Arabic-script boundary: letter tables plus the glottal-stop marker rules.
//
// The Arabic script writes a marker letter (U+0626) before a word-initial
// vowel and between two adjacent vowels. The Latin and Cyrillic scripts have
// no such letter, so it is synthesized on the way into the Arabic script and
// removed on the way out.
//
// Known limitation: loanwords such as "cuñxua" are written without a marker
// between the final two vowels in the Arabic script. The insertion rule does
// not special-case them and produces "جۇڭخۇئا".

use regex::Regex;

use ugscript_core::ConversionOptions;
use ugscript_core::character::{
    APOSTROPHE, GLOTTAL_STOP, is_consonant, is_letter, is_vowel, letter_class, vowel_class,
};

use crate::substitution::{TableError, TokenTable};

/// Conversions between Common Turkic and the Arabic script.
#[derive(Debug, Clone)]
pub struct ArabicBoundary {
    /// CTS letters to Arabic letters.
    outbound: TokenTable,
    /// Arabic letters to CTS letters.
    inbound: TokenTable,
    /// An apostrophe between two letters (or markers).
    separating_apostrophe: Regex,
    /// A marker at the start of a word.
    word_initial_marker: Regex,
    /// A marker right after a vowel.
    marker_after_vowel: Regex,
}

impl ArabicBoundary {
    /// Build the boundary from a CTS -> Arabic letter table.
    pub fn new(outbound: TokenTable) -> Result<Self, TableError> {
        let inbound = outbound.reversed();
        let letters = format!("[{}{GLOTTAL_STOP}]", letter_class());
        Ok(Self {
            outbound,
            inbound,
            separating_apostrophe: Regex::new(&format!("({letters}){APOSTROPHE}({letters})"))?,
            word_initial_marker: Regex::new(&format!(r"(\s|^){GLOTTAL_STOP}(\w+)"))?,
            marker_after_vowel: Regex::new(&format!("([{}]){GLOTTAL_STOP}", vowel_class()))?,
        })
    }

    /// Common Turkic -> Arabic script.
    pub fn to_arabic(&self, text: &str, options: ConversionOptions) -> String {
        let marked = insert_glottal_stops(text, options);
        if options.apostrophe {
            let collapsed = self.separating_apostrophe.replace_all(&marked, "${1}${2}");
            self.outbound.apply(&collapsed)
        } else {
            let converted = self.outbound.apply(&marked);
            converted.replace(&format!("{APOSTROPHE}{GLOTTAL_STOP}"), "")
        }
    }

    /// Arabic script -> Common Turkic.
    pub fn from_arabic(&self, text: &str, options: ConversionOptions) -> String {
        let converted = self.inbound.apply(text);
        self.remove_glottal_stops(&converted, options)
    }

    /// Drop or rewrite the markers left in CTS text by the inbound table.
    ///
    /// 1. A marker that starts a word is dropped.
    /// 2. Without the apostrophe regime, a marker after a vowel is dropped.
    /// 3. Any marker still left becomes an apostrophe.
    pub fn remove_glottal_stops(&self, text: &str, options: ConversionOptions) -> String {
        let mut text = self.word_initial_marker.replace_all(text, "${1}${2}").into_owned();
        if !options.apostrophe {
            text = self.marker_after_vowel.replace_all(&text, "${1}").into_owned();
        }
        text.replace(GLOTTAL_STOP, &APOSTROPHE.to_string())
    }
}

/// Put a marker before every vowel that needs one.
///
/// The preceding character is read from the input text, not from the output
/// being built, so an inserted marker never changes the decision for the
/// next vowel. A vowel at the start of the text always qualifies.
///
/// - Non-apostrophe regime: the vowel qualifies unless a consonant precedes it.
/// - Apostrophe regime: the vowel qualifies unless any letter precedes it.
pub fn insert_glottal_stops(text: &str, options: ConversionOptions) -> String {
    let blocks: fn(char) -> bool = if options.apostrophe { is_letter } else { is_consonant };
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if is_vowel(c) && !prev.is_some_and(blocks) {
            out.push(GLOTTAL_STOP);
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{ARABIC_LETTERS, CTS_LETTERS};

    const PLAIN: ConversionOptions = ConversionOptions::new(false);
    const APOS: ConversionOptions = ConversionOptions::new(true);

    fn boundary() -> ArabicBoundary {
        ArabicBoundary::new(TokenTable::new(CTS_LETTERS, ARABIC_LETTERS).unwrap()).unwrap()
    }

    fn markers(s: &str) -> usize {
        s.chars().filter(|&c| c == GLOTTAL_STOP).count()
    }

    // -- insertion --

    #[test]
    fn insert_at_word_start() {
        assert_eq!(insert_glottal_stops("at", PLAIN), "\u{0626}at");
        assert_eq!(insert_glottal_stops("at", APOS), "\u{0626}at");
    }

    #[test]
    fn insert_between_vowels_without_apostrophe() {
        assert_eq!(insert_glottal_stops("ail", PLAIN), "\u{0626}a\u{0626}il");
    }

    #[test]
    fn no_insert_between_vowels_with_apostrophe() {
        assert_eq!(insert_glottal_stops("ail", APOS), "\u{0626}ail");
    }

    #[test]
    fn insert_after_explicit_apostrophe() {
        assert_eq!(insert_glottal_stops("a'i", APOS), "\u{0626}a'\u{0626}i");
        assert_eq!(insert_glottal_stops("a'i", PLAIN), "\u{0626}a'\u{0626}i");
    }

    #[test]
    fn no_insert_after_consonant() {
        assert_eq!(insert_glottal_stops("bala", PLAIN), "bala");
        assert_eq!(insert_glottal_stops("bala", APOS), "bala");
    }

    #[test]
    fn insert_after_whitespace() {
        assert_eq!(insert_glottal_stops("men ismim", PLAIN), "men \u{0626}ismim");
    }

    #[test]
    fn empty_text() {
        assert_eq!(insert_glottal_stops("", PLAIN), "");
    }

    // -- to_arabic --

    #[test]
    fn to_arabic_word_initial_vowel() {
        assert_eq!(boundary().to_arabic("at", PLAIN), "ئات");
    }

    #[test]
    fn to_arabic_vowel_pair() {
        let out = boundary().to_arabic("ail", PLAIN);
        assert_eq!(out, "ئائىل");
        assert_eq!(markers(&out), 2);
        // The second marker sits between the two vowel letters.
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(chars[2], GLOTTAL_STOP);
    }

    #[test]
    fn to_arabic_apostrophe_regime_collapses_apostrophe() {
        assert_eq!(boundary().to_arabic("ma'arip", APOS), "مائارىپ");
        assert_eq!(boundary().to_arabic("maarip", APOS), "ماارىپ");
    }

    #[test]
    fn to_arabic_plain_regime_drops_apostrophe_marker_pair() {
        assert_eq!(boundary().to_arabic("sün'iy", PLAIN), "سۈنىي");
    }

    #[test]
    fn to_arabic_loanword_is_not_special_cased() {
        assert_eq!(boundary().to_arabic("cuñxua", PLAIN), "جۇڭخۇئا");
    }

    // -- from_arabic --

    #[test]
    fn from_arabic_drops_word_initial_marker() {
        assert_eq!(boundary().from_arabic("ئات", PLAIN), "at");
        assert_eq!(boundary().from_arabic("ئالما، ئانار؟", PLAIN), "alma, anar?");
    }

    #[test]
    fn from_arabic_word_initial_non_ascii_vowel() {
        assert_eq!(boundary().from_arabic("ئېلىم", PLAIN), "élim");
    }

    #[test]
    fn from_arabic_plain_regime_drops_marker_after_vowel() {
        assert_eq!(boundary().from_arabic("ئائىل", PLAIN), "ail");
        assert_eq!(boundary().from_arabic("مائارىپ", PLAIN), "maarip");
    }

    #[test]
    fn from_arabic_apostrophe_regime_keeps_marker_as_apostrophe() {
        assert_eq!(boundary().from_arabic("مائارىپ", APOS), "ma'arip");
    }

    #[test]
    fn from_arabic_marker_after_consonant_becomes_apostrophe() {
        assert_eq!(boundary().from_arabic("سۈنئىي", PLAIN), "sün'iy");
        assert_eq!(boundary().from_arabic("سۈنئىي", APOS), "sün'iy");
    }

    #[test]
    fn vowel_pair_round_trip() {
        let b = boundary();
        assert_eq!(b.from_arabic(&b.to_arabic("ail", PLAIN), PLAIN), "ail");
        assert_eq!(b.from_arabic(&b.to_arabic("ma'arip", APOS), APOS), "ma'arip");
    }
}
