// Common Turkic character classes and the Arabic-script glottal-stop marker.

// ---------------------------------------------------------------------------
// Marker characters
// ---------------------------------------------------------------------------

/// ARABIC LETTER YEH WITH HAMZA ABOVE (U+0626).
///
/// The Arabic script writes it before a word-initial vowel and between two
/// adjacent vowels. The other orthographies have no letter for it. It is left
/// untouched by the letter tables, so on the Common Turkic side it doubles as
/// the placeholder for "a marker stood here".
pub const GLOTTAL_STOP: char = '\u{0626}';

/// Apostrophe used by the Latin orthographies to separate vowels.
pub const APOSTROPHE: char = '\'';

// ---------------------------------------------------------------------------
// Common Turkic phonological classes (lowercase only)
// ---------------------------------------------------------------------------

/// Common Turkic vowels: a e é i o u ö ü
const CTS_VOWELS: &[char] = &['a', 'e', '\u{00E9}', 'i', 'o', 'u', '\u{00F6}', '\u{00FC}'];

/// Common Turkic consonants: b p t c ç x d r z j s ş f ñ l m h v y q k g n ğ
const CTS_CONSONANTS: &[char] = &[
    'b', 'p', 't', 'c', '\u{00E7}', 'x', 'd', 'r', 'z', 'j', 's', '\u{015F}', 'f', '\u{00F1}', 'l',
    'm', 'h', 'v', 'y', 'q', 'k', 'g', 'n', '\u{011F}',
];

/// Check whether a character is a lowercase Common Turkic vowel.
pub fn is_vowel(c: char) -> bool {
    CTS_VOWELS.contains(&c)
}

/// Check whether a character is a lowercase Common Turkic consonant.
///
/// This is the class that blocks marker insertion in the non-apostrophe
/// regime: a vowel right after one of these letters gets no marker.
pub fn is_consonant(c: char) -> bool {
    CTS_CONSONANTS.contains(&c)
}

/// Check whether a character is a lowercase Common Turkic letter.
///
/// Vowels count too. This is the class that blocks marker insertion in the
/// apostrophe regime, where only a non-letter (or nothing) before a vowel
/// calls for a marker.
pub fn is_letter(c: char) -> bool {
    is_vowel(c) || is_consonant(c)
}

/// Regex character-class body matching every lowercase Common Turkic letter.
pub fn letter_class() -> String {
    CTS_VOWELS.iter().chain(CTS_CONSONANTS).collect()
}

/// Regex character-class body matching every lowercase Common Turkic vowel.
pub fn vowel_class() -> String {
    CTS_VOWELS.iter().collect()
}
