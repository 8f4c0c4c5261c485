// Built-in letter data and the `ScriptTables` bundle.
//
// The Arabic and Cyrillic letter lists are index-aligned with the Common
// Turkic list and are read as sequential token tables in both directions.
// The Latin scripts differ from Common Turkic in only a handful of letters
// and use single-pass association maps.

use ugscript_core::{ConversionOptions, ScriptId};

use crate::rules::{ArabicBoundary, CyrillicBoundary};
use crate::substitution::{AssociationMap, TableError, TokenTable};

// ---------------------------------------------------------------------------
// Letter lists (index-aligned)
// ---------------------------------------------------------------------------

/// Common Turkic letters and punctuation.
///
/// "la" follows "l", so by the time it is looked at every "l" is already
/// gone. The entry is kept so the three lists stay aligned.
pub const CTS_LETTERS: &[&str] = &[
    "a",
    "e",
    "b",
    "p",
    "t",
    "c",
    "\u{00E7}", // ç
    "x",
    "d",
    "r",
    "z",
    "j",
    "s",
    "\u{015F}", // ş
    "f",
    "\u{00F1}", // ñ
    "l",
    "la",
    "m",
    "h",
    "o",
    "u",
    "\u{00F6}", // ö
    "\u{00FC}", // ü
    "v",
    "\u{00E9}", // é
    "i",
    "y",
    "q",
    "k",
    "g",
    "n",
    "\u{011F}", // ğ
    "?",
    ",",
    ";",
    "*",
];

/// Arabic-script letters, aligned with [`CTS_LETTERS`].
pub const ARABIC_LETTERS: &[&str] = &[
    "\u{0627}", // ا
    "\u{06D5}", // ە
    "\u{0628}", // ب
    "\u{067E}", // پ
    "\u{062A}", // ت
    "\u{062C}", // ج
    "\u{0686}", // چ
    "\u{062E}", // خ
    "\u{062F}", // د
    "\u{0631}", // ر
    "\u{0632}", // ز
    "\u{0698}", // ژ
    "\u{0633}", // س
    "\u{0634}", // ش
    "\u{0641}", // ف
    "\u{06AD}", // ڭ
    "\u{0644}", // ل
    "\u{0644}\u{0627}", // لا
    "\u{0645}", // م
    "\u{06BE}", // ھ
    "\u{0648}", // و
    "\u{06C7}", // ۇ
    "\u{06C6}", // ۆ
    "\u{06C8}", // ۈ
    "\u{06CB}", // ۋ
    "\u{06D0}", // ې
    "\u{0649}", // ى
    "\u{064A}", // ي
    "\u{0642}", // ق
    "\u{0643}", // ك
    "\u{06AF}", // گ
    "\u{0646}", // ن
    "\u{063A}", // غ
    "\u{061F}", // ؟
    "\u{060C}", // ،
    "\u{061B}", // ؛
    "\u{066D}", // ٭
];

/// Cyrillic letters, aligned with [`CTS_LETTERS`].
pub const CYRILLIC_LETTERS: &[&str] = &[
    "\u{0430}", // а
    "\u{04D9}", // ә
    "\u{0431}", // б
    "\u{043F}", // п
    "\u{0442}", // т
    "\u{0497}", // җ
    "\u{0447}", // ч
    "\u{0445}", // х
    "\u{0434}", // д
    "\u{0440}", // р
    "\u{0437}", // з
    "\u{0436}", // ж
    "\u{0441}", // с
    "\u{0448}", // ш
    "\u{0444}", // ф
    "\u{04A3}", // ң
    "\u{043B}", // л
    "\u{043B}\u{0430}", // ла
    "\u{043C}", // м
    "\u{04BB}", // һ
    "\u{043E}", // о
    "\u{0443}", // у
    "\u{04E9}", // ө
    "\u{04AF}", // ү
    "\u{0432}", // в
    "\u{0435}", // е
    "\u{0438}", // и
    "\u{0439}", // й
    "\u{049B}", // қ
    "\u{043A}", // к
    "\u{0433}", // г
    "\u{043D}", // н
    "\u{0493}", // ғ
    "?",
    ",",
    ";",
    "*",
];

// ---------------------------------------------------------------------------
// Latin association maps (priority order)
// ---------------------------------------------------------------------------

/// Uyghur Latin (ULS) -> CTS. The digraph "ng" must come first.
pub const LATIN_COMPUTER_INBOUND: &[(&str, &str)] = &[
    ("ng", "\u{00F1}"), // ng -> ñ
    ("\u{0259}", "e"), // ə -> e
    ("\u{2C6C}", "j"), // ⱬ -> j
    ("j", "c"),
    ("\u{2C6A}", "q"), // ⱪ -> q
    ("q", "\u{00E7}"), // q -> ç
    ("\u{2C68}", "h"), // ⱨ -> h
    ("h", "x"),
    ("x", "\u{015F}"), // x -> ş
    ("\u{00F8}", "\u{00F6}"), // ø -> ö
    ("w", "v"),
    ("e", "\u{00E9}"), // e -> é
    ("\u{01A3}", "\u{011F}"), // ƣ -> ğ
];

/// CTS -> Uyghur Latin (ULS).
pub const LATIN_COMPUTER_OUTBOUND: &[(&str, &str)] = &[
    ("\u{00F1}", "ng"), // ñ -> ng
    ("e", "\u{0259}"), // e -> ə
    ("j", "\u{2C6C}"), // j -> ⱬ
    ("c", "j"),
    ("q", "\u{2C6A}"), // q -> ⱪ
    ("\u{00E7}", "q"), // ç -> q
    ("h", "\u{2C68}"), // h -> ⱨ
    ("x", "h"),
    ("\u{015F}", "x"), // ş -> x
    ("\u{00F6}", "\u{00F8}"), // ö -> ø
    ("v", "w"),
    ("\u{00E9}", "e"), // é -> e
    ("\u{011F}", "\u{01A3}"), // ğ -> ƣ
];

/// Uyghur Yengi (UYS) -> CTS. Spells the velar nasal "n'g" to keep it apart from n + g.
pub const LATIN_NEW_INBOUND: &[(&str, &str)] = &[
    ("n'g", "\u{00F1}"), // n'g -> ñ
    ("\u{0259}", "e"), // ə -> e
    ("\u{2C6C}", "j"), // ⱬ -> j
    ("j", "c"),
    ("\u{2C6A}", "q"), // ⱪ -> q
    ("q", "\u{00E7}"), // q -> ç
    ("\u{2C68}", "h"), // ⱨ -> h
    ("h", "x"),
    ("x", "\u{015F}"), // x -> ş
    ("\u{00F8}", "\u{00F6}"), // ø -> ö
    ("w", "v"),
    ("e", "\u{00E9}"), // e -> é
    ("\u{01A3}", "\u{011F}"), // ƣ -> ğ
];

/// CTS -> Uyghur Yengi (UYS).
pub const LATIN_NEW_OUTBOUND: &[(&str, &str)] = &[
    ("\u{00F1}", "n'g"), // ñ -> n'g
    ("e", "\u{0259}"), // e -> ə
    ("j", "\u{2C6C}"), // j -> ⱬ
    ("c", "j"),
    ("q", "\u{2C6A}"), // q -> ⱪ
    ("\u{00E7}", "q"), // ç -> q
    ("h", "\u{2C68}"), // h -> ⱨ
    ("x", "h"),
    ("\u{015F}", "x"), // ş -> x
    ("\u{00F6}", "\u{00F8}"), // ö -> ø
    ("v", "w"),
    ("\u{00E9}", "e"), // é -> e
    ("\u{011F}", "\u{01A3}"), // ğ -> ƣ
];

/// CTS -> Uzbek Latin. Every other CTS letter is written the same way.
pub const UZBEK_OUTBOUND: &[(&str, &str)] = &[
    ("\u{00F1}", "ng"), // ñ -> ng
];

// ---------------------------------------------------------------------------
// ScriptTables
// ---------------------------------------------------------------------------

/// Inbound and outbound maps for one Latin orthography.
#[derive(Debug, Clone)]
pub struct LatinBoundary {
    pub inbound: AssociationMap,
    pub outbound: AssociationMap,
}

impl LatinBoundary {
    fn new(inbound: &[(&str, &str)], outbound: &[(&str, &str)]) -> Result<Self, TableError> {
        Ok(Self {
            inbound: AssociationMap::new(inbound)?,
            outbound: AssociationMap::new(outbound)?,
        })
    }
}

/// Every table and rule set the engine needs, built once and read-only.
///
/// A `Converter` holds these behind an `Arc`; several converters (or
/// threads) can share one bundle.
#[derive(Debug, Clone)]
pub struct ScriptTables {
    arabic: ArabicBoundary,
    cyrillic: CyrillicBoundary,
    latin_computer: LatinBoundary,
    latin_new: LatinBoundary,
    uzbek: AssociationMap,
}

impl ScriptTables {
    /// Build the built-in tables.
    ///
    /// # Panics
    ///
    /// Only if the built-in data above is malformed, which the tests rule out.
    pub fn new() -> Self {
        Self::try_new().expect("built-in script tables are well formed")
    }

    /// Build the built-in tables, reporting malformed data as an error.
    pub fn try_new() -> Result<Self, TableError> {
        Ok(Self {
            arabic: ArabicBoundary::new(TokenTable::new(CTS_LETTERS, ARABIC_LETTERS)?)?,
            cyrillic: CyrillicBoundary::new(TokenTable::new(CTS_LETTERS, CYRILLIC_LETTERS)?)?,
            latin_computer: LatinBoundary::new(LATIN_COMPUTER_INBOUND, LATIN_COMPUTER_OUTBOUND)?,
            latin_new: LatinBoundary::new(LATIN_NEW_INBOUND, LATIN_NEW_OUTBOUND)?,
            uzbek: AssociationMap::new(UZBEK_OUTBOUND)?,
        })
    }

    pub fn arabic(&self) -> &ArabicBoundary {
        &self.arabic
    }

    pub fn cyrillic(&self) -> &CyrillicBoundary {
        &self.cyrillic
    }

    /// The Latin -> CTS map for a Latin script, if it has one.
    pub fn latin_inbound(&self, script: ScriptId) -> Option<&AssociationMap> {
        match script {
            ScriptId::LatinComputer => Some(&self.latin_computer.inbound),
            ScriptId::LatinNew => Some(&self.latin_new.inbound),
            _ => None,
        }
    }

    /// The CTS -> Latin map for a Latin script (Uzbek included), if it has one.
    pub fn latin_outbound(&self, script: ScriptId) -> Option<&AssociationMap> {
        match script {
            ScriptId::LatinComputer => Some(&self.latin_computer.outbound),
            ScriptId::LatinNew => Some(&self.latin_new.outbound),
            ScriptId::Uzbek => Some(&self.uzbek),
            _ => None,
        }
    }

    /// Convert `text` from `script` into Common Turkic.
    ///
    /// Returns `None` for a script that cannot be read (Uzbek).
    pub fn to_canonical(
        &self,
        script: ScriptId,
        text: &str,
        options: ConversionOptions,
    ) -> Option<String> {
        match script {
            ScriptId::CommonTurkic => Some(text.to_string()),
            ScriptId::Arabic => Some(self.arabic.from_arabic(text, options)),
            ScriptId::Cyrillic => Some(self.cyrillic.from_cyrillic(text)),
            ScriptId::LatinComputer | ScriptId::LatinNew => {
                self.latin_inbound(script).map(|map| map.apply(text))
            }
            ScriptId::Uzbek => None,
        }
    }

    /// Convert Common Turkic `text` into `script`.
    pub fn from_canonical(&self, script: ScriptId, text: &str, options: ConversionOptions) -> String {
        match script {
            ScriptId::CommonTurkic => text.to_string(),
            ScriptId::Arabic => self.arabic.to_arabic(text, options),
            ScriptId::Cyrillic => self.cyrillic.to_cyrillic(text),
            ScriptId::LatinComputer | ScriptId::LatinNew | ScriptId::Uzbek => self
                .latin_outbound(script)
                .map_or_else(|| text.to_string(), |map| map.apply(text)),
        }
    }
}

impl Default for ScriptTables {
    fn default() -> Self {
        Self::new()
    }
}
