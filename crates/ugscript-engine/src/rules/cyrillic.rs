// Cyrillic-script boundary: case folding, letter tables and glide digraphs.
//
// The Cyrillic letters я and ю each spell a glide plus a vowel. The letter
// tables have no entry for them, so they pass through the table untouched
// and are expanded afterwards (inbound), or are formed from the Latin
// sequences before the table runs (outbound). Swapping either order breaks
// the conversion: the table would split "ya" into й + а first.
//
// Case is not preserved: both directions lower-case their input.

use crate::substitution::{TableError, TokenTable};

/// Glide digraphs: Cyrillic letter -> CTS sequence.
const GLIDE_DIGRAPHS: &[&str] = &["я", "ю"];
const GLIDE_SEQUENCES: &[&str] = &["ya", "yu"];

/// Conversions between Common Turkic and the Cyrillic script.
#[derive(Debug, Clone)]
pub struct CyrillicBoundary {
    /// CTS letters to Cyrillic letters.
    outbound: TokenTable,
    /// Cyrillic letters to CTS letters.
    inbound: TokenTable,
    /// я/ю to their CTS sequences.
    expand_glides: TokenTable,
    /// CTS sequences to я/ю.
    contract_glides: TokenTable,
}

impl CyrillicBoundary {
    /// Build the boundary from a CTS -> Cyrillic letter table.
    pub fn new(outbound: TokenTable) -> Result<Self, TableError> {
        let expand_glides = TokenTable::new(GLIDE_DIGRAPHS, GLIDE_SEQUENCES)?;
        Ok(Self {
            inbound: outbound.reversed(),
            outbound,
            contract_glides: expand_glides.reversed(),
            expand_glides,
        })
    }

    /// Cyrillic script -> Common Turkic: lower-case, table, then glides.
    pub fn from_cyrillic(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let converted = self.inbound.apply(&lower);
        self.expand_glides.apply(&converted)
    }

    /// Common Turkic -> Cyrillic script: lower-case, glides, then table.
    pub fn to_cyrillic(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let contracted = self.contract_glides.apply(&lower);
        self.outbound.apply(&contracted)
    }
}
