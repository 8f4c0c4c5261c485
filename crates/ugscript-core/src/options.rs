// Per-call conversion options.

use serde::{Deserialize, Serialize};

/// Options that select between the two glottal-stop regimes at the
/// Arabic-script boundary.
///
/// - `apostrophe = false`: the marker is synthesized before every vowel that
///   does not follow a consonant, and removed again after any vowel on the
///   way back.
/// - `apostrophe = true`: the marker is synthesized only where no letter
///   precedes the vowel, and explicit apostrophes in the Latin text are
///   what separate vowels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    pub apostrophe: bool,
}

impl ConversionOptions {
    pub const fn new(apostrophe: bool) -> Self {
        Self { apostrophe }
    }
}
