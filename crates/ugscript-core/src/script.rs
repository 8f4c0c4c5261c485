// Script identifiers for the supported Uyghur orthographies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// One orthography the engine can read or write.
///
/// Identifiers are the short upper-case codes (`UAS`, `ULS`, ...). Parsing is
/// case-insensitive, so `"uas"` and `" Uas "` both name [`ScriptId::Arabic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScriptId {
    /// Arabic-derived script (UAS).
    Arabic,
    /// Latin "computer" script (ULS).
    LatinComputer,
    /// New Latin-derived script (UYS).
    LatinNew,
    /// Cyrillic script (UCS).
    Cyrillic,
    /// Common Turkic Latin script (CTS); every conversion routes through it.
    CommonTurkic,
    /// Latin variant of the neighboring Uzbek language. Target only.
    Uzbek,
}

impl ScriptId {
    /// All six identifiers, in a stable order.
    pub const ALL: [ScriptId; 6] = [
        ScriptId::Arabic,
        ScriptId::LatinComputer,
        ScriptId::LatinNew,
        ScriptId::Cyrillic,
        ScriptId::CommonTurkic,
        ScriptId::Uzbek,
    ];

    /// The short identifier code.
    pub const fn code(self) -> &'static str {
        match self {
            ScriptId::Arabic => "UAS",
            ScriptId::LatinComputer => "ULS",
            ScriptId::LatinNew => "UYS",
            ScriptId::Cyrillic => "UCS",
            ScriptId::CommonTurkic => "CTS",
            ScriptId::Uzbek => "UZBEK",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ScriptId::Arabic => "Uyghur Arabic Script",
            ScriptId::LatinComputer => "Uyghur Latin Script",
            ScriptId::LatinNew => "Uyghur Yengi Script",
            ScriptId::Cyrillic => "Uyghur Cyrillic Script",
            ScriptId::CommonTurkic => "Common Turkic Script",
            ScriptId::Uzbek => "Uzbek Latin Script",
        }
    }

    /// Whether this is the hub script all pipelines pass through.
    pub const fn is_canonical(self) -> bool {
        matches!(self, ScriptId::CommonTurkic)
    }

    /// Whether a pipeline may start from this script.
    pub const fn can_be_source(self) -> bool {
        !matches!(self, ScriptId::Uzbek)
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ScriptId {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        ScriptId::ALL
            .into_iter()
            .find(|id| id.code() == upper)
            .ok_or_else(|| ConvertError::UnknownScript(s.to_string()))
    }
}

impl TryFrom<String> for ScriptId {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScriptId> for String {
    fn from(id: ScriptId) -> Self {
        id.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("uas".parse::<ScriptId>().unwrap(), ScriptId::Arabic);
        assert_eq!("Cts".parse::<ScriptId>().unwrap(), ScriptId::CommonTurkic);
        assert_eq!(" uzbek ".parse::<ScriptId>().unwrap(), ScriptId::Uzbek);
    }

    #[test]
    fn parse_unknown_identifier() {
        let err = "UKS".parse::<ScriptId>().unwrap_err();
        assert_eq!(err, ConvertError::UnknownScript("UKS".to_string()));
    }

    #[test]
    fn codes_round_trip_through_display() {
        for id in ScriptId::ALL {
            assert_eq!(id.to_string().parse::<ScriptId>().unwrap(), id);
        }
    }

    #[test]
    fn only_common_turkic_is_canonical() {
        let canonical: Vec<_> = ScriptId::ALL.into_iter().filter(|s| s.is_canonical()).collect();
        assert_eq!(canonical, vec![ScriptId::CommonTurkic]);
    }

    #[test]
    fn uzbek_is_never_a_source() {
        assert!(!ScriptId::Uzbek.can_be_source());
        assert!(ScriptId::ALL.iter().filter(|s| **s != ScriptId::Uzbek).all(|s| s.can_be_source()));
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_string(&ScriptId::Cyrillic).unwrap(), "\"UCS\"");
        let id: ScriptId = serde_json::from_str("\"uys\"").unwrap();
        assert_eq!(id, ScriptId::LatinNew);
        assert!(serde_json::from_str::<ScriptId>("\"nope\"").is_err());
    }
}
