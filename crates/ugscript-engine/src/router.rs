// Conversion routing through the Common Turkic hub.

use std::fmt;

use ugscript_core::{ConvertError, ScriptId};

/// One step of a conversion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// `script -> CTS`
    ToCanonical(ScriptId),
    /// `CTS -> script`
    FromCanonical(ScriptId),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ToCanonical(s) => write!(f, "{s} -> {}", ScriptId::CommonTurkic),
            Stage::FromCanonical(s) => write!(f, "{} -> {s}", ScriptId::CommonTurkic),
        }
    }
}

/// The resolved stages for one (source, target) pair.
///
/// At most two stages: an inbound stage unless the source is the hub, then an
/// outbound stage unless the target is the hub. An empty path is the
/// identity. Resolved per call; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPath {
    source: ScriptId,
    target: ScriptId,
    inbound: Option<Stage>,
    outbound: Option<Stage>,
}

impl ConversionPath {
    /// Resolve the path for `source -> target`.
    ///
    /// - `source == target`: identity path, for every script.
    /// - `source` is Uzbek: `UnsupportedConversion`; Uzbek is write-only.
    /// - otherwise: `source -> CTS -> target`, skipping hub-side stages.
    pub fn resolve(source: ScriptId, target: ScriptId) -> Result<Self, ConvertError> {
        if source == target {
            return Ok(Self { source, target, inbound: None, outbound: None });
        }
        if !source.can_be_source() {
            return Err(ConvertError::UnsupportedConversion { from: source, to: target });
        }
        Ok(Self {
            source,
            target,
            inbound: (!source.is_canonical()).then_some(Stage::ToCanonical(source)),
            outbound: (!target.is_canonical()).then_some(Stage::FromCanonical(target)),
        })
    }

    pub fn source(&self) -> ScriptId {
        self.source
    }

    pub fn target(&self) -> ScriptId {
        self.target
    }

    /// Whether the path leaves text unchanged.
    pub fn is_identity(&self) -> bool {
        self.inbound.is_none() && self.outbound.is_none()
    }

    /// The stages in execution order.
    pub fn stages(&self) -> impl Iterator<Item = Stage> {
        self.inbound.into_iter().chain(self.outbound)
    }

    /// Every distinct (source, target) pair that resolves to a path.
    pub fn supported_pairs() -> impl Iterator<Item = (ScriptId, ScriptId)> {
        ScriptId::ALL.into_iter().flat_map(|source| {
            ScriptId::ALL
                .into_iter()
                .filter(move |&target| target != source && Self::resolve(source, target).is_ok())
                .map(move |target| (source, target))
        })
    }
}

impl fmt::Display for ConversionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "{} (unchanged)", self.source);
        }
        let stages: Vec<String> = self.stages().map(|s| s.to_string()).collect();
        f.write_str(&stages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_script_is_identity() {
        for s in ScriptId::ALL {
            let path = ConversionPath::resolve(s, s).unwrap();
            assert!(path.is_identity(), "{s} -> {s} should be identity");
        }
    }

    #[test]
    fn hub_to_script_is_one_stage() {
        let path = ConversionPath::resolve(ScriptId::CommonTurkic, ScriptId::Arabic).unwrap();
        assert_eq!(path.stages().collect::<Vec<_>>(), vec![Stage::FromCanonical(ScriptId::Arabic)]);
    }

    #[test]
    fn script_to_hub_is_one_stage() {
        let path = ConversionPath::resolve(ScriptId::Cyrillic, ScriptId::CommonTurkic).unwrap();
        assert_eq!(path.stages().collect::<Vec<_>>(), vec![Stage::ToCanonical(ScriptId::Cyrillic)]);
    }

    #[test]
    fn cross_conversion_is_two_stages() {
        let path = ConversionPath::resolve(ScriptId::LatinComputer, ScriptId::Arabic).unwrap();
        assert_eq!(
            path.stages().collect::<Vec<_>>(),
            vec![
                Stage::ToCanonical(ScriptId::LatinComputer),
                Stage::FromCanonical(ScriptId::Arabic)
            ]
        );
        assert_eq!(path.to_string(), "ULS -> CTS, CTS -> UAS");
    }

    #[test]
    fn uzbek_is_reachable_from_hub() {
        assert!(ConversionPath::resolve(ScriptId::CommonTurkic, ScriptId::Uzbek).is_ok());
        assert!(ConversionPath::resolve(ScriptId::Arabic, ScriptId::Uzbek).is_ok());
    }

    #[test]
    fn uzbek_is_never_a_source() {
        for target in ScriptId::ALL.into_iter().filter(|&t| t != ScriptId::Uzbek) {
            let err = ConversionPath::resolve(ScriptId::Uzbek, target).unwrap_err();
            assert_eq!(err, ConvertError::UnsupportedConversion { from: ScriptId::Uzbek, to: target });
        }
    }

    #[test]
    fn supported_pairs_matrix() {
        let pairs: Vec<_> = ConversionPath::supported_pairs().collect();
        // Five readable scripts, each to the five other scripts.
        assert_eq!(pairs.len(), 25);
        assert!(pairs.iter().all(|(s, t)| s != t && *s != ScriptId::Uzbek));
        assert!(pairs.contains(&(ScriptId::Arabic, ScriptId::Cyrillic)));
        assert!(pairs.contains(&(ScriptId::CommonTurkic, ScriptId::Uzbek)));
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::ToCanonical(ScriptId::Arabic).to_string(), "UAS -> CTS");
        assert_eq!(Stage::FromCanonical(ScriptId::LatinNew).to_string(), "CTS -> UYS");
    }
}
