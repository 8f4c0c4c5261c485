//! Property tests over the conversion router.

use proptest::prelude::*;
use ugscript_engine::{ConversionOptions, ConversionPath, Converter, ScriptId};

fn script() -> impl Strategy<Value = ScriptId> {
    prop::sample::select(ScriptId::ALL.to_vec())
}

fn readable_script() -> impl Strategy<Value = ScriptId> {
    prop::sample::select(
        ScriptId::ALL.into_iter().filter(|s| s.can_be_source()).collect::<Vec<_>>(),
    )
}

/// Lowercase CTS words separated by spaces and light punctuation.
fn cts_text() -> impl Strategy<Value = String> {
    "[abcçdeéfgğhijklmnñoöpqrsştuüvxyz ,.?]{0,40}"
}

proptest! {
    #[test]
    fn same_script_is_identity(text in ".{0,40}", s in script(), apostrophe: bool) {
        let converter = Converter::new();
        let out = converter.convert(&text, s, s, ConversionOptions::new(apostrophe)).unwrap();
        prop_assert_eq!(out, text);
    }

    #[test]
    fn uzbek_is_never_a_source(text in ".{0,20}", t in script()) {
        prop_assume!(t != ScriptId::Uzbek);
        let converter = Converter::new();
        prop_assert!(converter.convert(&text, ScriptId::Uzbek, t, ConversionOptions::default()).is_err());
    }

    #[test]
    fn two_stage_is_composition_through_hub(
        text in cts_text(),
        s in readable_script(),
        t in script(),
        apostrophe: bool,
    ) {
        prop_assume!(s != t && s != ScriptId::CommonTurkic && t != ScriptId::CommonTurkic);
        let converter = Converter::new();
        let options = ConversionOptions::new(apostrophe);
        // Put the generated CTS text into the source script first.
        let input = converter.convert(&text, ScriptId::CommonTurkic, s, options).unwrap();

        let direct = converter.convert(&input, s, t, options).unwrap();
        let hub = converter.convert(&input, s, ScriptId::CommonTurkic, options).unwrap();
        let composed = converter.convert(&hub, ScriptId::CommonTurkic, t, options).unwrap();
        prop_assert_eq!(direct, composed);
    }

    #[test]
    fn every_supported_pair_converts(text in cts_text(), apostrophe: bool) {
        let converter = Converter::new();
        for (s, t) in ConversionPath::supported_pairs() {
            prop_assert!(converter.convert(&text, s, t, ConversionOptions::new(apostrophe)).is_ok());
        }
    }
}
