//! Golden tests: every conversion case in tests/golden/conversions.json.
//!
//! Run: cargo test -p ugscript-engine --test golden

use std::path::PathBuf;

use serde::Deserialize;
use ugscript_engine::{ConversionOptions, Converter, ScriptId};

#[derive(Debug, Deserialize)]
struct GoldenCase {
    text: String,
    source: ScriptId,
    target: ScriptId,
    #[serde(default)]
    apostrophe: bool,
    expected: String,
}

fn load_golden(filename: &str) -> Vec<GoldenCase> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden").join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_conversions() {
    let converter = Converter::new();
    let cases = load_golden("conversions.json");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let options = ConversionOptions::new(case.apostrophe);
        let result = converter.convert(&case.text, case.source, case.target, options);
        match result {
            Ok(out) if out == case.expected => {}
            Ok(out) => failures.push(format!(
                "{} -> {} (apostrophe={}) {:?}: expected {:?}, got {:?}",
                case.source, case.target, case.apostrophe, case.text, case.expected, out
            )),
            Err(e) => failures.push(format!(
                "{} -> {} {:?}: error {}",
                case.source, case.target, case.text, e
            )),
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} golden cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_cases_use_supported_pairs() {
    let pairs: Vec<_> = ugscript_engine::ConversionPath::supported_pairs().collect();
    for case in load_golden("conversions.json") {
        assert!(
            pairs.contains(&(case.source, case.target)),
            "{} -> {} is not a supported pair",
            case.source,
            case.target
        );
    }
}
