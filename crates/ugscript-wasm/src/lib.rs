// WASM bindings for the ugscript converter.
//
// Provides a `WasmConverter` class exported via wasm-bindgen that wraps the
// engine's `Converter`. Structured return values are serialized to
// JavaScript with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const converter = new WasmConverter();
//   converter.convert("yahxi", "ULS", "UAS", false);    // => "ياخشى"
//   converter.convertWithOptions("ماارىپ", "UAS", "CTS", { apostrophe: true });
//   converter.supportedPairs();   // => [{ source: "UAS", target: "ULS", stages: [...] }, ...]
//   WasmConverter.scripts();      // => ["UAS", "ULS", "UYS", "UCS", "CTS", "UZBEK"]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use ugscript_core::{ConversionOptions, ConvertError, ScriptId};
use ugscript_engine::{ConversionPath, Converter};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of one supported conversion.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct JsConversionPair {
    source: ScriptId,
    target: ScriptId,
    source_name: &'static str,
    target_name: &'static str,
    stages: Vec<String>,
}

fn supported_pair_dtos() -> Vec<JsConversionPair> {
    ConversionPath::supported_pairs()
        .filter_map(|(source, target)| ConversionPath::resolve(source, target).ok())
        .map(|path| JsConversionPair {
            source: path.source(),
            target: path.target(),
            source_name: path.source().name(),
            target_name: path.target().name(),
            stages: path.stages().map(|s| s.to_string()).collect(),
        })
        .collect()
}

fn convert_error_to_js(e: ConvertError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmConverter
// ============================================================================

/// Uyghur script converter for WebAssembly.
#[wasm_bindgen]
pub struct WasmConverter {
    converter: Converter,
}

#[wasm_bindgen]
impl WasmConverter {
    /// Create a converter over the built-in tables.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> WasmConverter {
        WasmConverter { converter: Converter::new() }
    }

    /// Convert `text` between two scripts given by code (`"UAS"`, `"ULS"`, ...).
    ///
    /// Throws when a code is unknown or the pair is not supported.
    pub fn convert(
        &self,
        text: &str,
        source: &str,
        target: &str,
        apostrophe: bool,
    ) -> Result<String, JsError> {
        self.converter
            .convert_codes(text, source, target, ConversionOptions::new(apostrophe))
            .map_err(convert_error_to_js)
    }

    /// Convert with an options object such as `{ apostrophe: true }`.
    ///
    /// Missing fields take their defaults; `undefined` means all defaults.
    #[wasm_bindgen(js_name = "convertWithOptions")]
    pub fn convert_with_options(
        &self,
        text: &str,
        source: &str,
        target: &str,
        options: JsValue,
    ) -> Result<String, JsError> {
        let options: ConversionOptions = if options.is_undefined() || options.is_null() {
            ConversionOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
        };
        self.converter
            .convert_codes(text, source, target, options)
            .map_err(convert_error_to_js)
    }

    /// List every supported conversion.
    ///
    /// Returns a JavaScript array of objects with fields:
    /// `source`, `target`, `sourceName`, `targetName`, `stages`.
    #[wasm_bindgen(js_name = "supportedPairs")]
    pub fn supported_pairs(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&supported_pair_dtos())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// The script codes, in declaration order.
    pub fn scripts() -> js_sys::Array {
        ScriptId::ALL.iter().map(|s| JsValue::from_str(s.code())).collect()
    }
}
