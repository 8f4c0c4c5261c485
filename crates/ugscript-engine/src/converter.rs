// Converter: the entry point for script conversion.
//
// Resolves a `ConversionPath` per call and runs its stages over the shared,
// read-only `ScriptTables`. Holds no mutable state, so one converter can
// serve any number of threads.

use std::sync::Arc;

use tracing::{debug_span, trace};

use ugscript_core::{ConversionOptions, ConvertError, ScriptId};

use crate::router::{ConversionPath, Stage};
use crate::tables::ScriptTables;

/// Converts text between the supported Uyghur orthographies.
///
/// ```
/// use ugscript_engine::{ConversionOptions, Converter, ScriptId};
///
/// let converter = Converter::new();
/// let out = converter
///     .convert("yaxşi", ScriptId::CommonTurkic, ScriptId::Cyrillic, ConversionOptions::default())
///     .unwrap();
/// assert_eq!(out, "яхши");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    tables: Arc<ScriptTables>,
}

impl Converter {
    /// Create a converter over freshly built built-in tables.
    pub fn new() -> Self {
        Self::with_tables(Arc::new(ScriptTables::new()))
    }

    /// Create a converter over an existing table bundle.
    pub fn with_tables(tables: Arc<ScriptTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ScriptTables {
        &self.tables
    }

    /// Convert `text` from `source` to `target`.
    ///
    /// Returns the text unchanged when `source == target`. Fails with
    /// `UnsupportedConversion` when the pair has no path.
    pub fn convert(
        &self,
        text: &str,
        source: ScriptId,
        target: ScriptId,
        options: ConversionOptions,
    ) -> Result<String, ConvertError> {
        let path = ConversionPath::resolve(source, target)?;
        let _span = debug_span!(
            "convert",
            %source,
            %target,
            apostrophe = options.apostrophe,
            len = text.len()
        )
        .entered();

        let mut current = text.to_string();
        for stage in path.stages() {
            current = self.run_stage(stage, &current, options)?;
            trace!(%stage, output_len = current.len(), "stage done");
        }
        Ok(current)
    }

    /// Convert using script identifier codes (`"UAS"`, `"cts"`, ...).
    ///
    /// Codes are matched case-insensitively; an unrecognized code fails with
    /// `UnknownScript`.
    pub fn convert_codes(
        &self,
        text: &str,
        source: &str,
        target: &str,
        options: ConversionOptions,
    ) -> Result<String, ConvertError> {
        let source: ScriptId = source.parse()?;
        let target: ScriptId = target.parse()?;
        self.convert(text, source, target, options)
    }

    fn run_stage(
        &self,
        stage: Stage,
        text: &str,
        options: ConversionOptions,
    ) -> Result<String, ConvertError> {
        match stage {
            Stage::ToCanonical(script) => self
                .tables
                .to_canonical(script, text, options)
                .ok_or(ConvertError::UnsupportedConversion {
                    from: script,
                    to: ScriptId::CommonTurkic,
                }),
            Stage::FromCanonical(script) => Ok(self.tables.from_canonical(script, text, options)),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
