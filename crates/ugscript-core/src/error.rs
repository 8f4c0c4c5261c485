// Conversion errors shared by every layer (engine, CLI, FFI, WASM).

use crate::script::ScriptId;

/// Error raised when a conversion request cannot be served.
///
/// Both variants are caller errors; nothing inside the engine is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// No pipeline exists for a distinct (source, target) pair.
    #[error("target script not supported: {from} -> {to}")]
    UnsupportedConversion { from: ScriptId, to: ScriptId },

    /// The script identifier does not name any known orthography.
    #[error("unknown script identifier: {0:?}")]
    UnknownScript(String),
}
