// ugscript-core: shared types for Uyghur multi-script conversion.
//
// Holds the script identifiers, per-call options, the error type and the
// Common Turkic character classes. Engine logic lives in ugscript-engine.

pub mod character;
pub mod error;
pub mod options;
pub mod script;

pub use error::ConvertError;
pub use options::ConversionOptions;
pub use script::ScriptId;
