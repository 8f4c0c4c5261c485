// Contextual rules that plain token substitution cannot express.

pub mod arabic;
pub mod cyrillic;

pub use arabic::ArabicBoundary;
pub use cyrillic::CyrillicBoundary;
