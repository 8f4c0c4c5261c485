// Token substitution engines.
//
// Two strategies that must not be conflated:
// - `TokenTable`: ordered, sequential, global replacement. Each pair rewrites
//   the whole text before the next pair runs, so later pairs see the output
//   of earlier ones.
// - `AssociationMap`: one left-to-right pass with a priority-ordered
//   alternation. Each position is consumed at most once and replacement
//   output is never rescanned.

pub mod map;
pub mod table;

pub use map::AssociationMap;
pub use table::TokenTable;

/// Error type for building substitution tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The two sides of a token table have different lengths.
    #[error("token table sides differ in length: {from} source tokens, {to} target tokens")]
    LengthMismatch { from: usize, to: usize },

    /// A token is the empty string.
    #[error("empty token at index {0}")]
    EmptyToken(usize),

    /// An association map has no entries.
    #[error("association map has no entries")]
    Empty,

    /// An association map lists the same key twice.
    #[error("duplicate association key: {0:?}")]
    DuplicateKey(String),

    /// A matching pattern failed to compile.
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}
