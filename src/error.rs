//! Typed errors for the enumeration core
//!
//! The CLI layer folds these into `anyhow` at the boundary; library callers
//! can match on the individual classes.

use thiserror::Error;

/// Errors raised while parsing a pattern or addressing its probe space.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// A `[` with no closing `]` before the end of the pattern.
    #[error("unmatched '[' at byte {0} of pattern")]
    UnmatchedBracket(usize),

    /// Bracket content that is neither `d` nor a `lo,hi` single-digit range.
    #[error("invalid dynamic pattern '[{0}]'")]
    InvalidDynamicPattern(String),

    /// The product of all element sizes does not fit in 64 bits.
    #[error("probe count overflows u64; narrow the pattern")]
    ProbeCountOverflow,

    /// Codec misuse: an index at or beyond the probe count. Cannot happen
    /// through the enumerator surface.
    #[error("probe index {index} out of range, space holds {total} probes")]
    IndexOutOfRange { index: u64, total: u64 },
}
