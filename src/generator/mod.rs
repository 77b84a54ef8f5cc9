//! Probe-space enumeration core
//!
//! A pattern like `N 5[d] 3[1,5].[d][d][d]` mixes literal text with bracketed
//! digit placeholders. This module parses the pattern, defines a total
//! ordering over every concrete probe it can produce, maps linear indices to
//! probes without materializing the space, and drives splittable range
//! enumeration for parallel scanning.
//!
//! Everything here is a pure function of the pattern; the matching predicate
//! applied to each probe is supplied by the caller.

pub mod codec;
pub mod element;
pub mod enumerator;
pub mod parser;
pub mod render;
pub mod space;

// Re-export main types for easier access
pub use codec::IndexCodec;
pub use element::GeneratorElement;
pub use enumerator::{EnumeratorState, RangeEnumerator, Verdict};
pub use parser::parse;
pub use render::ProbeRenderer;
pub use space::ProbeSpace;

use crate::error::GeneratorError;
use std::sync::Arc;

/// Number of probes the pattern can produce.
pub fn count(pattern: &str) -> Result<u64, GeneratorError> {
    Ok(ProbeSpace::parse(pattern)?.total_probes())
}

/// Root enumerator covering the pattern's full index domain `[0, count-1]`.
pub fn enumerate(pattern: &str) -> Result<RangeEnumerator, GeneratorError> {
    let space = Arc::new(ProbeSpace::parse(pattern)?);
    Ok(RangeEnumerator::over(space))
}
