//! Pattern parser
//!
//! Grammar, single left-to-right pass, no escaping, no nesting:
//!
//! - text outside brackets becomes one literal per run
//! - `[d]` is the full digit range 0-9
//! - `[lo,hi]` with single-digit bounds and lo < hi is a narrowed range;
//!   whitespace is tolerated after the comma only
//!
//! Anything else inside brackets, and any `[` without a closing `]`, is an
//! error. The element order is the textual order and is what the renderer
//! later walks.

use crate::error::GeneratorError;
use crate::generator::element::GeneratorElement;

/// Parse a pattern into its ordered element sequence.
///
/// An empty pattern yields no elements; the probe space then holds exactly
/// one probe, the empty string.
pub fn parse(pattern: &str) -> Result<Vec<GeneratorElement>, GeneratorError> {
    let mut elements = Vec::new();
    let bytes = pattern.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'[' {
            let close = pattern[pos + 1..]
                .find(']')
                .map(|off| pos + 1 + off)
                .ok_or(GeneratorError::UnmatchedBracket(pos))?;
            elements.push(parse_dynamic(&pattern[pos + 1..close])?);
            pos = close + 1;
        } else {
            let end = pattern[pos..]
                .find('[')
                .map(|off| pos + off)
                .unwrap_or(pattern.len());
            elements.push(GeneratorElement::Literal(pattern[pos..end].to_string()));
            pos = end;
        }
    }

    Ok(elements)
}

/// Parse one bracket body: `d` or `lo,hi`.
fn parse_dynamic(body: &str) -> Result<GeneratorElement, GeneratorError> {
    if body == "d" {
        return Ok(GeneratorElement::DigitRange { lo: 0, hi: 9 });
    }

    // lo,hi with single ASCII digit bounds; whitespace only after the comma.
    // This asymmetry is part of the wire contract, not something to relax.
    let invalid = || GeneratorError::InvalidDynamicPattern(body.to_string());
    let (lo, rest) = split_digit(body).ok_or_else(invalid)?;
    let rest = rest.strip_prefix(',').ok_or_else(invalid)?;
    let rest = rest.trim_start();
    let (hi, rest) = split_digit(rest).ok_or_else(invalid)?;
    if !rest.is_empty() || lo >= hi {
        return Err(invalid());
    }

    Ok(GeneratorElement::DigitRange { lo, hi })
}

/// Split a leading ASCII digit off a string.
fn split_digit(s: &str) -> Option<(u8, &str)> {
    let first = *s.as_bytes().first()?;
    first.is_ascii_digit().then(|| (first - b'0', &s[1..]))
}
