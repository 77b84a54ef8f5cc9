//! Pattern elements
//!
//! A parsed pattern is an ordered list of elements. A literal contributes
//! exactly one value; a digit range contributes one value per digit it
//! spans. `size` and `nth_content` are the whole contract: the number of
//! values, and the nth of them for n in `[0, size)`.

/// One element of a parsed pattern, in textual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorElement {
    /// Fixed text between placeholders.
    Literal(String),
    /// A bracketed placeholder spanning the digits `lo..=hi`, 0 <= lo < hi <= 9.
    DigitRange { lo: u8, hi: u8 },
}

impl GeneratorElement {
    /// Number of distinct values this element can take. Always >= 1.
    pub fn size(&self) -> u64 {
        match self {
            GeneratorElement::Literal(_) => 1,
            GeneratorElement::DigitRange { lo, hi } => (hi - lo + 1) as u64,
        }
    }

    /// The nth value, for n in `[0, size())`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= size()`; the renderer only passes slots the codec
    /// has already bounds-checked.
    pub fn nth_content(&self, n: u64) -> String {
        match self {
            GeneratorElement::Literal(text) => {
                assert_eq!(n, 0, "literal element has a single value");
                text.clone()
            }
            GeneratorElement::DigitRange { lo, hi } => {
                assert!(n < self.size(), "digit slot {} exceeds range [{},{}]", n, lo, hi);
                (*lo as u64 + n).to_string()
            }
        }
    }

    /// True for elements contributing more than a fixed value.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, GeneratorElement::DigitRange { .. })
    }
}
