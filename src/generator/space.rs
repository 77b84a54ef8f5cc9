//! Probe space
//!
//! Owns the parsed element list and the two derived facts everything else
//! builds on: the total probe count (product of element sizes, computed once,
//! overflow-checked) and the ordered sizes of the dynamic elements, which is
//! the canonical radix basis for the index codec.
//!
//! A `ProbeSpace` is immutable after construction and is shared read-only
//! across workers behind an `Arc`.

use crate::error::GeneratorError;
use crate::generator::element::GeneratorElement;
use crate::generator::parser;

#[derive(Debug)]
pub struct ProbeSpace {
    elements: Vec<GeneratorElement>,
    dynamic_sizes: Vec<u64>,
    total_probes: u64,
}

impl ProbeSpace {
    /// Build a space from parsed elements. Fails if the probe count does
    /// not fit in 64 bits.
    pub fn new(elements: Vec<GeneratorElement>) -> Result<Self, GeneratorError> {
        let mut total: u64 = 1;
        for element in &elements {
            total = total
                .checked_mul(element.size())
                .ok_or(GeneratorError::ProbeCountOverflow)?;
        }

        let dynamic_sizes = elements
            .iter()
            .filter(|e| e.is_dynamic())
            .map(|e| e.size())
            .collect();

        Ok(Self {
            elements,
            dynamic_sizes,
            total_probes: total,
        })
    }

    /// Parse a pattern and build its space in one step.
    pub fn parse(pattern: &str) -> Result<Self, GeneratorError> {
        Self::new(parser::parse(pattern)?)
    }

    /// Number of probes in the space. At least 1: a literal-only pattern
    /// has exactly one probe.
    pub fn total_probes(&self) -> u64 {
        self.total_probes
    }

    /// Sizes of the dynamic elements in pattern order.
    pub fn dynamic_sizes(&self) -> &[u64] {
        &self.dynamic_sizes
    }

    /// The full ordered element list, literals included.
    pub fn elements(&self) -> &[GeneratorElement] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_product_of_sizes() {
        let space = ProbeSpace::parse("[0,6][d][3,7]").unwrap();
        assert_eq!(space.total_probes(), 7 * 10 * 5);
        assert_eq!(space.dynamic_sizes(), &[7, 10, 5]);
    }

    #[test]
    fn literals_contribute_factor_one() {
        let space = ProbeSpace::parse("a[0,6]b[d]c[3,7]d").unwrap();
        assert_eq!(space.total_probes(), 350);
        assert_eq!(space.dynamic_sizes(), &[7, 10, 5]);
        assert_eq!(space.elements().len(), 7);
    }

    #[test]
    fn empty_pattern_is_a_single_probe() {
        let space = ProbeSpace::parse("").unwrap();
        assert_eq!(space.total_probes(), 1);
        assert!(space.dynamic_sizes().is_empty());
    }

    #[test]
    fn probe_count_overflow_is_detected() {
        // 10^20 > u64::MAX (about 1.8 * 10^19)
        let pattern = "[d]".repeat(20);
        assert_eq!(
            ProbeSpace::parse(&pattern).unwrap_err(),
            GeneratorError::ProbeCountOverflow
        );
    }

    #[test]
    fn nineteen_digits_still_fit() {
        let pattern = "[d]".repeat(19);
        assert_eq!(
            ProbeSpace::parse(&pattern).unwrap().total_probes(),
            10u64.pow(19)
        );
    }
}
