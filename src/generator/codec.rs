//! Index codec
//!
//! Bijection between a linear probe index and the per-placeholder selection
//! vector, as a mixed-radix number: position k carries radix
//! `dynamic_sizes[k]` and weight `product(dynamic_sizes[..k])`. Ascending
//! weights keep random access at O(placeholder count) and make stepping to
//! the next index a plain increment at the caller.

use crate::error::GeneratorError;
use crate::generator::space::ProbeSpace;

pub struct IndexCodec {
    dynamic_sizes: Vec<u64>,
    total: u64,
}

impl IndexCodec {
    pub fn new(space: &ProbeSpace) -> Self {
        Self {
            dynamic_sizes: space.dynamic_sizes().to_vec(),
            total: space.total_probes(),
        }
    }

    /// Decode an index into its selection vector, one slot per dynamic
    /// element in pattern order.
    pub fn to_vector(&self, index: u64) -> Result<Vec<u64>, GeneratorError> {
        if index >= self.total {
            return Err(GeneratorError::IndexOutOfRange {
                index,
                total: self.total,
            });
        }

        let mut vector = Vec::with_capacity(self.dynamic_sizes.len());
        let mut rest = index;
        for &size in &self.dynamic_sizes {
            vector.push(rest % size);
            rest /= size;
        }
        Ok(vector)
    }

    /// Encode a selection vector back to its index. Inverse of `to_vector`
    /// for every in-range pair.
    pub fn to_index(&self, vector: &[u64]) -> u64 {
        debug_assert_eq!(vector.len(), self.dynamic_sizes.len());
        let mut index = 0;
        let mut weight = 1;
        for (slot, &size) in vector.iter().zip(&self.dynamic_sizes) {
            debug_assert!(*slot < size);
            index += slot * weight;
            weight *= size;
        }
        index
    }
}
