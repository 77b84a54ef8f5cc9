//! Probe renderer
//!
//! Walks the element list in pattern order, appending literal text verbatim
//! and consuming one selection-vector slot per dynamic element. Rendering is
//! a pure function of the vector plus the literal skeleton, so distinct
//! indices always render distinct probes.

use crate::generator::space::ProbeSpace;

pub struct ProbeRenderer<'a> {
    space: &'a ProbeSpace,
}

impl<'a> ProbeRenderer<'a> {
    pub fn new(space: &'a ProbeSpace) -> Self {
        Self { space }
    }

    /// Render a selection vector into the concrete probe string.
    pub fn render(&self, vector: &[u64]) -> String {
        let mut probe = String::new();
        self.render_into(&mut probe, vector);
        probe
    }

    /// Render into a reusable buffer; the enumerator's advance loop calls
    /// this once per index.
    pub fn render_into(&self, probe: &mut String, vector: &[u64]) {
        probe.clear();
        let mut slots = vector.iter();
        for element in self.space.elements() {
            if element.is_dynamic() {
                let slot = *slots
                    .next()
                    .expect("selection vector shorter than dynamic element count");
                probe.push_str(&element.nth_content(slot));
            } else {
                probe.push_str(&element.nth_content(0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::codec::IndexCodec;
    use std::collections::HashSet;

    fn probe_at(space: &ProbeSpace, index: u64) -> String {
        let codec = IndexCodec::new(space);
        ProbeRenderer::new(space).render(&codec.to_vector(index).unwrap())
    }

    #[test]
    fn known_indices_render_known_probes() {
        let space = ProbeSpace::parse("a[0,6]b[d]c[3,7]d").unwrap();
        assert_eq!(probe_at(&space, 0), "a0b0c3d");
        assert_eq!(probe_at(&space, 1), "a1b0c3d");
        assert_eq!(probe_at(&space, 7), "a0b1c3d");
        assert_eq!(probe_at(&space, 13), "a6b1c3d");
        assert_eq!(probe_at(&space, 70), "a0b0c4d");
        assert_eq!(probe_at(&space, 175), "a0b5c5d");
    }

    #[test]
    fn rendering_is_injective_over_the_domain() {
        let space = ProbeSpace::parse("[0,6][d][3,7]").unwrap();
        let probes: HashSet<String> = (0..350).map(|i| probe_at(&space, i)).collect();
        assert_eq!(probes.len(), 350);
    }

    #[test]
    fn literal_only_pattern_renders_itself() {
        let space = ProbeSpace::parse("N 51 23.456").unwrap();
        assert_eq!(probe_at(&space, 0), "N 51 23.456");
    }

    #[test]
    fn empty_pattern_renders_the_empty_string() {
        let space = ProbeSpace::parse("").unwrap();
        assert_eq!(probe_at(&space, 0), "");
    }
}
