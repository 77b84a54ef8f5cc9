//! Splittable range enumeration
//!
//! A `RangeEnumerator` owns a closed sub-range `[cursor, to]` of a probe
//! space's index domain and visits it strictly ascending, feeding each
//! rendered probe to a caller predicate. While it has at least two indices
//! left it can be split: the sibling takes the lower half of the remainder
//! and the original keeps the upper half, so the ranges of all enumerators
//! ever produced from one root tile the root's domain with no gaps and no
//! overlaps. Splitting is pure bookkeeping and never renders a probe.
//!
//! Enumerators are single-owner: one worker drains one enumerator. The
//! shared `ProbeSpace` behind the `Arc` is read-only.

use std::sync::Arc;

use crate::generator::codec::IndexCodec;
use crate::generator::render::ProbeRenderer;
use crate::generator::space::ProbeSpace;

/// What the caller's predicate wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep scanning.
    Continue,
    /// Found what we were looking for (or told to cancel); halt this
    /// enumerator now.
    Stop,
}

/// Lifecycle of an enumerator. Both `Exhausted` and `Stopped` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumeratorState {
    Enumerating,
    Exhausted,
    Stopped,
}

pub struct RangeEnumerator {
    space: Arc<ProbeSpace>,
    codec: IndexCodec,
    cursor: u64,
    to: u64,
    state: EnumeratorState,
}

impl RangeEnumerator {
    /// Enumerator over the space's full index domain `[0, total-1]`.
    pub fn over(space: Arc<ProbeSpace>) -> Self {
        let to = space.total_probes() - 1;
        Self::with_range(space, 0, to)
    }

    fn with_range(space: Arc<ProbeSpace>, from: u64, to: u64) -> Self {
        debug_assert!(from <= to);
        let codec = IndexCodec::new(&space);
        Self {
            space,
            codec,
            cursor: from,
            to,
            state: EnumeratorState::Enumerating,
        }
    }

    pub fn state(&self) -> EnumeratorState {
        self.state
    }

    /// Next index this enumerator would visit.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Last index of the owned range, inclusive.
    pub fn end(&self) -> u64 {
        self.to
    }

    /// Number of indices not yet consumed. Zero once terminal.
    pub fn remaining(&self) -> u64 {
        match self.state {
            EnumeratorState::Enumerating => self.to - self.cursor + 1,
            _ => 0,
        }
    }

    /// Drain the range, feeding every probe to `predicate` in ascending
    /// index order until it answers [`Verdict::Stop`] or the range is
    /// exhausted. Returns the terminal state reached.
    ///
    /// A predicate error aborts this enumerator and propagates; nothing is
    /// retried. Indices above the cursor stay unvisited after a stop.
    pub fn advance<F>(&mut self, mut predicate: F) -> anyhow::Result<EnumeratorState>
    where
        F: FnMut(&str) -> anyhow::Result<Verdict>,
    {
        let space = Arc::clone(&self.space);
        let renderer = ProbeRenderer::new(&space);
        let mut probe = String::new();

        while self.state == EnumeratorState::Enumerating {
            let vector = self.codec.to_vector(self.cursor)?;
            renderer.render_into(&mut probe, &vector);
            match predicate(&probe)? {
                Verdict::Stop => self.state = EnumeratorState::Stopped,
                Verdict::Continue => {
                    if self.cursor == self.to {
                        self.state = EnumeratorState::Exhausted;
                    } else {
                        self.cursor += 1;
                    }
                }
            }
        }
        Ok(self.state)
    }

    /// Hand the lower half of the unconsumed remainder to a new sibling
    /// enumerator and keep the upper half. Returns `None` when fewer than
    /// two indices remain; the caller then drains sequentially instead of
    /// parallelizing further.
    pub fn split(&mut self) -> Option<RangeEnumerator> {
        if self.remaining() <= 1 {
            return None;
        }
        let mid = self.cursor + (self.to - self.cursor) / 2 + 1;
        let sibling = Self::with_range(Arc::clone(&self.space), self.cursor, mid - 1);
        self.cursor = mid;
        Some(sibling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(pattern: &str) -> RangeEnumerator {
        RangeEnumerator::over(Arc::new(ProbeSpace::parse(pattern).unwrap()))
    }

    #[test]
    fn visits_every_probe_in_ascending_order() {
        let mut seen = Vec::new();
        let mut root = root("x[1,3][d]");
        let state = root
            .advance(|probe| {
                seen.push(probe.to_string());
                Ok(Verdict::Continue)
            })
            .unwrap();
        assert_eq!(state, EnumeratorState::Exhausted);
        assert_eq!(seen.len(), 30);
        assert_eq!(seen[0], "x10");
        assert_eq!(seen[1], "x20");
        assert_eq!(seen[3], "x11");
        assert_eq!(seen[29], "x39");
        let unique: std::collections::HashSet<&String> = seen.iter().collect();
        assert_eq!(unique.len(), 30);
    }

    #[test]
    fn stop_halts_before_higher_indices() {
        let mut visited = 0u64;
        let mut root = root("[d][d]");
        let state = root
            .advance(|probe| {
                visited += 1;
                Ok(if probe == "73" { Verdict::Stop } else { Verdict::Continue })
            })
            .unwrap();
        assert_eq!(state, EnumeratorState::Stopped);
        // "73" is index 37; everything above stays unvisited.
        assert_eq!(visited, 38);
        assert_eq!(root.remaining(), 0);

        // Terminal states are sticky; a later advance visits nothing.
        let state = root.advance(|_| panic!("must not render")).unwrap();
        assert_eq!(state, EnumeratorState::Stopped);
    }

    #[test]
    fn predicate_error_propagates() {
        let mut root = root("[d]");
        let err = root
            .advance(|probe| {
                if probe == "4" {
                    anyhow::bail!("digest backend failed")
                }
                Ok(Verdict::Continue)
            })
            .unwrap_err();
        assert!(err.to_string().contains("digest backend"));
    }

    #[test]
    fn split_partitions_the_remainder() {
        let mut upper = root("[0,6][d][3,7]");
        let lower = upper.split().expect("350 indices must split");
        assert_eq!(lower.cursor(), 0);
        assert_eq!(lower.end(), 174);
        assert_eq!(upper.cursor(), 175);
        assert_eq!(upper.end(), 349);
        assert_eq!(lower.remaining() + upper.remaining(), 350);
    }

    #[test]
    fn too_small_ranges_refuse_to_split() {
        let mut root = root("[1,2]");
        let sibling = root.split().expect("two indices split once");
        assert_eq!(sibling.remaining(), 1);
        assert_eq!(root.remaining(), 1);
        assert!(root.split().is_none());

        let mut single = RangeEnumerator::over(Arc::new(ProbeSpace::parse("abc").unwrap()));
        assert!(single.split().is_none());
    }

    #[test]
    fn recursive_splitting_tiles_the_domain() {
        // Split greedily to arbitrary depth, then check the leaf ranges
        // reproduce [0, 349] with no gaps and no duplicates.
        let mut leaves = vec![root("[0,6][d][3,7]")];
        let mut i = 0;
        while i < leaves.len() {
            while let Some(sibling) = leaves[i].split() {
                leaves.push(sibling);
            }
            i += 1;
        }
        let mut indices: Vec<u64> = leaves
            .iter()
            .flat_map(|e| e.cursor()..=e.end())
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..350).collect::<Vec<u64>>());
    }

    #[test]
    fn split_leaves_visit_their_exact_ranges() {
        let mut upper = root("a[0,6]b[d]c[3,7]d");
        let mut lower = upper.split().unwrap();

        let mut lower_seen = Vec::new();
        lower
            .advance(|p| {
                lower_seen.push(p.to_string());
                Ok(Verdict::Continue)
            })
            .unwrap();
        assert_eq!(lower_seen.len(), 175);
        assert_eq!(lower_seen[0], "a0b0c3d");
        assert_eq!(lower_seen[174], "a6b4c5d");

        let mut upper_first = None;
        upper
            .advance(|p| {
                upper_first.get_or_insert_with(|| p.to_string());
                Ok(Verdict::Continue)
            })
            .unwrap();
        assert_eq!(upper_first.as_deref(), Some("a0b5c5d"));
    }
}
