//! Parallel digest search over a probe space
//!
//! Builds on the enumeration core: the index domain is split into one
//! sub-range per worker, every worker hashes its probes with its own digest
//! context, and the first match raises a shared cancellation flag the other
//! workers observe between probes.

pub mod digest;
pub mod parallel;

// Re-export main types for easier access
pub use digest::{DigestAlgorithm, TargetDigest};
pub use parallel::run;

/// Tuning knobs for a search run.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Worker thread cap. `None` means one per CPU core.
    pub threads: Option<usize>,
    /// Force single-threaded scanning regardless of domain size.
    pub sequential: bool,
    /// Emit an in-place progress line while scanning.
    pub show_progress: bool,
}

/// Statistics from a search run.
#[derive(Debug, Default)]
pub struct SearchStats {
    /// Probes rendered and hashed. Approximate when the run was cancelled:
    /// workers may test a few extra probes after a match is found elsewhere.
    pub probes_tested: u64,
    /// Size of the scanned index domain.
    pub total_probes: u64,
    pub duration_ms: u64,
    pub workers: usize,
}

/// Result of a search run.
#[derive(Debug)]
pub struct SearchOutcome {
    /// The matching probe, if any. Under parallel execution with several
    /// true matches in the domain, which one is reported is unspecified:
    /// the first worker to raise the cancellation flag wins.
    pub matched: Option<String>,
    pub stats: SearchStats,
}
