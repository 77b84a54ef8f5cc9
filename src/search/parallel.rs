//! Parallel search execution
//!
//! Work distribution is split-based: the root enumerator over `[0, count-1]`
//! is divided recursively until one sub-range per worker exists, then each
//! worker drains its range on its own thread. Workers share only the
//! read-only probe space, a cancellation flag and a progress counter; the
//! probe computation itself needs no synchronization.
//!
//! Cancellation is cooperative. The flag is checked between probes, so a
//! worker may hash a handful of extra probes after a match is found
//! elsewhere; the progress counter is likewise reporting-only and never
//! participates in correctness.

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::anyhow;
use tracing::debug;

use super::{SearchConfig, SearchOutcome, SearchStats, TargetDigest};
use crate::generator::{ProbeSpace, RangeEnumerator, Verdict};

/// Below this domain size thread setup costs more than the scan itself.
const MIN_PARALLEL_PROBES: u64 = 10_000;

/// Progress line refresh interval, in probes.
const PROGRESS_INTERVAL: u64 = 1 << 20;

/// Scan the pattern's probe space for a probe matching the target digest.
///
/// With several true matches in the domain the reported one is whichever
/// worker signalled first, not the lowest index.
pub fn run(
    pattern: &str,
    target: &TargetDigest,
    config: &SearchConfig,
) -> crate::Result<SearchOutcome> {
    let space = Arc::new(ProbeSpace::parse(pattern)?);
    let total = space.total_probes();
    let workers = effective_workers(config, total);
    let start = Instant::now();

    debug!(total, workers, algorithm = target.algorithm().name(), "starting search");

    let cancelled = AtomicBool::new(false);
    let tested = AtomicU64::new(0);
    let matched: Mutex<Option<String>> = Mutex::new(None);
    let failure: Mutex<Option<anyhow::Error>> = Mutex::new(None);

    let root = RangeEnumerator::over(space);
    if workers <= 1 {
        try_drain_range(root, target, config, total, &cancelled, &tested, &matched)?;
    } else {
        let ranges = partition(root, workers);
        debug!(ranges = ranges.len(), "index domain split");

        crossbeam::thread::scope(|s| {
            for range in ranges {
                let (cancelled, tested, matched, failure) =
                    (&cancelled, &tested, &matched, &failure);
                s.spawn(move |_| {
                    if let Err(e) =
                        try_drain_range(range, target, config, total, cancelled, tested, matched)
                    {
                        cancelled.store(true, Ordering::Relaxed);
                        failure.lock().unwrap().get_or_insert(e);
                    }
                });
            }
        })
        .map_err(|_| anyhow!("worker thread panicked during search"))?;
    }

    if config.show_progress {
        // Clear the in-place progress line
        print!("\r");
        std::io::stdout().flush().ok();
    }

    if let Some(e) = failure.lock().unwrap().take() {
        return Err(e);
    }

    let stats = SearchStats {
        probes_tested: tested.load(Ordering::Relaxed),
        total_probes: total,
        duration_ms: start.elapsed().as_millis() as u64,
        workers,
    };
    debug!(probes = stats.probes_tested, ms = stats.duration_ms, "search finished");

    Ok(SearchOutcome {
        matched: matched.into_inner().unwrap(),
        stats,
    })
}

/// Worker count: requested cap or one per CPU core, never more than the
/// domain holds, and 1 for domains too small to be worth the threads.
fn effective_workers(config: &SearchConfig, total_probes: u64) -> usize {
    if config.sequential || total_probes < MIN_PARALLEL_PROBES {
        return 1;
    }
    let cpu_cores = num_cpus::get();
    let max_workers = config.threads.unwrap_or(cpu_cores).max(1);
    let probe_cap = usize::try_from(total_probes).unwrap_or(usize::MAX);
    std::cmp::min(max_workers, probe_cap)
}

/// Split the root enumerator until one sub-range per worker exists, always
/// dividing the widest remaining range. Stops early if ranges run out of
/// room to split.
fn partition(root: RangeEnumerator, parts: usize) -> Vec<RangeEnumerator> {
    let mut ranges = vec![root];
    while ranges.len() < parts {
        let widest = ranges
            .iter()
            .enumerate()
            .max_by_key(|(_, e)| e.remaining())
            .map(|(i, _)| i)
            .expect("at least the root range exists");
        match ranges[widest].split() {
            Some(sibling) => ranges.push(sibling),
            None => break,
        }
    }
    ranges
}

fn try_drain_range(
    mut range: RangeEnumerator,
    target: &TargetDigest,
    config: &SearchConfig,
    total: u64,
    cancelled: &AtomicBool,
    tested: &AtomicU64,
    matched: &Mutex<Option<String>>,
) -> crate::Result<()> {
    range.advance(|probe| {
        if cancelled.load(Ordering::Relaxed) {
            return Ok(Verdict::Stop);
        }

        let current = tested.fetch_add(1, Ordering::Relaxed) + 1;
        if config.show_progress && current % PROGRESS_INTERVAL == 0 {
            print!(
                "\rTested {} of {} probes ({:.1}%)",
                current,
                total,
                current as f64 / total as f64 * 100.0
            );
            std::io::stdout().flush().ok();
        }

        if target.matches(probe) {
            matched.lock().unwrap().get_or_insert_with(|| probe.to_string());
            cancelled.store(true, Ordering::Relaxed);
            return Ok(Verdict::Stop);
        }
        Ok(Verdict::Continue)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DigestAlgorithm;

    // sha1("a3b7c6d"), index 262 of a[0,6]b[d]c[3,7]d
    const SHA1_A3B7C6D: &str = "9fec1c7433290fa79c1c986e04c1167a1f85d39b";

    fn target(hex: &str) -> TargetDigest {
        TargetDigest::new(DigestAlgorithm::Sha1, hex).unwrap()
    }

    #[test]
    fn sequential_search_finds_the_probe() {
        let config = SearchConfig { sequential: true, ..Default::default() };
        let outcome = run("a[0,6]b[d]c[3,7]d", &target(SHA1_A3B7C6D), &config).unwrap();
        assert_eq!(outcome.matched.as_deref(), Some("a3b7c6d"));
        assert_eq!(outcome.stats.workers, 1);
        // Ascending sequential scan stops right at the match.
        assert_eq!(outcome.stats.probes_tested, 263);
    }

    #[test]
    fn parallel_search_finds_the_probe() {
        let config = SearchConfig { threads: Some(4), ..Default::default() };
        // Pad the pattern so the domain clears the sequential threshold.
        let outcome = run("a[0,6]b[d]c[3,7]d[d][d]", &target_for_padded(), &config).unwrap();
        assert_eq!(outcome.matched.as_deref(), Some("a3b7c6d00"));
        assert_eq!(outcome.stats.workers, 4);
    }

    fn target_for_padded() -> TargetDigest {
        // sha1("a3b7c6d00")
        TargetDigest::new(
            DigestAlgorithm::Sha1,
            &DigestAlgorithm::Sha1.hex_digest("a3b7c6d00"),
        )
        .unwrap()
    }

    #[test]
    fn missing_digest_scans_the_whole_domain() {
        let config = SearchConfig { sequential: true, ..Default::default() };
        let absent = target(&"0".repeat(40));
        let outcome = run("a[0,6]b[d]c[3,7]d", &absent, &config).unwrap();
        assert!(outcome.matched.is_none());
        assert_eq!(outcome.stats.probes_tested, 350);
        assert_eq!(outcome.stats.total_probes, 350);
    }

    #[test]
    fn small_domains_fall_back_to_one_worker() {
        let config = SearchConfig { threads: Some(8), ..Default::default() };
        assert_eq!(effective_workers(&config, 350), 1);
        assert_eq!(effective_workers(&config, MIN_PARALLEL_PROBES), 8);
    }

    #[test]
    fn partition_produces_disjoint_covering_ranges() {
        let space = Arc::new(ProbeSpace::parse("[0,6][d][3,7]").unwrap());
        let ranges = partition(RangeEnumerator::over(space), 5);
        assert_eq!(ranges.len(), 5);
        let mut indices: Vec<u64> = ranges.iter().flat_map(|e| e.cursor()..=e.end()).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..350).collect::<Vec<u64>>());
    }

    #[test]
    fn bad_pattern_fails_before_any_scan() {
        let config = SearchConfig::default();
        assert!(run("[1,2", &target(&"0".repeat(40)), &config).is_err());
    }
}
