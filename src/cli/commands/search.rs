use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{thousands, Output};
use crate::search::{self, DigestAlgorithm, SearchConfig, TargetDigest};

#[derive(Args)]
pub struct SearchArgs {
    /// Probe pattern, e.g. "N 5[d] 3[1,5].[d][d][d]"
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Target digest as a hex string
    #[arg(value_name = "DIGEST")]
    pub target: String,

    /// Digest algorithm applied to each probe
    #[arg(short, long, value_enum, default_value_t = DigestAlgorithm::Sha1)]
    pub algorithm: DigestAlgorithm,

    /// Worker threads (default: one per CPU core)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Force single-threaded scanning
    #[arg(long)]
    pub sequential: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, Serialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}

pub fn execute(args: SearchArgs, output: &Output) -> Result<()> {
    let target = TargetDigest::new(args.algorithm, &args.target)?;

    let count = crate::generator::count(&args.pattern)?;
    output.info(&format!(
        "The pattern '{}' contains {} probes",
        args.pattern,
        thousands(count)
    ));

    let config = SearchConfig {
        threads: args.threads,
        sequential: args.sequential,
        show_progress: args.format == OutputFormat::Text && !output.is_quiet(),
    };
    let outcome = search::run(&args.pattern, &target, &config)?;

    match args.format {
        OutputFormat::Json => print_json(&args, &outcome)?,
        OutputFormat::Text => print_text(&outcome, output),
    }

    // Exit code 1 when no probe in the domain matches, so scripts can branch
    if outcome.matched.is_none() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_text(outcome: &search::SearchOutcome, output: &Output) {
    match &outcome.matched {
        Some(probe) => output.success(&format!("Match: {probe}")),
        None => output.warning("No probe matches the target digest"),
    }

    let stats = &outcome.stats;
    let secs = stats.duration_ms as f64 / 1000.0;
    let rate = if stats.duration_ms > 0 {
        stats.probes_tested as f64 / secs
    } else {
        stats.probes_tested as f64
    };
    output.key_value("Probes tested:", &thousands(stats.probes_tested));
    output.key_value("Elapsed:", &format!("{secs:.2}s"));
    output.key_value("Rate:", &format!("{} probes/s", thousands(rate as u64)));
    output.key_value("Workers:", &stats.workers.to_string());
}

fn print_json(args: &SearchArgs, outcome: &search::SearchOutcome) -> Result<()> {
    let stats = &outcome.stats;
    let results = serde_json::json!({
        "pattern": args.pattern,
        "algorithm": args.algorithm,
        "target": args.target.to_ascii_lowercase(),
        "match": outcome.matched,
        "statistics": {
            "probes_tested": stats.probes_tested,
            "total_probes": stats.total_probes,
            "duration_ms": stats.duration_ms,
            "workers": stats.workers,
        }
    });
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
