use anyhow::Result;
use clap::Args;

use crate::cli::output::Output;
use crate::generator::{IndexCodec, ProbeRenderer, ProbeSpace};

#[derive(Args)]
pub struct ProbesArgs {
    /// Probe pattern, e.g. "N 5[d] 3[1,5].[d][d][d]"
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// First probe index to print
    #[arg(long, default_value = "0")]
    pub skip: u64,

    /// Number of probes to print
    #[arg(long, default_value = "10")]
    pub limit: u64,

    /// Prefix each probe with its index
    #[arg(long)]
    pub indices: bool,
}

pub fn execute(args: ProbesArgs, output: &Output) -> Result<()> {
    let space = ProbeSpace::parse(&args.pattern)?;
    let total = space.total_probes();
    if args.skip >= total {
        output.warning(&format!(
            "skip {} is past the end of the {}-probe space",
            args.skip, total
        ));
        return Ok(());
    }

    let codec = IndexCodec::new(&space);
    let renderer = ProbeRenderer::new(&space);
    let end = args.skip.saturating_add(args.limit).min(total);

    // Random access per index; no need to walk up to the window
    for index in args.skip..end {
        let probe = renderer.render(&codec.to_vector(index)?);
        if args.indices {
            println!("{index}\t{probe}");
        } else {
            println!("{probe}");
        }
    }

    if end < total {
        output.verbose(&format!("{} more probes not shown", total - end));
    }
    Ok(())
}
