use anyhow::Result;
use clap::Args;

use crate::cli::output::{thousands, Output};
use crate::generator::ProbeSpace;

#[derive(Args)]
pub struct CountArgs {
    /// Probe pattern, e.g. "N 5[d] 3[1,5].[d][d][d]"
    #[arg(value_name = "PATTERN")]
    pub pattern: String,
}

pub fn execute(args: CountArgs, output: &Output) -> Result<()> {
    let space = ProbeSpace::parse(&args.pattern)?;

    // Bare number on stdout so the command composes in scripts
    println!("{}", space.total_probes());

    output.verbose(&format!(
        "{} elements, {} dynamic; {} probes",
        space.elements().len(),
        space.dynamic_sizes().len(),
        thousands(space.total_probes())
    ));
    Ok(())
}
