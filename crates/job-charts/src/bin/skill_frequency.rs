// File: crates/job-charts/src/bin/skill_frequency.rs
// Summary: Renders the skill frequency chart to assets/2_skill_frequency_histogram.png.

use anyhow::Result;
use job_charts::{cli, render_options, run_skill_frequency, ChartJob};

fn main() -> Result<()> {
    cli::init_logging();
    let job = cli::job_from_args(ChartJob::skill_frequency(), std::env::args().skip(1))?;
    log::info!("Using input file: {}", job.input.display());
    run_skill_frequency(&job, &render_options())?;
    Ok(())
}
