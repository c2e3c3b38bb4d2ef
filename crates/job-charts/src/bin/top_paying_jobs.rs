// File: crates/job-charts/src/bin/top_paying_jobs.rs
// Summary: Renders the top-paying jobs salary chart to assets/1_top_paying_jobs_histogram.png.

use anyhow::Result;
use job_charts::{cli, render_options, run_top_paying_jobs, ChartJob};

fn main() -> Result<()> {
    cli::init_logging();
    let job = cli::job_from_args(ChartJob::top_paying_jobs(), std::env::args().skip(1))?;
    log::info!("Using input file: {}", job.input.display());
    run_top_paying_jobs(&job, &render_options())?;
    Ok(())
}
