// File: crates/job-charts/src/cli.rs
// Summary: Shared binary plumbing: logger setup and optional input-path override.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::config::ChartJob;

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Apply an optional positional input path to `job`. More than one
/// argument is an error.
pub fn job_from_args(job: ChartJob, mut args: impl Iterator<Item = String>) -> Result<ChartJob> {
    let first = args.next();
    let extra: Vec<String> = args.collect();
    if !extra.is_empty() {
        bail!("{}: expected at most one input path, got extra arguments {:?}", job.name, extra);
    }
    match first {
        Some(raw) => {
            let input = resolve_path(&raw)?;
            Ok(job.with_input(input))
        }
        None => Ok(job),
    }
}

fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    bail!("file not found: {}", p.display());
}
