// File: crates/job-charts/src/lib.rs
// Summary: Chart definitions for the job-market result sets and the load → plot → save runners.

pub mod config;
pub mod charts;
pub mod cli;

pub use config::{render_options, ChartJob};
pub use charts::{run_skill_frequency, run_top_paying_jobs, skill_frequency_chart, top_paying_jobs_chart};
