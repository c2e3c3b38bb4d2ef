// File: crates/job-charts/src/config.rs
// Summary: Fixed input/output locations, titles and render settings for each chart.

use std::path::PathBuf;

use chart_core::{RenderOptions, Theme};

/// Directory holding the exported query result sets.
pub const INPUT_DIR: &str = "result_set_CSV_files";
/// Directory the charts are written to.
pub const OUTPUT_DIR: &str = "assets";

#[derive(Clone, Debug, PartialEq)]
pub struct ChartJob {
    pub name: &'static str,
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl ChartJob {
    pub fn top_paying_jobs() -> Self {
        Self {
            name: "top-paying-jobs",
            input: PathBuf::from(INPUT_DIR).join("1_top_paying_jobs.csv"),
            output: PathBuf::from(OUTPUT_DIR).join("1_top_paying_jobs_histogram.png"),
            title: "Top 10 Paying Non-Senior-Level Jobs",
            x_label: "Yearly Salary ($USD)",
            y_label: "Job Title",
        }
    }

    pub fn skill_frequency() -> Self {
        Self {
            name: "skill-frequency",
            input: PathBuf::from(INPUT_DIR).join("2_top_paying_job_skills.csv"),
            output: PathBuf::from(OUTPUT_DIR).join("2_skill_frequency_histogram.png"),
            title: "Frequency of Skills in the Top 10 Paying Job Listings",
            x_label: "Skill",
            y_label: "Frequency",
        }
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// 12x6in figure at 100 dpi on a white background, margins fitted to labels.
pub fn render_options() -> RenderOptions {
    RenderOptions {
        width: 1200,
        height: 600,
        theme: Theme::light(),
        tight_layout: true,
        ..RenderOptions::default()
    }
}
