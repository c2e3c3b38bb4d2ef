// File: crates/job-charts/src/charts.rs
// Summary: Builds the salary and skill-frequency bar charts and runs load → plot → save.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chart_core::{Axis, BarSeries, Chart, Orientation, Palette, RenderOptions, TickAnchor};
use job_data::{SkillFrequency, TitleSalary, TOP_SKILLS};

use crate::config::ChartJob;

/// Fraction of the value span left free past the longest bar.
const VALUE_MARGIN: f64 = 0.05;

/// Horizontal bars of salary per title, first row on top, colored by salary.
pub fn top_paying_jobs_chart(job: &ChartJob, salaries: &[TitleSalary]) -> Result<Chart> {
    if salaries.is_empty() {
        bail!("{}: no job postings with a salary", job.input.display());
    }
    let series = BarSeries::try_new(
        Orientation::Horizontal,
        salaries.iter().map(|s| s.job_title.as_str()),
        salaries.iter().map(|s| s.avg_yearly_salary),
    )?
    .color_by_value(&Palette::spectral());

    let mut chart = Chart::new(series).with_title(job.title);
    chart.x_axis = Axis::new(job.x_label, 0.0, 1.0);
    chart.y_axis = Axis::new(job.y_label, 0.0, 1.0);
    chart.autoscale_axes(VALUE_MARGIN);
    Ok(chart)
}

/// Vertical bars of skill counts, most frequent first, one color per skill.
pub fn skill_frequency_chart(job: &ChartJob, top: &[SkillFrequency]) -> Result<Chart> {
    if top.is_empty() {
        bail!("{}: no skills to count", job.input.display());
    }
    let series = BarSeries::try_new(
        Orientation::Vertical,
        top.iter().map(|s| s.skill.as_str()),
        top.iter().map(|s| s.frequency as f64),
    )?
    .color_by_category(&Palette::spectral());

    let mut chart = Chart::new(series).with_title(job.title);
    chart.x_axis = Axis::new(job.x_label, 0.0, 1.0).with_tick_rotation(45.0, TickAnchor::Right);
    chart.y_axis = Axis::new(job.y_label, 0.0, 1.0);
    chart.autoscale_axes(VALUE_MARGIN);
    Ok(chart)
}

/// Load the top-paying jobs CSV, render, write the PNG. Returns the output path.
pub fn run_top_paying_jobs(job: &ChartJob, opts: &RenderOptions) -> Result<PathBuf> {
    let jobs = job_data::load_top_paying_jobs(&job.input)
        .with_context(|| format!("failed to load '{}'", job.input.display()))?;
    log::info!("Loaded {} postings from {}", jobs.len(), job.input.display());

    let salaries = job_data::mean_salary_by_title(&jobs);
    if salaries.len() < jobs.len() {
        log::info!("{} postings grouped into {} titles", jobs.len(), salaries.len());
    }

    let chart = top_paying_jobs_chart(job, &salaries)?;
    chart
        .render_to_png(opts, &job.output)
        .with_context(|| format!("failed to render '{}'", job.output.display()))?;
    log::info!("[{}] Wrote {}", job.name, job.output.display());
    Ok(job.output.clone())
}

/// Load the job skills CSV, count skills, render the top ones, write the PNG.
pub fn run_skill_frequency(job: &ChartJob, opts: &RenderOptions) -> Result<PathBuf> {
    let rows = job_data::load_skill_rows(&job.input)
        .with_context(|| format!("failed to load '{}'", job.input.display()))?;
    log::info!("Loaded {} skill rows from {}", rows.len(), job.input.display());

    let counts = job_data::skill_frequencies(&rows);
    let top = job_data::top_skills(&counts, TOP_SKILLS);
    log::info!("{} distinct skills, plotting top {}", counts.len(), top.len());

    let chart = skill_frequency_chart(job, &top)?;
    chart
        .render_to_png(opts, &job.output)
        .with_context(|| format!("failed to render '{}'", job.output.display()))?;
    log::info!("[{}] Wrote {}", job.name, job.output.display());
    Ok(job.output.clone())
}
