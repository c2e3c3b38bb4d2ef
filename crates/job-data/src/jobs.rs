// File: crates/job-data/src/jobs.rs
// Summary: Top-paying job postings and per-title salary aggregation.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::DataError;
use crate::table::{empty_string_as_none, load_records, read_records};

pub const JOB_TITLE: &str = "job_title";
pub const AVG_YEARLY_SALARY: &str = "avg_yearly_salary";

const REQUIRED: &[&str] = &[JOB_TITLE, AVG_YEARLY_SALARY];

/// One posting from the top-paying jobs result set. Columns other than
/// these are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopPayingJob {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_id: Option<String>,
    pub job_title: String,
    /// Empty cells load as `None`.
    pub avg_yearly_salary: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub company_name: Option<String>,
}

pub fn read_top_paying_jobs<R: Read>(reader: R, origin: &str) -> Result<Vec<TopPayingJob>, DataError> {
    read_records(reader, origin, REQUIRED)
}

pub fn load_top_paying_jobs(path: &Path) -> Result<Vec<TopPayingJob>, DataError> {
    load_records(path, REQUIRED)
}

/// Mean salary of one job title.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSalary {
    pub job_title: String,
    pub avg_yearly_salary: f64,
    /// Number of postings averaged.
    pub postings: usize,
}

/// Average salary per title, titles in order of first appearance.
/// Postings without a salary are skipped.
pub fn mean_salary_by_title(jobs: &[TopPayingJob]) -> Vec<TitleSalary> {
    let mut out: Vec<TitleSalary> = Vec::new();
    for job in jobs {
        let Some(salary) = job.avg_yearly_salary.filter(|s| s.is_finite()) else {
            log::warn!("skipping `{}`: no salary", job.job_title);
            continue;
        };
        match out.iter_mut().find(|t| t.job_title == job.job_title) {
            Some(t) => {
                // running mean
                t.postings += 1;
                t.avg_yearly_salary += (salary - t.avg_yearly_salary) / t.postings as f64;
            }
            None => out.push(TitleSalary {
                job_title: job.job_title.clone(),
                avg_yearly_salary: salary,
                postings: 1,
            }),
        }
    }
    out
}
