// File: crates/job-data/src/lib.rs
// Summary: Data layer entry point; loads result-set CSVs into typed rows and reshapes them for plotting.

pub mod error;
pub mod table;
pub mod jobs;
pub mod skills;

pub use error::DataError;
pub use jobs::{load_top_paying_jobs, mean_salary_by_title, read_top_paying_jobs, TitleSalary, TopPayingJob};
pub use skills::{
    load_skill_rows, normalize_skill, read_skill_rows, skill_frequencies, top_skills, SkillFrequency, SkillRow,
    TOP_SKILLS,
};
