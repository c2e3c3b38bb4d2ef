// File: crates/job-data/tests/jobs.rs
// Purpose: Loading the top-paying jobs result set and aggregating by title.

use job_data::{mean_salary_by_title, read_top_paying_jobs, DataError, TopPayingJob};

const TOP_JOBS: &str = "\
job_id,job_title,job_location,job_schedule_type,avg_yearly_salary,job_posted_date,company_name
226942,Data Analyst,Anywhere,Full-time,650000.0,2023-02-20 15:13:33,Mantys
547382,Director of Analytics,Anywhere,Full-time,336500.0,2023-08-23 12:04:42,Meta
552322,Associate Director- Data Insights,Anywhere,Full-time,255829.5,2023-06-18 16:03:12,AT&T
99305,Data Analyst,Anywhere,Full-time,232423.0,2023-12-05 20:00:40,Pinterest Job Advertisements
";

#[test]
fn loads_typed_rows_ignoring_extra_columns() {
    let jobs = read_top_paying_jobs(TOP_JOBS.as_bytes(), "top_jobs.csv").expect("load");
    assert_eq!(jobs.len(), 4);
    assert_eq!(
        jobs[2],
        TopPayingJob {
            job_id: Some("552322".into()),
            job_title: "Associate Director- Data Insights".into(),
            avg_yearly_salary: Some(255_829.5),
            company_name: Some("AT&T".into()),
        }
    );
}

#[test]
fn repeated_titles_average_in_first_seen_order() {
    let jobs = read_top_paying_jobs(TOP_JOBS.as_bytes(), "top_jobs.csv").unwrap();
    let by_title = mean_salary_by_title(&jobs);
    let titles: Vec<&str> = by_title.iter().map(|t| t.job_title.as_str()).collect();
    assert_eq!(titles, vec!["Data Analyst", "Director of Analytics", "Associate Director- Data Insights"]);
    assert_eq!(by_title[0].postings, 2);
    assert!((by_title[0].avg_yearly_salary - 441_211.5).abs() < 1e-6);
    assert_eq!(by_title[1].avg_yearly_salary, 336_500.0);
}

#[test]
fn empty_salary_is_missing_and_skipped() {
    let csv = "job_title,avg_yearly_salary\nA,100\nB,\nC,300\n";
    let jobs = read_top_paying_jobs(csv.as_bytes(), "mem").unwrap();
    assert_eq!(jobs[1].avg_yearly_salary, None);
    assert_eq!(jobs[1].company_name, None);
    let by_title = mean_salary_by_title(&jobs);
    assert_eq!(by_title.len(), 2);
    assert_eq!(by_title[1].job_title, "C");
}

#[test]
fn missing_salary_column_is_reported() {
    let csv = "job_id,job_title\n1,Data Analyst\n";
    let err = read_top_paying_jobs(csv.as_bytes(), "jobs.csv").unwrap_err();
    assert_eq!(err.missing_column(), Some("avg_yearly_salary"));
    assert_eq!(err.to_string(), "jobs.csv: missing required column `avg_yearly_salary`");
}

#[test]
fn non_numeric_salary_names_the_row() {
    let csv = "job_title,avg_yearly_salary\nA,100\nB,lots\n";
    match read_top_paying_jobs(csv.as_bytes(), "jobs.csv").unwrap_err() {
        DataError::Row { row, .. } => assert_eq!(row, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_fails_to_open() {
    let err = job_data::load_top_paying_jobs(std::path::Path::new("target/does/not/exist.csv")).unwrap_err();
    assert!(matches!(err, DataError::Open { .. }), "{err}");
}

#[test]
fn padded_headers_and_cells_are_trimmed() {
    let csv = " job_title , avg_yearly_salary \n  Data Analyst  ,  184000.5 \n";
    let jobs = read_top_paying_jobs(csv.as_bytes(), "padded.csv").expect("columns found after trimming");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_title, "Data Analyst");
    assert_eq!(jobs[0].avg_yearly_salary, Some(184_000.5));
}
