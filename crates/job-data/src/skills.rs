// File: crates/job-data/src/skills.rs
// Summary: Skill rows, alias normalization and value counts.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::DataError;
use crate::table::{empty_string_as_none, load_records, read_records};

pub const REQUIRED_SKILL: &str = "required_skill";

/// How many skills the frequency chart keeps.
pub const TOP_SKILLS: usize = 15;

/// Exact-value aliases folded into one skill before counting.
const SKILL_ALIASES: &[(&str, &str)] = &[("react.js", "react")];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_id: Option<String>,
    /// Empty cells load as `None`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub required_skill: Option<String>,
}

pub fn read_skill_rows<R: Read>(reader: R, origin: &str) -> Result<Vec<SkillRow>, DataError> {
    read_records(reader, origin, &[REQUIRED_SKILL])
}

pub fn load_skill_rows(path: &Path) -> Result<Vec<SkillRow>, DataError> {
    load_records(path, &[REQUIRED_SKILL])
}

/// Canonical name for `skill`. Only whole values are replaced; `react.js`
/// becomes `react` but `react.jsx` is left alone.
pub fn normalize_skill(skill: &str) -> &str {
    SKILL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == skill)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(skill)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFrequency {
    pub skill: String,
    pub frequency: usize,
}

/// Count normalized skills, most frequent first. Equal counts keep the
/// order in which the skills first appear.
pub fn skill_frequencies(rows: &[SkillRow]) -> Vec<SkillFrequency> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SkillFrequency> = Vec::new();
    for skill in rows.iter().filter_map(|r| r.required_skill.as_deref()) {
        let skill = normalize_skill(skill);
        match index.get(skill) {
            Some(&i) => counts[i].frequency += 1,
            None => {
                index.insert(skill, counts.len());
                counts.push(SkillFrequency { skill: skill.to_string(), frequency: 1 });
            }
        }
    }
    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts
}

/// The `n` most frequent skills, ties broken by first appearance.
pub fn top_skills(frequencies: &[SkillFrequency], n: usize) -> Vec<SkillFrequency> {
    let mut ranked = frequencies.to_vec();
    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    ranked.truncate(n);
    ranked
}
