// File: crates/chart-core/tests/theme.rs
// Purpose: Theme presets and lookup fallback.

use chart_core::theme::{self, Theme};

#[test]
fn presets_have_unique_names() {
    let names: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
    let mut dedup = names.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(names.len(), dedup.len());
}

#[test]
fn find_is_case_insensitive_and_falls_back_to_light() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("solarized-light").name, "solarized-light");
    assert_eq!(theme::find("no-such-theme").name, Theme::light().name);
    assert_eq!(Theme::default().name, "light");
}
