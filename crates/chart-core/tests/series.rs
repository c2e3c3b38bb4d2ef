// File: crates/chart-core/tests/series.rs
// Purpose: Bar series construction invariants and coloring.

use chart_core::{BarSeries, Color, Orientation, Palette, SeriesError};

#[test]
fn rejects_length_mismatch() {
    let err = BarSeries::try_new(Orientation::Vertical, ["a", "b"], [1.0]).unwrap_err();
    assert_eq!(err, SeriesError::LengthMismatch { labels: 2, values: 1 });
}

#[test]
fn rejects_non_finite() {
    let err = BarSeries::try_new(Orientation::Vertical, ["a", "b"], [1.0, f64::NAN]).unwrap_err();
    assert_eq!(err, SeriesError::NonFinite { label: "b".into() });
}

#[test]
fn color_count_must_match() {
    let s = BarSeries::try_new(Orientation::Vertical, ["a", "b"], [1.0, 2.0]).unwrap();
    let err = s.with_colors(vec![Color::from_argb(255, 0, 0, 0)]).unwrap_err();
    assert_eq!(err, SeriesError::ColorCount { colors: 1, bars: 2 });
}

#[test]
fn category_colors_follow_first_appearance() {
    let p = Palette::spectral();
    let s = BarSeries::try_new(Orientation::Vertical, ["x", "y", "x"], [1.0, 2.0, 3.0])
        .unwrap()
        .color_by_category(&p);
    let colors: Vec<Color> = s.bars.iter().map(|b| b.color.unwrap()).collect();
    let expected = p.discrete(2);
    assert_eq!(colors, vec![expected[0], expected[1], expected[0]]);
}

#[test]
fn value_colors_span_palette() {
    let p = Palette::spectral();
    let s = BarSeries::try_new(Orientation::Horizontal, ["lo", "hi"], [10.0, 20.0])
        .unwrap()
        .color_by_value(&p);
    assert_eq!(s.bars[0].color, Some(p.sample(0.0)));
    assert_eq!(s.bars[1].color, Some(p.sample(1.0)));
}

#[test]
fn range_and_accessors() {
    let mut s = BarSeries::new(Orientation::Vertical);
    assert!(s.is_empty());
    assert_eq!(s.value_range(), None);
    s.push("a", 4.0);
    s.push("b", -1.0);
    assert_eq!(s.len(), 2);
    assert_eq!(s.value_range(), Some((-1.0, 4.0)));
    assert_eq!(s.labels().collect::<Vec<_>>(), vec!["a", "b"]);
}
