// File: crates/chart-core/tests/ticks.rs
// Purpose: Tick generation, number formatting and scale transforms.

use chart_core::grid::{linspace, nice_step, nice_ticks};
use chart_core::scale::{BandScale, LinearScale};
use chart_core::TickFormat;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * b.abs().max(1.0)
}

#[test]
fn linspace_includes_ends() {
    let v = linspace(0.0, 10.0, 6);
    assert_eq!(v.len(), 6);
    assert!(approx(v[0], 0.0) && approx(v[5], 10.0) && approx(v[1], 2.0));
}

#[test]
fn nice_steps() {
    assert!(approx(nice_step(30_000.0), 50_000.0));
    assert!(approx(nice_step(1.0), 1.0));
    assert!(approx(nice_step(1.7), 2.0));
    assert!(approx(nice_step(0.22), 0.25));
    assert!(approx(nice_step(7.0), 10.0));
    assert_eq!(nice_step(0.0), 1.0);
}

#[test]
fn salary_ticks() {
    let ticks = nice_ticks(0.0, 210_000.0, 8);
    let want = [0.0, 50_000.0, 100_000.0, 150_000.0, 200_000.0];
    assert_eq!(ticks.len(), want.len());
    for (g, w) in ticks.iter().zip(want) {
        assert!(approx(*g, w), "{g} != {w}");
    }
}

#[test]
fn ticks_stay_in_range_and_bounded() {
    for (lo, hi) in [(0.0, 1.0), (0.0, 8.4), (-5.0, 7.0), (0.0, 233_000.0)] {
        let ticks = nice_ticks(lo, hi, 8);
        assert!(ticks.len() >= 2 && ticks.len() <= 8, "{lo}..{hi}: {ticks:?}");
        assert!(ticks.iter().all(|&t| t >= lo - 1e-9 && t <= hi + 1e-9));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }
    assert_eq!(nice_ticks(3.0, 3.0, 8), vec![3.0]);
    assert!(nice_ticks(f64::NAN, 1.0, 8).is_empty());
}

#[test]
fn tick_formats() {
    assert_eq!(TickFormat::Plain.format(150_000.0), "150000");
    assert_eq!(TickFormat::Plain.format(0.5), "0.5");
    assert_eq!(TickFormat::Plain.format(0.0), "0");
    assert_eq!(TickFormat::Grouped.format(1_234_567.0), "1,234,567");
    assert_eq!(TickFormat::Grouped.format(-2_500.5), "-2,500.5");
    assert_eq!(TickFormat::Grouped.format(999.0), "999");
}

#[test]
fn linear_scale_inverts_for_vertical_axes() {
    let s = LinearScale::new(500.0, 100.0, 0.0, 10.0);
    assert_eq!(s.to_px(0.0), 500.0);
    assert_eq!(s.to_px(10.0), 100.0);
    assert!(approx(s.from_px(300.0), 5.0));
}

#[test]
fn band_scale_layout() {
    let b = BandScale::new(0.0, 100.0, 4);
    assert_eq!(b.step(), 25.0);
    assert_eq!(b.center(0), 12.5);
    assert!((b.bandwidth() - 20.0).abs() < 1e-4);
    let (lo, hi) = b.bar_extent(1);
    assert!((lo - 27.5).abs() < 1e-4 && (hi - 47.5).abs() < 1e-4);
    assert_eq!(b.index_at(60.0), Some(2));
    assert_eq!(b.index_at(100.5), None);
    assert_eq!(b.index_at(-1.0), None);

    let full = BandScale::new(0.0, 100.0, 4).with_padding(0.0);
    assert_eq!(full.bandwidth(), 25.0);
}
