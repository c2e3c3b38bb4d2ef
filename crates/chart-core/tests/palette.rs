// File: crates/chart-core/tests/palette.rs
// Purpose: Spectral colormap sampling, discrete palettes and value normalization.

use chart_core::palette::{self, Palette};
use chart_core::Color;

fn rgb(c: Color) -> (u8, u8, u8) {
    (c.r(), c.g(), c.b())
}

#[test]
fn spectral_endpoints_and_midpoint() {
    let p = Palette::spectral();
    assert_eq!(rgb(p.sample(0.0)), (0x9e, 0x01, 0x42));
    assert_eq!(rgb(p.sample(0.5)), (0xff, 0xff, 0xbf));
    assert_eq!(rgb(p.sample(1.0)), (0x5e, 0x4f, 0xa2));
    // clamps outside [0, 1]
    assert_eq!(rgb(p.sample(-3.0)), rgb(p.sample(0.0)));
    assert_eq!(rgb(p.sample(7.0)), rgb(p.sample(1.0)));
}

#[test]
fn reversed_palette_mirrors() {
    let fwd = Palette::spectral();
    let rev = Palette::spectral_r();
    for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
        assert_eq!(rgb(rev.sample(t)), rgb(fwd.sample(1.0 - t)));
    }
}

#[test]
fn discrete_skips_extremes() {
    let p = Palette::spectral();
    let one = p.discrete(1);
    assert_eq!(one.len(), 1);
    assert_eq!(rgb(one[0]), rgb(p.sample(0.5)));

    let many = p.discrete(15);
    assert_eq!(many.len(), 15);
    assert_ne!(rgb(many[0]), rgb(p.sample(0.0)));
    assert_ne!(rgb(many[14]), rgb(p.sample(1.0)));
    assert!(p.discrete(0).is_empty());
}

#[test]
fn values_normalize_over_their_range() {
    let p = Palette::spectral();
    let colors = p.for_values(&[100.0, 300.0, 200.0]);
    assert_eq!(rgb(colors[0]), rgb(p.sample(0.0)));
    assert_eq!(rgb(colors[1]), rgb(p.sample(1.0)));
    assert_eq!(rgb(colors[2]), rgb(p.sample(0.5)));

    let flat = p.for_values(&[5.0, 5.0]);
    assert!(flat.iter().all(|&c| rgb(c) == rgb(p.sample(0.5))));
}

#[test]
fn lookup_by_name() {
    assert_eq!(palette::find("Spectral").map(|p| p.name), Some("spectral"));
    assert_eq!(palette::find("SPECTRAL_R").map(|p| p.name), Some("spectral_r"));
    assert!(palette::find("viridis").is_none());
}
