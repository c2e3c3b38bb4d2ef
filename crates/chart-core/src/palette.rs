// File: crates/chart-core/src/palette.rs
// Summary: Sequential/diverging colormaps for coloring bars by value or category.

use skia_safe as skia;

use crate::geometry::clamp;

/// ColorBrewer "Spectral" anchors, low → high.
const SPECTRAL: [(u8, u8, u8); 11] = [
    (0x9e, 0x01, 0x42),
    (0xd5, 0x3e, 0x4f),
    (0xf4, 0x6d, 0x43),
    (0xfd, 0xae, 0x61),
    (0xfe, 0xe0, 0x8b),
    (0xff, 0xff, 0xbf),
    (0xe6, 0xf5, 0x98),
    (0xab, 0xdd, 0xa4),
    (0x66, 0xc2, 0xa5),
    (0x32, 0x88, 0xbd),
    (0x5e, 0x4f, 0xa2),
];

/// Piecewise-linear colormap over evenly spaced anchors.
#[derive(Clone, Debug)]
pub struct Palette {
    pub name: &'static str,
    stops: Vec<(u8, u8, u8)>,
}

impl Palette {
    pub fn spectral() -> Self {
        Self { name: "spectral", stops: SPECTRAL.to_vec() }
    }

    pub fn spectral_r() -> Self {
        let mut stops = SPECTRAL.to_vec();
        stops.reverse();
        Self { name: "spectral_r", stops }
    }

    /// Color at position `t` in `[0, 1]`; out-of-range values clamp.
    pub fn sample(&self, t: f64) -> skia::Color {
        let t = if t.is_finite() { clamp(t, 0.0, 1.0) } else { 0.5 };
        let last = self.stops.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last.saturating_sub(1));
        let f = pos - i as f64;
        let (r0, g0, b0) = self.stops[i];
        let (r1, g1, b1) = self.stops[(i + 1).min(last)];
        let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * f).round() as u8 };
        skia::Color::from_argb(255, mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }

    /// `n` colors sampled at `(i + 1) / (n + 1)`, skipping the extreme ends.
    pub fn discrete(&self, n: usize) -> Vec<skia::Color> {
        (0..n).map(|i| self.sample((i + 1) as f64 / (n + 1) as f64)).collect()
    }

    /// One color per value, normalized over the values' min..max.
    /// Non-finite values and a zero span map to the middle of the colormap.
    pub fn for_values(&self, values: &[f64]) -> Vec<skia::Color> {
        let (lo, hi) = values
            .iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = hi - lo;
        values
            .iter()
            .map(|&v| {
                if !span.is_finite() || span <= 0.0 || !v.is_finite() {
                    self.sample(0.5)
                } else {
                    self.sample((v - lo) / span)
                }
            })
            .collect()
    }
}

/// Return a list of built-in palettes.
pub fn presets() -> Vec<Palette> {
    vec![Palette::spectral(), Palette::spectral_r()]
}

/// Find a palette by name (case-insensitive).
pub fn find(name: &str) -> Option<Palette> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
