// File: crates/chart-core/src/scale.rs
// Summary: Value (linear) and category (band) scale transforms.

/// Data value on the value axis (e.g., salary, frequency).
pub type Value = f64;

/// Linear map from `[vmin, vmax]` to `[start_px, end_px]`.
/// `end_px < start_px` is allowed, which is how a vertical value axis grows upward.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let extent = self.end_px - self.start_px;
        if extent.abs() < f32::EPSILON { return self.vmin; }
        self.vmin + ((px - self.start_px) / extent) as f64 * (self.vmax - self.vmin)
    }
}

/// Evenly divides `[start_px, end_px]` into `count` bands; each band holds one
/// bar occupying `1 - padding` of it, centered.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub start_px: f32,
    pub end_px: f32,
    pub count: usize,
    pub padding: f32,
}

impl BandScale {
    /// Bars fill 80% of their band.
    pub const DEFAULT_PADDING: f32 = 0.2;

    pub fn new(start_px: f32, end_px: f32, count: usize) -> Self {
        Self { start_px, end_px, count, padding: Self::DEFAULT_PADDING }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding.clamp(0.0, 0.95);
        self
    }

    /// Signed band step; negative when the scale runs right-to-left or bottom-to-top.
    #[inline]
    pub fn step(&self) -> f32 {
        (self.end_px - self.start_px) / self.count.max(1) as f32
    }

    /// Width of a single bar (always positive).
    #[inline]
    pub fn bandwidth(&self) -> f32 {
        self.step().abs() * (1.0 - self.padding)
    }

    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        self.start_px + self.step() * (index as f32 + 0.5)
    }

    /// Pixel extent `(lo, hi)` of the bar at `index`, with `lo <= hi`.
    pub fn bar_extent(&self, index: usize) -> (f32, f32) {
        let c = self.center(index);
        let half = self.bandwidth() * 0.5;
        (c - half, c + half)
    }

    /// Band index under pixel `px`, if any.
    pub fn index_at(&self, px: f32) -> Option<usize> {
        let step = self.step();
        if step.abs() < f32::EPSILON { return None; }
        let k = ((px - self.start_px) / step).floor();
        if k < 0.0 || k as usize >= self.count { None } else { Some(k as usize) }
    }
}
