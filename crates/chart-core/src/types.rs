// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, paddings).

/// Default surface width in pixels (12in at 100 dpi).
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels (6in at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Shrink insets proportionally so they leave at least `min_plot` pixels
    /// of plot area in a `width` x `height` surface.
    pub fn fit_within(self, width: i32, height: i32, min_plot: u32) -> Self {
        let fit = |a: u32, b: u32, total: i32| -> (u32, u32) {
            let budget = (total.max(0) as u32).saturating_sub(min_plot);
            let sum = a + b;
            if sum <= budget || sum == 0 {
                return (a, b);
            }
            let ka = (a as u64 * budget as u64 / sum as u64) as u32;
            (ka, budget - ka)
        };
        let (left, right) = fit(self.left, self.right, width);
        let (top, bottom) = fit(self.top, self.bottom, height);
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 40, 56)
    }
}
