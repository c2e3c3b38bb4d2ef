// File: crates/chart-core/src/series.rs
// Summary: Bar series model: labeled values, orientation and per-bar colors.

use skia_safe as skia;
use thiserror::Error;

use crate::palette::Palette;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Categories on Y (first category at the top), values grow to the right.
    Horizontal,
    /// Categories on X (left to right), values grow upward.
    Vertical,
}

#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("{labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },
    #[error("value for `{label}` is not finite")]
    NonFinite { label: String },
    #[error("{colors} colors for {bars} bars")]
    ColorCount { colors: usize, bars: usize },
}

#[derive(Clone, Debug)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: Option<skia::Color>,
}

#[derive(Clone, Debug)]
pub struct BarSeries {
    pub orientation: Orientation,
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation, bars: Vec::new() }
    }

    /// Build a series from parallel label/value lists, rejecting mismatched
    /// lengths and NaN/infinite values.
    pub fn try_new<S: Into<String>>(
        orientation: Orientation,
        labels: impl IntoIterator<Item = S>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self, SeriesError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let values: Vec<f64> = values.into_iter().collect();
        if labels.len() != values.len() {
            return Err(SeriesError::LengthMismatch { labels: labels.len(), values: values.len() });
        }
        let mut bars = Vec::with_capacity(labels.len());
        for (label, value) in labels.into_iter().zip(values) {
            if !value.is_finite() {
                return Err(SeriesError::NonFinite { label });
            }
            bars.push(Bar { label, value, color: None });
        }
        Ok(Self { orientation, bars })
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.bars.push(Bar { label: label.into(), value, color: None });
    }

    pub fn len(&self) -> usize { self.bars.len() }

    pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bars.iter().map(|b| b.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars.iter().map(|b| b.value)
    }

    /// Assign explicit colors, one per bar.
    pub fn with_colors(mut self, colors: Vec<skia::Color>) -> Result<Self, SeriesError> {
        if colors.len() != self.bars.len() {
            return Err(SeriesError::ColorCount { colors: colors.len(), bars: self.bars.len() });
        }
        for (bar, c) in self.bars.iter_mut().zip(colors) {
            bar.color = Some(c);
        }
        Ok(self)
    }

    /// Color each bar by its value on a continuous colormap.
    pub fn color_by_value(mut self, palette: &Palette) -> Self {
        let values: Vec<f64> = self.values().collect();
        for (bar, c) in self.bars.iter_mut().zip(palette.for_values(&values)) {
            bar.color = Some(c);
        }
        self
    }

    /// Give each distinct label its own color from `palette`, in order of first appearance.
    pub fn color_by_category(mut self, palette: &Palette) -> Self {
        let mut distinct: Vec<&str> = Vec::new();
        for label in self.labels() {
            if !distinct.contains(&label) {
                distinct.push(label);
            }
        }
        let colors = palette.discrete(distinct.len());
        let lookup: Vec<(String, skia::Color)> = distinct
            .into_iter()
            .map(str::to_string)
            .zip(colors)
            .collect();
        for bar in &mut self.bars {
            bar.color = lookup.iter().find(|(l, _)| *l == bar.label).map(|(_, c)| *c);
        }
        self
    }

    /// Min and max over values, or `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.bars.is_empty() {
            return None;
        }
        Some(self.values().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
