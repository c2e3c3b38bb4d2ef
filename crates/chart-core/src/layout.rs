// File: crates/chart-core/src/layout.rs
// Summary: Margin computation so tick labels, axis labels and title fit the surface.

use crate::axis::{Axis, TickAnchor};
use crate::chart::{Chart, RenderOptions};
use crate::series::Orientation;
use crate::text::{rotated_extent, TextMeasure};
use crate::types::Insets;

/// Gap between stacked text elements, in pixels.
pub const PAD: f32 = 8.0;
/// Tick mark length, in pixels.
pub const TICK_LEN: f32 = 5.0;
/// Smallest plot extent kept when shrinking margins.
pub const MIN_PLOT: u32 = 40;

/// Largest axis-aligned extent of `labels` drawn with `axis`'s tick rotation.
fn tick_extent<'a>(
    labels: impl Iterator<Item = &'a str>,
    axis: &Axis,
    size: f32,
    m: &dyn TextMeasure,
) -> (f32, f32) {
    let h = m.line_height(size);
    labels.fold((0.0f32, 0.0f32), |(mw, mh), label| {
        let (w, hh) = rotated_extent(m.text_width(label, size), h, axis.tick_rotation);
        (mw.max(w), mh.max(hh))
    })
}

/// How far an X tick label reaches left of its tick.
fn left_reach(width: f32, axis: &Axis) -> f32 {
    let c = axis.tick_rotation.to_radians().cos().abs();
    match axis.tick_anchor {
        TickAnchor::Center => width * c * 0.5,
        TickAnchor::Right => width * c,
    }
}

/// Smallest left margin keeping every X tick label inside the surface.
/// `ticks` holds `(fraction along the plot width, label width)`; a tick at
/// fraction `k` sits at `left + k * (width - right - left)`.
fn left_for_x_ticks(ticks: &[(f32, f32)], axis: &Axis, width: f32, right: f32) -> f32 {
    ticks
        .iter()
        .filter(|(k, _)| (0.0..1.0).contains(k))
        .map(|&(k, w)| (PAD + left_reach(w, axis) - (width - right) * k) / (1.0 - k))
        .fold(0.0, f32::max)
}

fn label_height(text: &str, size: f32, m: &dyn TextMeasure) -> f32 {
    if text.is_empty() { 0.0 } else { m.line_height(size) + PAD }
}

/// Tight margins for `chart` rendered with `opts`.
pub fn tight_insets(chart: &Chart, opts: &RenderOptions, m: &dyn TextMeasure) -> Insets {
    let value_ticks = chart.value_ticks(opts.max_ticks);
    let value_labels: Vec<String> = value_ticks
        .iter()
        .map(|&v| chart.value_axis().tick_format.format(v))
        .collect();
    let category_labels = chart.series.labels();
    let n = chart.series.len().max(1) as f32;
    let tick_size = opts.tick_font_size;
    let x_tick_spots: Vec<(f32, f32)> = match chart.series.orientation {
        Orientation::Horizontal => {
            let axis = &chart.x_axis;
            let span = axis.max - axis.min;
            if span > 0.0 {
                value_ticks
                    .iter()
                    .zip(&value_labels)
                    .map(|(v, label)| (((v - axis.min) / span) as f32, m.text_width(label, tick_size)))
                    .collect()
            } else {
                Vec::new()
            }
        }
        Orientation::Vertical => chart
            .series
            .labels()
            .enumerate()
            .map(|(i, label)| ((i as f32 + 0.5) / n, m.text_width(label, tick_size)))
            .collect(),
    };

    let (x_ticks, y_ticks) = match chart.series.orientation {
        Orientation::Horizontal => (
            tick_extent(value_labels.iter().map(String::as_str), &chart.x_axis, opts.tick_font_size, m),
            tick_extent(category_labels, &chart.y_axis, opts.tick_font_size, m),
        ),
        Orientation::Vertical => (
            tick_extent(category_labels, &chart.x_axis, opts.tick_font_size, m),
            tick_extent(value_labels.iter().map(String::as_str), &chart.y_axis, opts.tick_font_size, m),
        ),
    };

    let axis_side = PAD
        + label_height(&chart.y_axis.label, opts.label_font_size, m)
        + y_ticks.0
        + TICK_LEN
        + PAD;
    let bottom = TICK_LEN
        + PAD
        + x_ticks.1
        + label_height(&chart.x_axis.label, opts.label_font_size, m)
        + PAD;
    let top = match &chart.title {
        Some(t) if !t.is_empty() => PAD + m.line_height(opts.title_font_size) + PAD,
        _ => PAD * 2.0,
    };
    // Centered X tick labels overhang the right edge by half their width.
    let right = if chart.x_axis.tick_rotation == 0.0 {
        (x_ticks.0 * 0.5 + PAD).max(PAD * 3.0)
    } else {
        PAD * 3.0
    };
    let left = axis_side.max(left_for_x_ticks(&x_tick_spots, &chart.x_axis, opts.width as f32, right.ceil()));

    Insets::new(left.ceil() as u32, right.ceil() as u32, top.ceil() as u32, bottom.ceil() as u32)
        .fit_within(opts.width, opts.height, MIN_PLOT)
}
