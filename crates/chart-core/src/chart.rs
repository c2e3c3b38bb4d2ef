// File: crates/chart-core/src/chart.rs
// Summary: Bar chart struct and headless rendering pipeline (Skia CPU raster → RGBA → PNG).

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use skia_safe as skia;

use crate::axis::{Axis, TickAnchor};
use crate::geometry::RectI32;
use crate::grid::nice_ticks;
use crate::layout::{tight_insets, PAD, TICK_LEN};
use crate::scale::{BandScale, LinearScale};
use crate::series::{BarSeries, Orientation};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins used when `tight_layout` is off (or labels are not drawn).
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (ticks, axis labels, title). Off gives font-independent output.
    pub draw_labels: bool,
    /// Derive margins from measured label sizes.
    pub tight_layout: bool,
    /// Draw value-axis grid lines behind the bars.
    pub grid: bool,
    pub max_ticks: usize,
    pub tick_font_size: f32,
    pub label_font_size: f32,
    pub title_font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            tight_layout: true,
            grid: false,
            max_ticks: 8,
            tick_font_size: 12.0,
            label_font_size: 14.0,
            title_font_size: 16.0,
        }
    }
}

/// Pixel geometry of one render: plot rect plus value and category scales.
#[derive(Clone, Copy, Debug)]
pub struct PlotFrame {
    pub insets: Insets,
    pub plot: RectI32,
    pub orientation: Orientation,
    pub values: LinearScale,
    pub bands: BandScale,
}

impl PlotFrame {
    /// Rectangle of bar `index` holding `value`, measured from zero (or
    /// from the nearest axis bound when zero is out of range).
    pub fn bar_rect(&self, index: usize, value: f64) -> skia::Rect {
        let origin = 0.0f64.clamp(self.values.vmin.min(self.values.vmax), self.values.vmax.max(self.values.vmin));
        let (v0, v1) = (self.values.to_px(origin), self.values.to_px(value));
        let (b0, b1) = self.bands.bar_extent(index);
        match self.orientation {
            Orientation::Horizontal => skia::Rect::from_ltrb(v0.min(v1), b0, v0.max(v1), b1),
            Orientation::Vertical => skia::Rect::from_ltrb(b0, v0.min(v1), b1, v0.max(v1)),
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: BarSeries,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(series: BarSeries) -> Self {
        Self {
            title: None,
            series,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn value_axis(&self) -> &Axis {
        match self.series.orientation {
            Orientation::Horizontal => &self.x_axis,
            Orientation::Vertical => &self.y_axis,
        }
    }

    pub fn value_axis_mut(&mut self) -> &mut Axis {
        match self.series.orientation {
            Orientation::Horizontal => &mut self.x_axis,
            Orientation::Vertical => &mut self.y_axis,
        }
    }

    pub fn category_axis_mut(&mut self) -> &mut Axis {
        match self.series.orientation {
            Orientation::Horizontal => &mut self.y_axis,
            Orientation::Vertical => &mut self.x_axis,
        }
    }

    /// Fit the value axis to the data, always including zero. `margin` is a
    /// fraction of the data span added on the side(s) away from zero.
    /// The category axis spans `0..len`.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let (lo, hi) = self.series.value_range().unwrap_or((0.0, 1.0));
        let lo = lo.min(0.0);
        let mut hi = hi.max(0.0);
        if hi - lo < 1e-12 { hi = lo + 1.0; }
        let m = (hi - lo) * margin.max(0.0);
        let n = self.series.len();

        let value = self.value_axis_mut();
        value.min = if lo < 0.0 { lo - m } else { lo };
        value.max = if hi > 0.0 { hi + m } else { hi };

        let category = self.category_axis_mut();
        category.min = 0.0;
        category.max = n as f64;
    }

    /// Value-axis tick positions within the current axis range.
    pub fn value_ticks(&self, max_ticks: usize) -> Vec<f64> {
        let axis = self.value_axis();
        nice_ticks(axis.min, axis.max, max_ticks)
    }

    fn resolve_insets(&self, opts: &RenderOptions, shaper: Option<&TextShaper>) -> Insets {
        match shaper {
            Some(s) if opts.tight_layout => tight_insets(self, opts, s),
            _ => opts.insets.fit_within(opts.width, opts.height, crate::layout::MIN_PLOT),
        }
    }

    fn frame_with(&self, opts: &RenderOptions, shaper: Option<&TextShaper>) -> PlotFrame {
        let insets = self.resolve_insets(opts, shaper);
        let plot = RectI32::plot_area(opts.width, opts.height, &insets);
        let axis = self.value_axis();
        let n = self.series.len();
        let (values, bands) = match self.series.orientation {
            Orientation::Horizontal => (
                LinearScale::new(plot.left as f32, plot.right as f32, axis.min, axis.max),
                BandScale::new(plot.top as f32, plot.bottom as f32, n),
            ),
            Orientation::Vertical => (
                LinearScale::new(plot.bottom as f32, plot.top as f32, axis.min, axis.max),
                BandScale::new(plot.left as f32, plot.right as f32, n),
            ),
        };
        PlotFrame { insets, plot, orientation: self.series.orientation, values, bands }
    }

    /// Pixel geometry this chart would be rendered with.
    pub fn plot_frame(&self, opts: &RenderOptions) -> PlotFrame {
        let shaper = (opts.draw_labels && opts.tight_layout).then(TextShaper::new);
        self.frame_with(opts, shaper.as_ref())
    }

    /// Render to a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;

        let shaper = opts.draw_labels.then(TextShaper::new);
        let frame = self.frame_with(opts, shaper.as_ref());
        let ticks = self.value_ticks(opts.max_ticks);

        {
            let canvas = surface.canvas();
            canvas.clear(opts.theme.background);
            if opts.grid {
                draw_grid(canvas, &frame, &ticks, &opts.theme);
            }
            draw_bars(canvas, &frame, &self.series, &opts.theme);
            draw_axes(canvas, &frame, &ticks, &opts.theme);
            if let Some(shaper) = &shaper {
                draw_labels(canvas, shaper, self, &frame, &ticks, opts);
            }
        }

        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            bail!("failed to read back surface pixels");
        }
        log::debug!("rendered {}x{} chart with {} bars", w, h, self.series.len());
        Ok((pixels, w, h, stride))
    }

    /// Render to PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {}x{}", w, h))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, frame: &PlotFrame, ticks: &[f64], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let p = &frame.plot;
    for &v in ticks {
        let px = frame.values.to_px(v);
        match frame.orientation {
            Orientation::Horizontal => {
                canvas.draw_line((px, p.top as f32), (px, p.bottom as f32), &paint);
            }
            Orientation::Vertical => {
                canvas.draw_line((p.left as f32, px), (p.right as f32, px), &paint);
            }
        }
    }
}

fn draw_bars(canvas: &skia::Canvas, frame: &PlotFrame, series: &BarSeries, theme: &Theme) {
    let p = &frame.plot;
    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(p.left as f32, p.top as f32, p.right as f32, p.bottom as f32),
        None,
        None,
    );

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    for (i, bar) in series.bars.iter().enumerate() {
        fill.set_color(bar.color.unwrap_or(theme.bar));
        canvas.draw_rect(frame.bar_rect(i, bar.value), &fill);
    }
    canvas.restore();
}

fn draw_axes(canvas: &skia::Canvas, frame: &PlotFrame, ticks: &[f64], theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    let (l, t, r, b) = (
        frame.plot.left as f32,
        frame.plot.top as f32,
        frame.plot.right as f32,
        frame.plot.bottom as f32,
    );

    // X and Y axis lines
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut tick_paint = axis_paint.clone();
    tick_paint.set_color(theme.tick);

    let categories = (0..frame.bands.count).map(|i| frame.bands.center(i));
    match frame.orientation {
        Orientation::Horizontal => {
            for &v in ticks {
                let x = frame.values.to_px(v);
                canvas.draw_line((x, b), (x, b + TICK_LEN), &tick_paint);
            }
            for y in categories {
                canvas.draw_line((l - TICK_LEN, y), (l, y), &tick_paint);
            }
        }
        Orientation::Vertical => {
            for &v in ticks {
                let y = frame.values.to_px(v);
                canvas.draw_line((l - TICK_LEN, y), (l, y), &tick_paint);
            }
            for x in categories {
                canvas.draw_line((x, b), (x, b + TICK_LEN), &tick_paint);
            }
        }
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    chart: &Chart,
    frame: &PlotFrame,
    ticks: &[f64],
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let size = opts.tick_font_size;
    let (l, b) = (frame.plot.left as f32, frame.plot.bottom as f32);
    let value_fmt = chart.value_axis().tick_format;

    let x_tick = |text: &str, x: f32| {
        draw_x_tick_label(canvas, shaper, &chart.x_axis, text, x, b + TICK_LEN + PAD * 0.5, size, theme.tick);
    };
    let y_tick = |text: &str, y: f32| {
        draw_y_tick_label(canvas, shaper, &chart.y_axis, text, l - TICK_LEN - PAD * 0.5, y, size, theme.tick);
    };

    match frame.orientation {
        Orientation::Horizontal => {
            for &v in ticks {
                x_tick(&value_fmt.format(v), frame.values.to_px(v));
            }
            for (i, label) in chart.series.labels().enumerate() {
                y_tick(label, frame.bands.center(i));
            }
        }
        Orientation::Vertical => {
            for &v in ticks {
                y_tick(&value_fmt.format(v), frame.values.to_px(v));
            }
            for (i, label) in chart.series.labels().enumerate() {
                x_tick(label, frame.bands.center(i));
            }
        }
    }

    let (cx, cy) = frame.plot.center();
    let label_size = opts.label_font_size;
    if !chart.x_axis.label.is_empty() {
        let (_, h) = shaper.measure(&chart.x_axis.label, label_size);
        let top = opts.height as f32 - PAD - h;
        shaper.draw_centered(canvas, &chart.x_axis.label, cx, top, label_size, theme.axis_label);
    }
    if !chart.y_axis.label.is_empty() {
        shaper.draw_rotated(canvas, &chart.y_axis.label, PAD, cy, 90.0, TickAnchor::Center, label_size, theme.axis_label);
    }
    if let Some(title) = chart.title.as_deref().filter(|t| !t.is_empty()) {
        shaper.draw_centered(canvas, title, cx, PAD, opts.title_font_size, theme.title);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_x_tick_label(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    axis: &Axis,
    text: &str,
    x: f32,
    top: f32,
    size: f32,
    color: skia::Color,
) {
    if axis.tick_rotation != 0.0 {
        shaper.draw_rotated(canvas, text, x, top, axis.tick_rotation, axis.tick_anchor, size, color);
        return;
    }
    match axis.tick_anchor {
        TickAnchor::Center => shaper.draw_centered(canvas, text, x, top, size, color),
        TickAnchor::Right => shaper.draw_right(canvas, text, x, top, size, color),
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_y_tick_label(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    axis: &Axis,
    text: &str,
    right: f32,
    cy: f32,
    size: f32,
    color: skia::Color,
) {
    let (_, h) = shaper.measure(text, size);
    if axis.tick_rotation != 0.0 {
        shaper.draw_rotated(canvas, text, right, cy - h * 0.5, axis.tick_rotation, TickAnchor::Right, size, color);
    } else {
        shaper.draw_right(canvas, text, right, cy - h * 0.5, size, color);
    }
}
