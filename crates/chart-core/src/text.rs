// File: crates/chart-core/src/text.rs
// Summary: Text measuring and rendering using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::axis::TickAnchor;

/// Text metrics needed by layout. Implemented by the real shaper and by a
/// font-free approximation for headless runs.
pub trait TextMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32;
    fn line_height(&self, size: f32) -> f32 { size * 1.2 }
}

/// Average-glyph estimate: no fonts required.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMeasure;

impl TextMeasure for ApproxMeasure {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.6
    }
}

/// Axis-aligned `(width, height)` of a `w` x `h` box rotated by `degrees`.
pub fn rotated_extent(w: f32, h: f32, degrees: f32) -> (f32, f32) {
    let r = degrees.to_radians();
    let (s, c) = (r.sin().abs(), r.cos().abs());
    (w * c + h * s, w * s + h * c)
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Draw horizontally centered on `cx`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, top: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (cx - p.longest_line() * 0.5, top));
    }

    /// Draw with the right edge of the text box at `right`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, top: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (right - p.longest_line(), top));
    }

    /// Draw rotated counter-clockwise by `degrees` about `(x, y)`, where
    /// `(x, y)` is the top edge of the text at the anchor position.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        degrees: f32,
        anchor: TickAnchor,
        size: f32,
        color: skia::Color,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let dx = match anchor {
            TickAnchor::Center => -w * 0.5,
            TickAnchor::Right => -w,
        };
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        p.paint(canvas, (dx, 0.0));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextMeasure for TextShaper {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        self.measure(text, size).0
    }

    fn line_height(&self, size: f32) -> f32 {
        self.measure("Mg", size).1
    }
}
