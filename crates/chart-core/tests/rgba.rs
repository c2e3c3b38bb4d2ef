// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and bar/background pixels.

use chart_core::{BarSeries, Chart, Color, Orientation, RenderOptions, Theme};

fn pixel(px: &[u8], stride: usize, x: f32, y: f32) -> (u8, u8, u8, u8) {
    let i = y as usize * stride + x as usize * 4;
    (px[i], px[i + 1], px[i + 2], px[i + 3])
}

fn no_labels() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn render_rgba8_buffer() {
    let series = BarSeries::try_new(Orientation::Horizontal, ["only"], [10.0])
        .unwrap()
        .with_colors(vec![Color::from_argb(255, 200, 10, 20)])
        .unwrap();
    let mut chart = Chart::new(series);
    chart.autoscale_axes(0.0);

    let opts = no_labels();
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background in the top-left corner
    assert_eq!(pixel(&px, stride, 1.0, 1.0), (255, 255, 255, 255));

    // Bar fills the middle of the plot
    let frame = chart.plot_frame(&opts);
    let r = frame.bar_rect(0, 10.0);
    assert_eq!(pixel(&px, stride, r.center_x(), r.center_y()), (200, 10, 20, 255));
}

#[test]
fn vertical_bars_keep_their_colors_and_order() {
    let colors = vec![
        Color::from_argb(255, 255, 0, 0),
        Color::from_argb(255, 0, 255, 0),
        Color::from_argb(255, 0, 0, 255),
    ];
    let series = BarSeries::try_new(Orientation::Vertical, ["a", "b", "c"], [1.0, 2.0, 3.0])
        .unwrap()
        .with_colors(colors)
        .unwrap();
    let mut chart = Chart::new(series);
    chart.autoscale_axes(0.0);

    let opts = no_labels();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).unwrap();
    let frame = chart.plot_frame(&opts);

    let expected = [(255, 0, 0, 255), (0, 255, 0, 255), (0, 0, 255, 255)];
    let mut last_x = f32::NEG_INFINITY;
    for (i, want) in expected.iter().enumerate() {
        let r = frame.bar_rect(i, (i + 1) as f64);
        assert!(r.center_x() > last_x, "bars run left to right");
        last_x = r.center_x();
        assert_eq!(pixel(&px, stride, r.center_x(), r.center_y()), *want);
    }

    // Taller value → taller bar
    let h0 = frame.bar_rect(0, 1.0).height();
    let h2 = frame.bar_rect(2, 3.0).height();
    assert!((h2 - 3.0 * h0).abs() < 1.0);
}

#[test]
fn horizontal_first_category_is_on_top() {
    let series = BarSeries::try_new(Orientation::Horizontal, ["first", "second"], [5.0, 5.0]).unwrap();
    let mut chart = Chart::new(series);
    chart.autoscale_axes(0.0);
    let frame = chart.plot_frame(&no_labels());
    assert!(frame.bar_rect(0, 5.0).center_y() < frame.bar_rect(1, 5.0).center_y());
}

#[test]
fn uncolored_bars_use_theme_fill() {
    let series = BarSeries::try_new(Orientation::Vertical, ["x"], [1.0]).unwrap();
    let mut chart = Chart::new(series);
    chart.autoscale_axes(0.0);

    let mut opts = no_labels();
    opts.theme = Theme::dark();
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).unwrap();
    let r = chart.plot_frame(&opts).bar_rect(0, 1.0);
    let fill = opts.theme.bar;
    assert_eq!(
        pixel(&px, stride, r.center_x(), r.center_y()),
        (fill.r(), fill.g(), fill.b(), 255)
    );
    let bg = opts.theme.background;
    assert_eq!(pixel(&px, stride, 1.0, 1.0), (bg.r(), bg.g(), bg.b(), 255));
}
