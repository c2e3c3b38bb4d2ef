// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for bar chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod palette;
pub mod text;
pub mod layout;

pub use chart::{Chart, PlotFrame, RenderOptions};
pub use series::{Bar, BarSeries, Orientation, SeriesError};
pub use axis::{Axis, TickAnchor, TickFormat};
pub use theme::Theme;
pub use palette::Palette;
pub use text::{ApproxMeasure, TextMeasure, TextShaper};
pub use skia_safe::Color;
