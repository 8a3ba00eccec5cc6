// File: crates/chart-core/src/lib.rs
// Summary: Rank chart library entry point; exports the public API for building and rendering charts.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod error;

pub use chart::{Annotation, Chart, ChartSpec, PlotLayout, RankChartRenderer, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use theme::Theme;
pub use text::{FontResource, TextPainter};
pub use error::RenderError;
