// File: crates/chart-core/src/error.rs
// Summary: Errors raised while loading fonts or rendering a chart.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read font file '{path}': {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font data from {origin} is not a usable typeface")]
    FontLoad { origin: String },

    #[error("chart has {labels} x labels but {values} y values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("failed to write PNG to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
