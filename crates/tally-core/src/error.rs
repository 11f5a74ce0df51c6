// File: crates/tally-core/src/error.rs
// Summary: Error types for chart configuration, surface lookup and raster output.

use thiserror::Error;

/// Rejected chart configuration. Raised when a config is built, never while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tick count must be at least 1")]
    ZeroTickCount,
    #[error("maximum label count must be at least 1")]
    ZeroMaxLabels,
}

#[derive(Debug, Error)]
pub enum ChartError {
    /// The render call named a drawing surface the host does not know.
    #[error("drawing surface `{0}` not found")]
    SurfaceNotFound(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to allocate a {width}x{height} raster surface")]
    RasterSurface { width: i32, height: i32 },
    #[error("surface has not been drawn yet")]
    Blank,
    #[error("encode PNG failed")]
    Encode,
    #[error("reading surface pixels failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
