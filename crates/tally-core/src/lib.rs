// File: crates/tally-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine (scales, layout, renderers) and its redraw lifecycle.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod instance;
pub mod layout;
mod observer;
pub mod paint;
pub mod record;
pub mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, ChartKind, RenderOptions};
pub use config::{ChartConfig, Orientation};
pub use dashboard::{Dashboard, DashboardData};
pub use error::{ChartError, ConfigError};
pub use frame::{FrameClock, FrameToken};
pub use geometry::Rect;
pub use host::Host;
pub use instance::{render_bar_chart, render_donut_chart, render_line_chart, ChartHandle, ChartSlot};
pub use layout::{layout, Layout};
pub use observer::ObserverId;
pub use paint::{Painter, SkiaPainter, TextRole};
pub use record::{DrawOp, Recorder};
pub use scale::{nice_ticks, NiceScale};
pub use series::{Datum, Series};
pub use surface::{prepare, SurfaceElement, SurfaceRef};
pub use text::{truncate_label, TextShaper};
pub use theme::Theme;
