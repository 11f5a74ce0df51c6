// File: crates/tally-core/src/chart.rs
// Summary: Chart description (kind + series + config), the per-redraw draw pipeline, and headless PNG/RGBA export.

use std::fmt;

use crate::config::{ChartConfig, Orientation};
use crate::error::ChartError;
use crate::layout::layout_with;
use crate::paint::{Painter, SkiaPainter};
use crate::render;
use crate::scale::nice_ticks;
use crate::series::Series;
use crate::surface::{prepare, SurfaceElement};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    VerticalBar,
    HorizontalBar,
    Donut,
    Line,
}

impl ChartKind {
    /// Character budget for category / legend labels.
    pub fn label_budget(self) -> usize {
        match self {
            ChartKind::VerticalBar => 10,
            ChartKind::HorizontalBar => 22,
            ChartKind::Donut => 14,
            ChartKind::Line => 10,
        }
    }

    pub fn default_max_labels(self) -> usize {
        match self {
            ChartKind::VerticalBar => 8,
            ChartKind::Line => 6,
            // every row / legend entry is shown
            ChartKind::HorizontalBar | ChartKind::Donut => usize::MAX,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartKind::VerticalBar => "vertical-bar",
            ChartKind::HorizontalBar => "horizontal-bar",
            ChartKind::Donut => "donut",
            ChartKind::Line => "line",
        };
        f.write_str(s)
    }
}

pub struct RenderOptions {
    /// Logical width.
    pub width: f32,
    /// Logical height.
    pub height: f32,
    /// Device pixel ratio; clamped to [1, 3] when the surface is prepared.
    pub density: f64,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, density: 1.0, theme: Theme::light() }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub series: Series,
    pub config: ChartConfig,
}

impl Chart {
    /// Bar chart; the config's orientation picks columns or rows.
    pub fn bar(series: Series, config: ChartConfig) -> Self {
        let kind = match config.orientation() {
            Orientation::Vertical => ChartKind::VerticalBar,
            Orientation::Horizontal => ChartKind::HorizontalBar,
        };
        Self { kind, series, config }
    }

    pub fn donut(series: Series) -> Self {
        Self { kind: ChartKind::Donut, series, config: ChartConfig::default() }
    }

    pub fn line(series: Series, config: ChartConfig) -> Self {
        Self { kind: ChartKind::Line, series, config }
    }

    /// One full pass from data to marks at a logical size. Scale and layout are
    /// derived here every time; nothing carries over between calls.
    pub fn draw(&self, painter: &mut dyn Painter, width: f32, height: f32, theme: &Theme) {
        painter.clear(theme.background);
        let layout = layout_with(self.kind, width, height, self.series.len(), self.config.max_labels());
        match self.kind {
            ChartKind::VerticalBar => {
                let scale = nice_ticks(self.series.max_value(), self.config.tick_count());
                render::vertical_bar(painter, &layout, &scale, &self.series, theme);
            }
            ChartKind::HorizontalBar => {
                let scale = nice_ticks(self.series.max_value(), self.config.tick_count());
                render::horizontal_bar(painter, &layout, &scale, &self.series, theme);
            }
            ChartKind::Donut => render::donut(painter, &layout, &self.series, theme),
            ChartKind::Line => {
                let scale = nice_ticks(self.series.max_value(), self.config.tick_count());
                render::line(painter, &layout, &scale, &self.series, theme);
            }
        }
    }

    /// Rasterize onto a detached surface element sized by `opts`.
    fn rasterize(&self, opts: &RenderOptions) -> Result<SurfaceElement, ChartError> {
        let mut el = SurfaceElement::new("offscreen", opts.width, Some(opts.height));
        let mut frame = prepare(&el, opts.density, None, None)?;
        let shaper = TextShaper::new();
        let (w, h) = (frame.width, frame.height);
        {
            let mut painter = SkiaPainter::new(frame.canvas(), &shaper);
            self.draw(&mut painter, w, h, &opts.theme);
        }
        el.present(frame);
        Ok(el)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        self.rasterize(opts)?.snapshot_png()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Physical RGBA8 pixels: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        self.rasterize(opts)?.read_rgba8()
    }
}
