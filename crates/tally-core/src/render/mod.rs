// File: crates/tally-core/src/render/mod.rs
// Summary: Per-kind renderers (vertical/horizontal bar, donut, line) and the axis helpers they share.

mod bar;
mod donut;
mod line;

pub use bar::{horizontal_bar, vertical_bar};
pub use donut::{donut, DONUT_HOLE_RATIO};
pub use line::line;

use crate::geometry::Rect;
use crate::paint::{Align, Painter, TextRole, TextStyle};
use crate::scale::{NiceScale, ValueScale};
use crate::text::format_value;
use crate::theme::Theme;

/// Shown instead of geometry when a series has nothing to draw.
pub const NO_DATA: &str = "No data";

pub(crate) fn placeholder(p: &mut dyn Painter, area: Rect, theme: &Theme) {
    let style = TextStyle::new(TextRole::Placeholder, theme);
    p.text(NO_DATA, area.center(), &style);
}

/// Horizontal gridlines + left tick labels for charts whose values run up the Y axis.
pub(crate) fn value_axis_y(p: &mut dyn Painter, plot: Rect, scale: &NiceScale, theme: &Theme) -> ValueScale {
    let ys = ValueScale::new(plot.bottom(), plot.top, scale.ceiling);
    let style = TextStyle::new(TextRole::Tick, theme).align(Align::Right);
    for &t in &scale.ticks {
        let y = ys.to_px(t);
        p.stroke_line((plot.left, y), (plot.right(), y), 1.0, theme.grid);
        p.text(&format_value(t), (plot.left - 6.0, y), &style);
    }
    p.stroke_line((plot.left, plot.bottom()), (plot.right(), plot.bottom()), 1.0, theme.axis_line);
    ys
}

/// Vertical gridlines + bottom tick labels for charts whose values run along X.
pub(crate) fn value_axis_x(p: &mut dyn Painter, plot: Rect, scale: &NiceScale, theme: &Theme) -> ValueScale {
    let xs = ValueScale::new(plot.left, plot.right(), scale.ceiling);
    let style = TextStyle::new(TextRole::Tick, theme);
    for &t in &scale.ticks {
        let x = xs.to_px(t);
        p.stroke_line((x, plot.top), (x, plot.bottom()), 1.0, theme.grid);
        p.text(&format_value(t), (x, plot.bottom() + 12.0), &style);
    }
    p.stroke_line((plot.left, plot.top), (plot.left, plot.bottom()), 1.0, theme.axis_line);
    xs
}
