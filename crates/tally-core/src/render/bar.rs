// File: crates/tally-core/src/render/bar.rs
// Summary: Vertical (column) and horizontal (row) bar renderers.

use super::{placeholder, value_axis_x, value_axis_y};
use crate::geometry::Rect;
use crate::layout::{Layout, BAR_GAP};
use crate::paint::{Align, Painter, TextRole, TextStyle};
use crate::scale::NiceScale;
use crate::series::Series;
use crate::text::{format_value, truncate_label};
use crate::theme::{palette_color, Theme};

/// Tilt of crowded category labels under a column chart.
pub const LABEL_ROTATION: f32 = -30.0;

/// One column per datum, colored by position; labels thinned per `layout.label_stride`.
pub fn vertical_bar(p: &mut dyn Painter, layout: &Layout, scale: &NiceScale, series: &Series, theme: &Theme) {
    let plot = layout.plot;
    if series.is_empty() {
        placeholder(p, plot, theme);
        return;
    }
    let ys = value_axis_y(p, plot, scale, theme);

    let n = series.len();
    // crowded charts narrow the gap too, so the last bar still ends at plot.right()
    let gap = BAR_GAP.min(plot.width / n as f32 * 0.25);
    let bar_w = (plot.width - gap * (n - 1) as f32) / n as f32;
    let value_style = TextStyle::new(TextRole::Value, theme);
    let label_style = if layout.rotate_labels {
        TextStyle::new(TextRole::Category, theme).align(Align::Right).rotated(LABEL_ROTATION)
    } else {
        TextStyle::new(TextRole::Category, theme)
    };
    let stride = layout.label_stride.max(1);

    for (i, d) in series.iter().enumerate() {
        let x = plot.left + i as f32 * (bar_w + gap);
        let cx = x + bar_w * 0.5;
        let h = ys.extent(d.value);
        let top = plot.bottom() - h;
        p.fill_rect(Rect::from_ltwh(x, top, bar_w, h), palette_color(i));
        p.text(&format_value(d.value), (cx, top - 8.0), &value_style);

        if i % stride == 0 {
            let label = truncate_label(&d.label, layout.label_budget);
            let y = if layout.rotate_labels { plot.bottom() + 10.0 } else { plot.bottom() + 14.0 };
            p.text(&label, (cx, y), &label_style);
        }
    }
}

/// One row per datum; every category label is drawn, right-aligned left of the axis.
pub fn horizontal_bar(p: &mut dyn Painter, layout: &Layout, scale: &NiceScale, series: &Series, theme: &Theme) {
    let plot = layout.plot;
    if series.is_empty() {
        placeholder(p, plot, theme);
        return;
    }
    let xs = value_axis_x(p, plot, scale, theme);

    let n = series.len();
    let row_h = plot.height / n as f32;
    let thickness = (row_h - BAR_GAP).max(1.0);
    let label_style = TextStyle::new(TextRole::Category, theme).align(Align::Right);
    let value_style = TextStyle::new(TextRole::Value, theme).align(Align::Left);

    for (i, d) in series.iter().enumerate() {
        let cy = plot.top + (i as f32 + 0.5) * row_h;
        let len = xs.extent(d.value);
        p.fill_rect(Rect::from_ltwh(plot.left, cy - thickness * 0.5, len, thickness), palette_color(i));
        p.text(&truncate_label(&d.label, layout.label_budget), (plot.left - 8.0, cy), &label_style);
        p.text(&format_value(d.value), (plot.left + len + 4.0, cy), &value_style);
    }
}
