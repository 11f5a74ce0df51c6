// File: crates/tally-core/src/render/line.rs
// Summary: Line renderer: evenly spaced points, straight segments, dot markers, thinned period labels.

use super::{placeholder, value_axis_y};
use crate::layout::Layout;
use crate::paint::{Painter, Pt, TextRole, TextStyle};
use crate::scale::NiceScale;
use crate::series::Series;
use crate::text::truncate_label;
use crate::theme::{palette_color, Theme};

pub const DOT_RADIUS: f32 = 3.0;
const STROKE: f32 = 2.0;

pub fn line(p: &mut dyn Painter, layout: &Layout, scale: &NiceScale, series: &Series, theme: &Theme) {
    let plot = layout.plot;
    if series.is_empty() {
        placeholder(p, plot, theme);
        return;
    }
    let ys = value_axis_y(p, plot, scale, theme);

    let n = series.len();
    let points: Vec<Pt> = series
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let x = if n == 1 {
                plot.left + plot.width * 0.5
            } else {
                plot.left + plot.width * i as f32 / (n - 1) as f32
            };
            (x, ys.to_px(d.value))
        })
        .collect();

    let color = palette_color(0);
    if points.len() > 1 {
        p.stroke_polyline(&points, STROKE, color);
    }
    for &pt in &points {
        p.fill_circle(pt, DOT_RADIUS, color);
    }

    let stride = layout.label_stride.max(1);
    let style = TextStyle::new(TextRole::Category, theme);
    for (i, (d, &(x, _))) in series.iter().zip(&points).enumerate() {
        if i % stride == 0 {
            p.text(&truncate_label(&d.label, layout.label_budget), (x, plot.bottom() + 14.0), &style);
        }
    }
}
