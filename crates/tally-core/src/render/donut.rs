// File: crates/tally-core/src/render/donut.rs
// Summary: Donut renderer: clockwise wedges from 12 o'clock, punched center, total and side legend.

use super::placeholder;
use crate::geometry::Rect;
use crate::layout::Layout;
use crate::paint::{Align, Painter, TextRole, TextStyle};
use crate::series::Series;
use crate::text::{format_percent, format_value, truncate_label};
use crate::theme::{palette_color, Theme};

/// Inner radius as a share of the outer radius.
pub const DONUT_HOLE_RATIO: f32 = 0.62;
/// First wedge starts at 12 o'clock.
pub const START_ANGLE: f32 = -90.0;

const RING_MARGIN: f32 = 8.0;
const LEGEND_ROW: f32 = 18.0;
const MIN_LEGEND_ROW: f32 = 10.0;
const SWATCH: f32 = 10.0;

pub fn donut(p: &mut dyn Painter, layout: &Layout, series: &Series, theme: &Theme) {
    let total = series.total();
    if total <= 0.0 {
        placeholder(p, layout.plot, theme);
        return;
    }

    let area = layout.marks;
    let center = area.center();
    let outer = (area.width.min(area.height) * 0.5 - RING_MARGIN).max(4.0);

    p.begin_layer();
    let mut start = START_ANGLE;
    for (i, d) in series.iter().enumerate() {
        if d.value <= 0.0 {
            continue;
        }
        let sweep = (d.value / total * 360.0) as f32;
        p.fill_wedge(center, outer, start, sweep, palette_color(i));
        start += sweep;
    }
    p.punch_disc(center, outer * DONUT_HOLE_RATIO);
    p.end_layer();

    p.text(&format_value(total), center, &TextStyle::new(TextRole::Total, theme));

    if let Some(legend) = layout.legend {
        draw_legend(p, legend, series, total, layout.label_budget, theme);
    }
}

/// Swatch, label and share for every non-zero slice. Rows shrink to fit the
/// column; past `MIN_LEGEND_ROW` the tail collapses into a "+N more" row.
fn draw_legend(p: &mut dyn Painter, area: Rect, series: &Series, total: f64, budget: usize, theme: &Theme) {
    let rows = series.iter().filter(|d| d.value > 0.0).count();
    if rows == 0 {
        return;
    }
    let avail = (area.height - 2.0 * RING_MARGIN).max(0.0);
    let row = (avail / rows as f32).clamp(MIN_LEGEND_ROW, LEGEND_ROW);
    let capacity = ((avail + 1e-3) / row).floor() as usize;
    let (shown, hidden) = if rows <= capacity {
        (rows, 0)
    } else {
        let shown = capacity.saturating_sub(1);
        (shown, rows - shown)
    };

    let block = (shown + usize::from(hidden > 0)) as f32 * row;
    let mut y = area.top + ((area.height - block) * 0.5).max(RING_MARGIN);
    let x = area.left + 4.0;
    let swatch = SWATCH.min(row - 2.0).max(2.0);
    let style = TextStyle::new(TextRole::Legend, theme).align(Align::Left);

    for (i, d) in series.iter().enumerate().filter(|(_, d)| d.value > 0.0).take(shown) {
        let cy = y + row * 0.5;
        p.fill_rect(Rect::from_ltwh(x, cy - swatch * 0.5, swatch, swatch), palette_color(i));
        let text = format!("{} {}", truncate_label(&d.label, budget), format_percent(d.value, total));
        p.text(&text, (x + SWATCH + 6.0, cy), &style);
        y += row;
    }
    if hidden > 0 {
        p.text(&format!("+{hidden} more"), (x + SWATCH + 6.0, y + row * 0.5), &style);
    }
}
