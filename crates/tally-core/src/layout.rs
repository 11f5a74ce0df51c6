// File: crates/tally-core/src/layout.rs
// Summary: Padding, plot rectangles and category-label rules per chart kind.

use crate::chart::ChartKind;
use crate::geometry::Rect;
use crate::text::estimate_width;
use crate::types::Insets;

/// Fixed gap between neighbouring bars, logical px.
pub const BAR_GAP: f32 = 6.0;
/// Share of a donut surface given to the circle; the rest holds the legend.
pub const DONUT_SPLIT: f32 = 0.76;
/// Font size of category labels, used to estimate whether they fit level.
pub const LABEL_FONT: f32 = 11.0;

const VBAR_PADDING: Insets = Insets::new(48.0, 12.0, 16.0, 32.0);
const VBAR_ROTATED_BOTTOM: f32 = 42.0;
const LINE_PADDING: Insets = Insets::new(48.0, 16.0, 12.0, 32.0);
const HBAR_PADDING: Insets = Insets::new(160.0, 40.0, 8.0, 24.0);

/// Where a chart may draw, recomputed on every redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Area inside the padding.
    pub plot: Rect,
    pub padding: Insets,
    /// Region data marks go into: the plot for axis charts, the circle region for donuts.
    pub marks: Rect,
    /// Donut legend column.
    pub legend: Option<Rect>,
    /// Draw every `label_stride`-th category label.
    pub label_stride: usize,
    pub rotate_labels: bool,
    /// Character budget for category labels.
    pub label_budget: usize,
}

/// Label layout with the kind's default label cap.
pub fn layout(kind: ChartKind, width: f32, height: f32, label_count: usize) -> Layout {
    layout_with(kind, width, height, label_count, kind.default_max_labels())
}

pub fn layout_with(kind: ChartKind, width: f32, height: f32, label_count: usize, max_labels: usize) -> Layout {
    let budget = kind.label_budget();
    match kind {
        ChartKind::VerticalBar => {
            let stride = label_stride(label_count, max_labels);
            let plot_w = (width - VBAR_PADDING.hsum()).max(1.0);
            let visible = visible_labels(label_count, stride).max(1);
            let slot = plot_w / visible as f32;
            let rotate = label_count > 0 && slot < estimate_width(budget, LABEL_FONT);
            let mut padding = VBAR_PADDING;
            if rotate {
                padding.bottom = VBAR_ROTATED_BOTTOM;
            }
            axis_layout(width, height, padding, stride, rotate, budget)
        }
        ChartKind::Line => {
            let stride = label_stride(label_count, max_labels);
            axis_layout(width, height, LINE_PADDING, stride, false, budget)
        }
        ChartKind::HorizontalBar => axis_layout(width, height, HBAR_PADDING, 1, false, budget),
        ChartKind::Donut => {
            let plot = Rect::from_ltwh(0.0, 0.0, width.max(1.0), height.max(1.0));
            let (marks, legend) = plot.split_h(DONUT_SPLIT);
            Layout {
                plot,
                padding: Insets::zero(),
                marks,
                legend: Some(legend),
                label_stride: 1,
                rotate_labels: false,
                label_budget: budget,
            }
        }
    }
}

fn axis_layout(width: f32, height: f32, padding: Insets, stride: usize, rotate: bool, budget: usize) -> Layout {
    let plot = Rect::from_ltwh(
        padding.left,
        padding.top,
        (width - padding.hsum()).max(1.0),
        (height - padding.vsum()).max(1.0),
    );
    Layout {
        plot,
        padding,
        marks: plot,
        legend: None,
        label_stride: stride,
        rotate_labels: rotate,
        label_budget: budget,
    }
}

/// Draw every n-th label so at most `max_labels` show; marks are unaffected.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 || count <= max_labels {
        1
    } else {
        count.div_ceil(max_labels)
    }
}

/// How many labels a stride leaves visible (indices 0, stride, 2*stride, ...).
pub fn visible_labels(count: usize, stride: usize) -> usize {
    count.div_ceil(stride.max(1))
}
