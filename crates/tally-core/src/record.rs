// File: crates/tally-core/src/record.rs
// Summary: Display-list Painter that records draw operations instead of rasterizing them.

use crate::geometry::Rect;
use crate::paint::{Color, Painter, Pt, TextRole, TextStyle};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Rect { rect: Rect, color: Color },
    Line { from: Pt, to: Pt, width: f32, color: Color },
    Polyline { points: Vec<Pt>, width: f32, color: Color },
    Circle { center: Pt, radius: f32, color: Color },
    Wedge { center: Pt, radius: f32, start: f32, sweep: f32, color: Color },
    BeginLayer,
    PunchDisc { center: Pt, radius: f32 },
    EndLayer,
    Text { text: String, at: Pt, style: TextStyle },
}

/// Records every call in order; handy for asserting what a renderer emitted.
#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Pt, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn wedges(&self) -> Vec<(f32, f32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Wedge { start, sweep, color, .. } => Some((*start, *sweep, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> Vec<&[Pt]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }

    /// Text calls of one role, with their styles.
    pub fn texts(&self, role: TextRole) -> Vec<(&str, Pt, &TextStyle)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, at, style } if style.role == role => Some((text.as_str(), *at, style)),
                _ => None,
            })
            .collect()
    }
}

impl Painter for Recorder {
    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }
    fn stroke_line(&mut self, from: Pt, to: Pt, width: f32, color: Color) {
        self.ops.push(DrawOp::Line { from, to, width, color });
    }
    fn stroke_polyline(&mut self, points: &[Pt], width: f32, color: Color) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), width, color });
    }
    fn fill_circle(&mut self, center: Pt, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }
    fn fill_wedge(&mut self, center: Pt, radius: f32, start_deg: f32, sweep_deg: f32, color: Color) {
        self.ops.push(DrawOp::Wedge { center, radius, start: start_deg, sweep: sweep_deg, color });
    }
    fn begin_layer(&mut self) {
        self.ops.push(DrawOp::BeginLayer);
    }
    fn punch_disc(&mut self, center: Pt, radius: f32) {
        self.ops.push(DrawOp::PunchDisc { center, radius });
    }
    fn end_layer(&mut self) {
        self.ops.push(DrawOp::EndLayer);
    }
    fn text(&mut self, text: &str, at: Pt, style: &TextStyle) {
        self.ops.push(DrawOp::Text { text: text.to_string(), at, style: *style });
    }
}
