// File: crates/tally-core/src/geometry.rs
// Summary: Lightweight geometry helpers for logical-pixel layout math.

use skia_safe as skia;

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
    /// True when `(x, y)` lies inside or on the edge.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
    /// Split vertically at `fraction` of the width into (left, right) parts.
    pub fn split_h(&self, fraction: f32) -> (Rect, Rect) {
        let lw = self.width * fraction.clamp(0.0, 1.0);
        (
            Rect::from_ltwh(self.left, self.top, lw, self.height),
            Rect::from_ltwh(self.left + lw, self.top, self.width - lw, self.height),
        )
    }
}

impl From<Rect> for skia::Rect {
    fn from(r: Rect) -> Self {
        skia::Rect::from_xywh(r.left, r.top, r.width, r.height)
    }
}
