// File: crates/tally-core/src/types.rs
// Summary: Shared types and constants (logical sizes, density bounds, paddings).

/// Default headless surface width in logical pixels.
pub const WIDTH: f32 = 640.0;
/// Default headless surface height in logical pixels.
pub const HEIGHT: f32 = 320.0;

/// Height used when a surface carries no explicit size hint.
pub const FALLBACK_HEIGHT: f32 = 120.0;
/// Smallest logical edge a surface is ever prepared at.
pub const MIN_LOGICAL: f32 = 10.0;

/// Device pixel ratio bounds; keeps backing stores small on very dense displays.
pub const MIN_DENSITY: f32 = 1.0;
pub const MAX_DENSITY: f32 = 3.0;

/// Screen margins around a plot area, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// No padding at all (donut charts use the whole surface).
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}
