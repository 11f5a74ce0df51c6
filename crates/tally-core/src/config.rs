// File: crates/tally-core/src/config.rs
// Summary: Per-chart configuration (orientation, label thinning, tick count) validated on construction.

use std::fmt;

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Categories along X, bars grow upwards.
    #[default]
    Vertical,
    /// Categories stacked along Y, bars grow to the right.
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => f.write_str("vertical"),
            Orientation::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Explicit chart options.
/// Contract: `max_labels >= 1` and `tick_count >= 1`, enforced by [`ChartConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    orientation: Orientation,
    max_labels: usize,
    tick_count: usize,
}

impl ChartConfig {
    pub fn new(orientation: Orientation, max_labels: usize, tick_count: usize) -> Result<Self, ConfigError> {
        if tick_count == 0 {
            return Err(ConfigError::ZeroTickCount);
        }
        if max_labels == 0 {
            return Err(ConfigError::ZeroMaxLabels);
        }
        Ok(Self { orientation, max_labels, tick_count })
    }

    /// Category bars: at most 8 axis labels, 5 ticks.
    pub const fn vertical_bar() -> Self {
        Self { orientation: Orientation::Vertical, max_labels: 8, tick_count: 5 }
    }

    /// Horizontal bars show every row, so `max_labels` only matters if the
    /// config is later reused for a vertical chart.
    pub const fn horizontal_bar() -> Self {
        Self { orientation: Orientation::Horizontal, max_labels: 8, tick_count: 5 }
    }

    /// Time series: at most 6 period labels, 5 ticks.
    pub const fn line() -> Self {
        Self { orientation: Orientation::Vertical, max_labels: 6, tick_count: 5 }
    }

    pub fn orientation(&self) -> Orientation { self.orientation }
    pub fn max_labels(&self) -> usize { self.max_labels }
    pub fn tick_count(&self) -> usize { self.tick_count }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self { Self::vertical_bar() }
}
