// File: crates/tally-core/src/scale.rs
// Summary: "Nice number" tick generation and the linear value-to-pixel transform built on it.

/// Mantissas a step may snap to, smallest first.
const STEP_MANTISSAS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
/// Slack for float noise, e.g. 0.25 / 0.1 landing a hair under 2.5.
const EPS: f64 = 1e-9;

/// Rounded axis bounds for one redraw. Never cached; recomputed from the data each time.
#[derive(Clone, Debug, PartialEq)]
pub struct NiceScale {
    pub ceiling: f64,
    pub step: f64,
    pub ticks: Vec<f64>,
}

/// Evenly spaced ticks from 0 up to a rounded ceiling covering `max_value`.
///
/// `nice_ticks(97.0, 5)` yields ceiling 100 with ticks `[0, 25, 50, 75, 100]`.
/// The step is a power of ten times one of 1, 2, 2.5, 5 or 10; 2.5 is what
/// turns a raw step of 24.25 into 25 above.
/// All-zero data still gets a usable axis (`max_value` is floored at 1) and
/// fewer than two ticks is treated as two.
pub fn nice_ticks(max_value: f64, tick_count: usize) -> NiceScale {
    let m = if max_value.is_finite() { max_value.max(1.0) } else { 1.0 };
    let tc = tick_count.max(2);

    let raw_step = m / (tc - 1) as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let scaled = raw_step / magnitude;
    let snapped = STEP_MANTISSAS
        .iter()
        .copied()
        .find(|&s| s + EPS >= scaled)
        .unwrap_or(10.0);
    let step = snapped * magnitude;

    let count = ((m / step) - EPS).ceil().max(1.0) as usize;
    let ceiling = count as f64 * step;
    let ticks = (0..=count).map(|i| i as f64 * step).collect();
    NiceScale { ceiling, step, ticks }
}

/// Maps a value in `[0, ceiling]` onto a pixel span.
/// `start_px` is where 0 lands, `end_px` where the ceiling lands; the span may
/// run either way (bottom-to-top for columns, left-to-right for rows).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub ceiling: f64,
}

impl ValueScale {
    pub fn new(start_px: f32, end_px: f32, ceiling: f64) -> Self {
        let ceiling = if ceiling.is_finite() && ceiling > 0.0 { ceiling } else { 1.0 };
        Self { start_px, end_px, ceiling }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + (self.fraction(v) as f32) * (self.end_px - self.start_px)
    }

    /// Pixel length a value occupies from the origin.
    #[inline]
    pub fn extent(&self, v: f64) -> f32 {
        (self.to_px(v) - self.start_px).abs()
    }

    #[inline]
    fn fraction(&self, v: f64) -> f64 {
        let v = if v.is_finite() { v } else { 0.0 };
        (v / self.ceiling).clamp(0.0, 1.0)
    }
}
