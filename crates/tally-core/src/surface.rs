// File: crates/tally-core/src/surface.rs
// Summary: Drawing-surface element and the density-aware adapter that prepares a Skia raster frame for it.
// Notes:
// - An element has a logical container width and an optional height hint, set by
//   the host. Its displayed size and physical backing store change only through
//   `present`, after a frame has been fully drawn, so a failed redraw keeps the
//   previous pixels.

use std::cell::RefCell;
use std::rc::Rc;

use skia_safe as skia;

use crate::error::ChartError;
use crate::observer::Observers;
use crate::types::{FALLBACK_HEIGHT, MAX_DENSITY, MIN_DENSITY, MIN_LOGICAL};

pub type SurfaceRef = Rc<RefCell<SurfaceElement>>;

pub struct SurfaceElement {
    id: String,
    container_width: f32,
    height_hint: Option<f32>,
    display: (f32, f32),
    physical: (i32, i32),
    backing: Option<skia::Surface>,
    pub(crate) observers: Observers,
}

impl SurfaceElement {
    pub fn new(id: impl Into<String>, container_width: f32, height_hint: Option<f32>) -> Self {
        Self {
            id: id.into(),
            container_width,
            height_hint,
            display: (0.0, 0.0),
            physical: (0, 0),
            backing: None,
            observers: Observers::default(),
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn container_width(&self) -> f32 { self.container_width }
    pub fn height_hint(&self) -> Option<f32> { self.height_hint }
    /// Logical size the element is displayed at.
    pub fn display_size(&self) -> (f32, f32) { self.display }
    /// Backing-store resolution in device pixels.
    pub fn physical_size(&self) -> (i32, i32) { self.physical }
    pub fn is_drawn(&self) -> bool { self.backing.is_some() }
    /// Container-resize observers currently attached.
    pub fn observer_count(&self) -> usize { self.observers.len() }

    pub(crate) fn set_container(&mut self, width: f32, height_hint: Option<f32>) {
        self.container_width = width;
        if height_hint.is_some() {
            self.height_hint = height_hint;
        }
    }

    /// Swap a fully drawn frame in as the element's pixels.
    pub fn present(&mut self, frame: Frame) {
        self.display = (frame.width, frame.height);
        self.physical = frame.physical;
        self.backing = Some(frame.surface);
    }

    /// Current pixels encoded as PNG.
    pub fn snapshot_png(&mut self) -> Result<Vec<u8>, ChartError> {
        let backing = self.backing.as_mut().ok_or(ChartError::Blank)?;
        let image = backing.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Current pixels as unpremultiplied RGBA8: (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        let (w, h) = self.physical;
        let backing = self.backing.as_mut().ok_or(ChartError::Blank)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !backing.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((px, w as u32, h as u32, stride))
    }
}

/// A drawn-into backing store not yet attached to its element.
pub struct Frame {
    surface: skia::Surface,
    pub width: f32,
    pub height: f32,
    pub density: f32,
    pub physical: (i32, i32),
}

impl Frame {
    /// Canvas in logical coordinates (density scale already applied).
    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }
}

/// Clamp a runtime pixel ratio to `[1, 3]`; junk reads as 1.
pub fn clamp_density(dpr: f64) -> f32 {
    if !dpr.is_finite() {
        return MIN_DENSITY;
    }
    (dpr as f32).clamp(MIN_DENSITY, MAX_DENSITY)
}

/// Degenerate logical edges become the minimum drawable size.
pub fn clamp_logical(v: f32) -> f32 {
    if v.is_finite() { v.max(MIN_LOGICAL) } else { MIN_LOGICAL }
}

/// Resolve the logical size for `el` and allocate a density-scaled raster for it.
///
/// Width defaults to the container width; height to the element's hint, else
/// [`FALLBACK_HEIGHT`]. The backing store is `logical * density` device pixels
/// and the returned canvas is pre-scaled, so all drawing uses logical units.
pub fn prepare(
    el: &SurfaceElement,
    density: f64,
    logical_width: Option<f32>,
    logical_height: Option<f32>,
) -> Result<Frame, ChartError> {
    let density = clamp_density(density);
    let width = clamp_logical(logical_width.unwrap_or(el.container_width));
    let height = clamp_logical(logical_height.or(el.height_hint).unwrap_or(FALLBACK_HEIGHT));
    let pw = (width * density).round() as i32;
    let ph = (height * density).round() as i32;

    let mut surface = skia::surfaces::raster_n32_premul((pw, ph))
        .ok_or(ChartError::RasterSurface { width: pw, height: ph })?;
    surface.canvas().scale((density, density));
    Ok(Frame { surface, width, height, density, physical: (pw, ph) })
}
