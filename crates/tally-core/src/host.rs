// File: crates/tally-core/src/host.rs
// Summary: Host runtime a chart lives in: pixel ratio, surface elements by id, frame clock, window observers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::chart::Chart;
use crate::error::ChartError;
use crate::frame::FrameClock;
use crate::instance::ChartHandle;
use crate::observer::{Callback, ObserverId, Observers};
use crate::surface::{SurfaceElement, SurfaceRef};
use crate::text::TextShaper;
use crate::theme::Theme;

struct HostInner {
    density: Cell<f64>,
    theme: Cell<Theme>,
    clock: FrameClock,
    shaper: TextShaper,
    surfaces: RefCell<HashMap<String, SurfaceRef>>,
    window_observers: RefCell<Observers>,
}

/// Cheap to clone; clones share one runtime.
#[derive(Clone)]
pub struct Host {
    inner: Rc<HostInner>,
}

impl Host {
    pub fn new(device_pixel_ratio: f64) -> Self {
        Self::with_theme(device_pixel_ratio, Theme::light())
    }

    pub fn with_theme(device_pixel_ratio: f64, theme: Theme) -> Self {
        Self {
            inner: Rc::new(HostInner {
                density: Cell::new(device_pixel_ratio),
                theme: Cell::new(theme),
                clock: FrameClock::new(),
                shaper: TextShaper::new(),
                surfaces: RefCell::new(HashMap::new()),
                window_observers: RefCell::new(Observers::default()),
            }),
        }
    }

    pub fn clock(&self) -> &FrameClock { &self.inner.clock }
    /// Raw ratio as reported by the runtime (clamping happens per redraw).
    pub fn device_pixel_ratio(&self) -> f64 { self.inner.density.get() }
    pub fn theme(&self) -> Theme { self.inner.theme.get() }
    pub(crate) fn shaper(&self) -> &TextShaper { &self.inner.shaper }

    /// Register a drawing surface; an existing element with the same id is replaced.
    pub fn add_surface(&self, id: &str, container_width: f32, height_hint: Option<f32>) -> SurfaceRef {
        let el = Rc::new(RefCell::new(SurfaceElement::new(id, container_width, height_hint)));
        self.inner.surfaces.borrow_mut().insert(id.to_string(), Rc::clone(&el));
        el
    }

    pub fn surface(&self, id: &str) -> Option<SurfaceRef> {
        self.inner.surfaces.borrow().get(id).cloned()
    }

    pub fn remove_surface(&self, id: &str) -> Option<SurfaceRef> {
        self.inner.surfaces.borrow_mut().remove(id)
    }

    /// The container of `id` changed size; its observers are notified.
    /// `height_hint: None` keeps the element's current hint. Returns false for an unknown id.
    pub fn resize_container(&self, id: &str, width: f32, height_hint: Option<f32>) -> bool {
        let Some(el) = self.surface(id) else { return false };
        let observers = {
            let mut el = el.borrow_mut();
            el.set_container(width, height_hint);
            el.observers.snapshot()
        };
        for cb in observers {
            cb();
        }
        true
    }

    /// The window resized (possibly moving to a display with another pixel ratio).
    pub fn resize_window(&self, device_pixel_ratio: f64) {
        self.inner.density.set(device_pixel_ratio);
        let observers = self.inner.window_observers.borrow().snapshot();
        for cb in observers {
            cb();
        }
    }

    pub fn window_observer_count(&self) -> usize {
        self.inner.window_observers.borrow().len()
    }

    pub(crate) fn observe_window(&self, cb: Callback) -> ObserverId {
        self.inner.window_observers.borrow_mut().attach(cb)
    }

    pub(crate) fn unobserve_window(&self, id: ObserverId) -> bool {
        self.inner.window_observers.borrow_mut().detach(id)
    }

    /// Draw `chart` into the surface `target` now and keep it redrawing on resize.
    pub fn render(&self, target: &str, chart: Chart) -> Result<ChartHandle, ChartError> {
        ChartHandle::attach(self, target, chart)
    }
}
