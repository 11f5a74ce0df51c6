// File: crates/tally-core/src/instance.rs
// Summary: Live chart instances: resize-driven, frame-coalesced redraws and idempotent disposal.
// Notes:
// - Resize notifications never draw directly. They (re)arm a single frame token
//   per instance, so any burst between two ticks collapses into one redraw.
// - The redraw reads the surface size and pixel ratio when the frame runs, so it
//   always sees the latest notification.

use std::cell::RefCell;
use std::rc::Rc;

use crate::chart::{Chart, ChartKind};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::frame::FrameToken;
use crate::host::Host;
use crate::observer::{Callback, ObserverId};
use crate::paint::SkiaPainter;
use crate::series::Series;
use crate::surface::{prepare, SurfaceRef};

struct Instance {
    chart: Chart,
    host: Host,
    surface: SurfaceRef,
    pending: Option<FrameToken>,
    container_observer: Option<ObserverId>,
    window_observer: Option<ObserverId>,
    frames_drawn: u64,
    disposed: bool,
}

impl Instance {
    /// Draw into a fresh backing store and swap it in only once complete.
    fn redraw(&mut self) -> Result<(), ChartError> {
        let density = self.host.device_pixel_ratio();
        let theme = self.host.theme();
        let mut frame = {
            let el = self.surface.borrow();
            prepare(&el, density, None, None)?
        };
        let (w, h, d) = (frame.width, frame.height, frame.density);
        {
            let mut painter = SkiaPainter::new(frame.canvas(), self.host.shaper());
            self.chart.draw(&mut painter, w, h, &theme);
        }
        self.surface.borrow_mut().present(frame);
        self.frames_drawn += 1;
        tracing::debug!(chart = %self.chart.kind, width = w, height = h, density = d, "redraw");
        Ok(())
    }
}

/// Handle to a chart drawn on a host surface. Dropping it disposes the chart.
pub struct ChartHandle {
    inner: Rc<RefCell<Instance>>,
}

impl ChartHandle {
    pub(crate) fn attach(host: &Host, target: &str, chart: Chart) -> Result<Self, ChartError> {
        let surface = host
            .surface(target)
            .ok_or_else(|| ChartError::SurfaceNotFound(target.to_string()))?;

        let inner = Rc::new(RefCell::new(Instance {
            chart,
            host: host.clone(),
            surface: Rc::clone(&surface),
            pending: None,
            container_observer: None,
            window_observer: None,
            frames_drawn: 0,
            disposed: false,
        }));
        inner.borrow_mut().redraw()?;

        let weak = Rc::downgrade(&inner);
        let on_resize: Callback = Rc::new(move || {
            if let Some(rc) = weak.upgrade() {
                schedule(&rc);
            }
        });
        let container = surface.borrow_mut().observers.attach(Rc::clone(&on_resize));
        let window = host.observe_window(on_resize);
        {
            let mut inst = inner.borrow_mut();
            inst.container_observer = Some(container);
            inst.window_observer = Some(window);
        }
        Ok(Self { inner })
    }

    /// Cancel any pending redraw and detach the resize observers. Safe to repeat.
    pub fn dispose(&self) {
        let mut guard = self.inner.borrow_mut();
        let inst = &mut *guard;
        if inst.disposed {
            return;
        }
        inst.disposed = true;
        if let Some(token) = inst.pending.take() {
            inst.host.clock().cancel_frame(token);
        }
        if let Some(id) = inst.container_observer.take() {
            inst.surface.borrow_mut().observers.detach(id);
        }
        if let Some(id) = inst.window_observer.take() {
            inst.host.unobserve_window(id);
        }
        tracing::debug!(chart = %inst.chart.kind, frames = inst.frames_drawn, "chart disposed");
    }

    pub fn is_disposed(&self) -> bool { self.inner.borrow().disposed }
    pub fn has_pending_frame(&self) -> bool { self.inner.borrow().pending.is_some() }
    /// Completed draws, the initial one included.
    pub fn frames_drawn(&self) -> u64 { self.inner.borrow().frames_drawn }
    pub fn kind(&self) -> ChartKind { self.inner.borrow().chart.kind }
    pub fn surface(&self) -> SurfaceRef { Rc::clone(&self.inner.borrow().surface) }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Arm (or re-arm) this instance's single frame token.
fn schedule(rc: &Rc<RefCell<Instance>>) {
    let mut guard = rc.borrow_mut();
    let inst = &mut *guard;
    if inst.disposed {
        return;
    }
    let clock = inst.host.clock().clone();
    if let Some(prev) = inst.pending.take() {
        clock.cancel_frame(prev);
        tracing::trace!(chart = %inst.chart.kind, "resize coalesced into next frame");
    }
    let weak = Rc::downgrade(rc);
    let token = clock.request_frame(move || {
        if let Some(rc) = weak.upgrade() {
            run_frame(&rc);
        }
    });
    inst.pending = Some(token);
}

fn run_frame(rc: &Rc<RefCell<Instance>>) {
    let mut guard = rc.borrow_mut();
    let inst = &mut *guard;
    inst.pending = None;
    if inst.disposed {
        return;
    }
    // previous pixels stay on the surface when this fails
    if let Err(err) = inst.redraw() {
        tracing::warn!(chart = %inst.chart.kind, error = %err, "redraw failed; keeping previous frame");
    }
}

/// Holds at most one chart; installing a new one disposes the old.
#[derive(Default)]
pub struct ChartSlot {
    current: Option<ChartHandle>,
}

impl ChartSlot {
    pub fn new() -> Self { Self::default() }

    pub fn replace(&mut self, next: ChartHandle) -> &ChartHandle {
        if let Some(old) = self.current.take() {
            old.dispose();
        }
        self.current.insert(next)
    }

    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            old.dispose();
        }
    }

    pub fn get(&self) -> Option<&ChartHandle> { self.current.as_ref() }
}

/// Columns or rows, per `config.orientation()`.
pub fn render_bar_chart(host: &Host, target: &str, series: Series, config: ChartConfig) -> Result<ChartHandle, ChartError> {
    host.render(target, Chart::bar(series, config))
}

pub fn render_donut_chart(host: &Host, target: &str, series: Series) -> Result<ChartHandle, ChartError> {
    host.render(target, Chart::donut(series))
}

pub fn render_line_chart(host: &Host, target: &str, series: Series, config: ChartConfig) -> Result<ChartHandle, ChartError> {
    host.render(target, Chart::line(series, config))
}
