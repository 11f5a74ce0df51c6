// File: crates/tally-core/tests/lifecycle.rs
// Purpose: Resize-driven redraws: frame coalescing, density tracking, disposal, slots.

use std::cell::Cell;
use std::rc::Rc;

use tally_core::{
    render_bar_chart, render_donut_chart, render_line_chart, ChartConfig, ChartError, ChartKind, ChartSlot,
    FrameClock, FrameToken, Host, Series,
};

fn sample() -> Series {
    Series::from_pairs([("Cardiology", 12.0), ("Neurology", 7.0), ("Oncology", 19.0)])
}

fn host_with(id: &str, dpr: f64) -> Host {
    let host = Host::new(dpr);
    host.add_surface(id, 400.0, Some(240.0));
    host
}

#[test]
fn first_draw_is_synchronous() {
    let host = host_with("chartDept", 2.0);
    let chart = render_bar_chart(&host, "chartDept", sample(), ChartConfig::vertical_bar()).unwrap();

    assert_eq!(chart.frames_drawn(), 1);
    assert!(!chart.has_pending_frame());
    let surface = chart.surface();
    let el = surface.borrow();
    assert!(el.is_drawn());
    assert_eq!(el.display_size(), (400.0, 240.0));
    assert_eq!(el.physical_size(), (800, 480));
}

#[test]
fn resize_burst_coalesces_into_one_redraw_at_latest_size() {
    let host = host_with("chartDept", 2.0);
    let chart = render_bar_chart(&host, "chartDept", sample(), ChartConfig::vertical_bar()).unwrap();

    assert!(host.resize_container("chartDept", 500.0, None));
    assert!(host.resize_container("chartDept", 640.0, None));
    assert_eq!(host.clock().pending(), 1);
    assert!(chart.has_pending_frame());
    assert_eq!(chart.frames_drawn(), 1, "notifications never draw directly");

    assert_eq!(host.clock().tick(), 1);
    assert_eq!(chart.frames_drawn(), 2);
    assert!(!chart.has_pending_frame());
    let surface = chart.surface();
    assert_eq!(surface.borrow().display_size(), (640.0, 240.0));
    assert_eq!(surface.borrow().physical_size(), (1280, 480));

    // nothing left over for the next frame
    assert_eq!(host.clock().tick(), 0);
    assert_eq!(chart.frames_drawn(), 2);
}

#[test]
fn container_and_window_notifications_share_one_frame() {
    let host = host_with("chartSeverity", 1.0);
    let chart = render_donut_chart(&host, "chartSeverity", sample()).unwrap();

    host.resize_container("chartSeverity", 300.0, Some(200.0));
    host.resize_window(3.0);
    assert_eq!(host.clock().pending(), 1);

    host.clock().tick();
    assert_eq!(chart.frames_drawn(), 2);
    let surface = chart.surface();
    assert_eq!(surface.borrow().display_size(), (300.0, 200.0));
    assert_eq!(surface.borrow().physical_size(), (900, 600));
}

#[test]
fn pixel_ratio_is_clamped_per_redraw() {
    let host = host_with("chartMonth", 5.0);
    let chart = render_line_chart(&host, "chartMonth", sample(), ChartConfig::line()).unwrap();
    assert_eq!(chart.surface().borrow().physical_size(), (1200, 720));

    host.resize_window(0.5);
    host.clock().tick();
    assert_eq!(chart.surface().borrow().physical_size(), (400, 240));
}

#[test]
fn each_instance_keeps_its_own_frame() {
    let host = Host::new(1.0);
    host.add_surface("chartDept", 400.0, Some(240.0));
    host.add_surface("chartMonth", 400.0, Some(240.0));
    let bar = render_bar_chart(&host, "chartDept", sample(), ChartConfig::vertical_bar()).unwrap();
    let line = render_line_chart(&host, "chartMonth", sample(), ChartConfig::line()).unwrap();

    host.resize_window(2.0);
    host.resize_window(2.0);
    assert_eq!(host.clock().pending(), 2);
    assert_eq!(host.clock().tick(), 2);
    assert_eq!((bar.frames_drawn(), line.frames_drawn()), (2, 2));
}

#[test]
fn dispose_is_idempotent_and_silences_the_instance() {
    let host = host_with("chartDept", 1.0);
    let chart = render_bar_chart(&host, "chartDept", sample(), ChartConfig::vertical_bar()).unwrap();
    host.resize_container("chartDept", 600.0, None);
    assert!(chart.has_pending_frame());

    chart.dispose();
    chart.dispose();

    assert!(chart.is_disposed());
    assert!(!chart.has_pending_frame());
    assert_eq!(host.clock().pending(), 0);
    assert_eq!(chart.surface().borrow().observer_count(), 0);
    assert_eq!(host.window_observer_count(), 0);

    host.resize_container("chartDept", 320.0, None);
    host.resize_window(2.0);
    assert_eq!(host.clock().tick(), 0);
    assert_eq!(chart.frames_drawn(), 1);
    // last pixels stay in place
    assert_eq!(chart.surface().borrow().display_size(), (400.0, 240.0));
}

#[test]
fn dropping_the_handle_disposes() {
    let host = host_with("chartDept", 1.0);
    let surface = host.surface("chartDept").unwrap();
    {
        let _chart = render_bar_chart(&host, "chartDept", sample(), ChartConfig::vertical_bar()).unwrap();
        host.resize_container("chartDept", 500.0, None);
        assert_eq!(surface.borrow().observer_count(), 1);
    }
    assert_eq!(surface.borrow().observer_count(), 0);
    assert_eq!(host.window_observer_count(), 0);
    assert_eq!(host.clock().pending(), 0);
}

#[test]
fn missing_surface_is_an_error() {
    let host = Host::new(1.0);
    let result = render_donut_chart(&host, "chartNowhere", sample());
    let Err(err) = result else { panic!("expected SurfaceNotFound") };
    assert!(matches!(&err, ChartError::SurfaceNotFound(id) if id == "chartNowhere"));
    assert_eq!(host.window_observer_count(), 0);
}

#[test]
fn unknown_container_resize_is_ignored() {
    let host = Host::new(1.0);
    assert!(!host.resize_container("chartNowhere", 100.0, None));
    assert_eq!(host.clock().pending(), 0);
}

#[test]
fn slot_replacement_disposes_the_previous_chart() {
    let host = host_with("chartDoctor", 1.0);
    let surface = host.surface("chartDoctor").unwrap();
    let mut slot = ChartSlot::new();
    assert!(slot.get().is_none());

    slot.replace(render_bar_chart(&host, "chartDoctor", sample(), ChartConfig::horizontal_bar()).unwrap());
    host.resize_container("chartDoctor", 420.0, None);
    assert_eq!(host.clock().pending(), 1);

    let next = render_donut_chart(&host, "chartDoctor", sample()).unwrap();
    let installed = slot.replace(next);
    assert_eq!(installed.kind(), ChartKind::Donut);
    assert_eq!(surface.borrow().observer_count(), 1);
    assert_eq!(host.window_observer_count(), 1);
    assert_eq!(host.clock().pending(), 0, "old instance's frame was canceled");

    slot.clear();
    assert!(slot.get().is_none());
    assert_eq!(surface.borrow().observer_count(), 0);
}

#[test]
fn failed_redraw_keeps_previous_pixels() {
    let host = host_with("chartDept", 1.0);
    let chart = render_bar_chart(&host, "chartDept", sample(), ChartConfig::vertical_bar()).unwrap();

    // far beyond what a raster surface can allocate
    host.resize_container("chartDept", 1.0e9, Some(1.0e9));
    assert_eq!(host.clock().tick(), 1);
    assert_eq!(chart.frames_drawn(), 1);
    assert!(!chart.has_pending_frame());
    assert_eq!(chart.surface().borrow().display_size(), (400.0, 240.0));

    // and recovers on the next sane size
    host.resize_container("chartDept", 300.0, Some(200.0));
    host.clock().tick();
    assert_eq!(chart.frames_drawn(), 2);
    assert_eq!(chart.surface().borrow().display_size(), (300.0, 200.0));
}

#[test]
fn clock_defers_frames_requested_during_a_tick() {
    let clock = FrameClock::new();
    let hits = Rc::new(Cell::new(0));
    {
        let clock2 = clock.clone();
        let hits = Rc::clone(&hits);
        clock.request_frame(move || {
            hits.set(hits.get() + 1);
            let hits = Rc::clone(&hits);
            clock2.request_frame(move || hits.set(hits.get() + 10));
        });
    }
    assert_eq!(clock.tick(), 1);
    assert_eq!(hits.get(), 1);
    assert_eq!(clock.pending(), 1);
    assert_eq!(clock.tick(), 1);
    assert_eq!(hits.get(), 11);
    assert_eq!(clock.ticks(), 2);
}

#[test]
fn clock_cancel_inside_a_tick_drops_the_later_frame() {
    let clock = FrameClock::new();
    let later: Rc<Cell<Option<FrameToken>>> = Rc::new(Cell::new(None));
    let ran = Rc::new(Cell::new(false));
    {
        let clock2 = clock.clone();
        let later = Rc::clone(&later);
        clock.request_frame(move || {
            if let Some(t) = later.get() {
                assert!(clock2.cancel_frame(t));
            }
        });
    }
    let ran2 = Rc::clone(&ran);
    let token = clock.request_frame(move || ran2.set(true));
    later.set(Some(token));

    assert!(clock.is_pending(token));
    assert_eq!(clock.tick(), 1);
    assert!(!ran.get());
    assert!(!clock.is_pending(token));
    assert!(!clock.cancel_frame(token));
}
