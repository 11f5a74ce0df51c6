// File: crates/tally-window-demo/src/main.rs
// Summary: Windowed demo that shows the dashboard charts one at a time using winit + softbuffer (CPU blit).
// Notes:
// - The window is the chart's container: Resized feeds `resize_container`, ScaleFactorChanged
//   feeds `resize_window`. Neither draws; the host frame clock is ticked on RedrawRequested.
// - Any key cycles to the next chart; the slot disposes the previous instance.

use anyhow::{Context, Result};
use std::num::NonZeroU32;
use tally_core::{theme, Chart, ChartConfig, ChartSlot, DashboardData, Host};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const SURFACE: &str = "window";
const SAMPLE: &str = include_str!("../../tally-demo/data/sample_dashboard.json");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tally_core=debug")),
        )
        .init();

    // Arg: optional dashboard JSON; the bundled sample otherwise
    let text = match std::env::args().nth(1) {
        Some(p) => std::fs::read_to_string(&p).with_context(|| format!("reading {p}"))?,
        None => SAMPLE.to_string(),
    };
    let data = DashboardData::from_json(&text).context("parsing dashboard JSON")?;
    let charts = build_charts(&data);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Tally - Window Demo")
        .with_inner_size(LogicalSize::new(900.0, 480.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let theme = std::env::var("TALLY_THEME").map(|v| theme::find(&v)).unwrap_or_default();
    let host = Host::with_theme(window.scale_factor(), theme);
    let logical: LogicalSize<f32> = window.inner_size().to_logical(window.scale_factor());
    host.add_surface(SURFACE, logical.width, Some(logical.height));

    let mut idx = 0usize;
    let mut slot = ChartSlot::new();
    slot.replace(host.render(SURFACE, charts[idx].clone())?);
    let mut dirty = true;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    slot.clear();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    let l: LogicalSize<f32> = size.to_logical(window.scale_factor());
                    host.resize_container(SURFACE, l.width, Some(l.height));
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    host.resize_window(scale_factor);
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode, .. },
                    ..
                } => {
                    if virtual_keycode == Some(VirtualKeyCode::Escape) {
                        slot.clear();
                        *cf = ControlFlow::Exit;
                        return;
                    }
                    idx = (idx + 1) % charts.len();
                    match host.render(SURFACE, charts[idx].clone()) {
                        Ok(handle) => {
                            let kind = slot.replace(handle).kind();
                            tracing::info!(chart = %kind, "showing");
                            dirty = true;
                        }
                        Err(err) => tracing::warn!(error = %err, "could not draw next chart"),
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if dirty || host.clock().pending() > 0 {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if host.clock().tick() > 0 {
                    dirty = true;
                }
                if dirty {
                    if let Err(err) = blit(&host, &mut surface) {
                        tracing::warn!(error = %err, "blit failed");
                    }
                    dirty = false;
                }
            }
            _ => {}
        }
    });
}

/// The six dashboard charts, in page order.
fn build_charts(data: &DashboardData) -> Vec<Chart> {
    vec![
        Chart::bar(data.by_department.clone(), ChartConfig::vertical_bar()),
        Chart::bar(data.by_specialty.clone(), ChartConfig::vertical_bar()),
        Chart::bar(data.by_drug_group.clone(), ChartConfig::horizontal_bar()),
        Chart::bar(data.by_doctor.clone(), ChartConfig::horizontal_bar()),
        Chart::donut(data.by_severity.clone()),
        Chart::line(data.by_month.clone(), ChartConfig::line()),
    ]
}

/// Copy the surface element's current pixels into the window (0RGB u32 per pixel).
fn blit(host: &Host, surface: &mut softbuffer::Surface) -> Result<()> {
    let el = host.surface(SURFACE).context("chart surface missing")?;
    let (rgba, w, h, _) = el.borrow_mut().read_rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
