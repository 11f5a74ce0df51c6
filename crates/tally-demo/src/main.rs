// File: crates/tally-demo/src/main.rs
// Summary: Headless demo: loads a dashboard payload (JSON) or a label/value CSV, draws every chart
//          through a host runtime, writes PNGs, then simulates a container resize and writes them again.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tally_core::dashboard::SURFACE_IDS;
use tally_core::series::parse_value;
use tally_core::{
    render_bar_chart, render_donut_chart, render_line_chart, ChartConfig, ChartHandle, Dashboard, DashboardData, Host,
    Series,
};

const SAMPLE: &str = include_str!("../data/sample_dashboard.json");
const CSV_SURFACES: [&str; 4] = ["csvVertical", "csvHorizontal", "csvDonut", "csvLine"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Args: [input.json | input.csv] [device pixel ratio]
    let input = std::env::args().nth(1);
    let dpr = match std::env::args().nth(2) {
        Some(raw) => raw.parse::<f64>().with_context(|| format!("bad pixel ratio '{raw}'"))?,
        None => 2.0,
    };
    let host = Host::new(dpr);
    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).ok();

    match input.as_deref() {
        Some(p) if is_csv(Path::new(p)) => {
            let path = Path::new(p);
            let series = load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} rows from {}", series.len(), path.display());
            run_csv(&host, series, &out_dir)
        }
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?;
            let data = DashboardData::from_json(&text).with_context(|| format!("parsing dashboard JSON '{p}'"))?;
            run_dashboard(&host, &data, &out_dir)
        }
        None => {
            println!("No input given; using the bundled sample dashboard");
            let data = DashboardData::from_json(SAMPLE).context("parsing bundled sample")?;
            run_dashboard(&host, &data, &out_dir)
        }
    }
}

fn run_dashboard(host: &Host, data: &DashboardData, out_dir: &Path) -> Result<()> {
    for id in SURFACE_IDS {
        host.add_surface(id, 560.0, Some(300.0));
    }
    let mut dashboard = Dashboard::new(host.clone());
    dashboard.load(data).context("drawing dashboard")?;
    write_all(host, &SURFACE_IDS, out_dir, "")?;

    // a narrower layout, as on a phone-width container
    for id in SURFACE_IDS {
        host.resize_container(id, 320.0, None);
    }
    let ran = host.clock().tick();
    println!("Resize settled in one frame: {ran} redraws");
    write_all(host, &SURFACE_IDS, out_dir, "_narrow")?;

    dashboard.dispose();
    Ok(())
}

fn run_csv(host: &Host, series: Series, out_dir: &Path) -> Result<()> {
    for id in CSV_SURFACES {
        host.add_surface(id, 640.0, Some(320.0));
    }
    let handles: Vec<ChartHandle> = vec![
        render_bar_chart(host, CSV_SURFACES[0], series.clone(), ChartConfig::vertical_bar())?,
        render_bar_chart(host, CSV_SURFACES[1], series.clone(), ChartConfig::horizontal_bar())?,
        render_donut_chart(host, CSV_SURFACES[2], series.clone())?,
        render_line_chart(host, CSV_SURFACES[3], series, ChartConfig::line())?,
    ];
    write_all(host, &CSV_SURFACES, out_dir, "")?;

    // moving to a denser display redraws everything once
    host.resize_window(host.device_pixel_ratio() + 1.0);
    host.clock().tick();
    write_all(host, &CSV_SURFACES, out_dir, "_dense")?;

    for h in &handles {
        println!("{:>15}: {} frames", h.kind().to_string(), h.frames_drawn());
    }
    Ok(())
}

/// Write target/out/<id><suffix>.png for each surface.
fn write_all(host: &Host, ids: &[&str], out_dir: &Path, suffix: &str) -> Result<()> {
    for id in ids {
        let surface = host.surface(id).with_context(|| format!("surface '{id}' vanished"))?;
        let mut el = surface.borrow_mut();
        let bytes = el.snapshot_png()?;
        let path = out_dir.join(format!("{id}{suffix}.png"));
        std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
        let (pw, ph) = el.physical_size();
        println!("Wrote {} ({pw}x{ph})", path.display());
    }
    Ok(())
}

fn is_csv(p: &Path) -> bool {
    p.extension().map(|e| e.eq_ignore_ascii_case("csv")).unwrap_or(false)
}

/// Two-column CSV: a label column and a count column, matched by header name.
fn load_series_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };
    let i_label = idx(&["label", "period", "category", "name", "month"]).unwrap_or(0);
    let i_value = idx(&["count", "value", "total", "n"]).unwrap_or(1);
    if i_label == i_value {
        anyhow::bail!("label and value columns overlap in {}", path.display());
    }

    let mut series = Series::new();
    for rec in rdr.records() {
        let rec = rec?;
        let label = rec.get(i_label).unwrap_or("").trim().to_string();
        let value = rec.get(i_value).map(parse_value).unwrap_or(0.0);
        series.push(label, value);
    }
    Ok(series)
}
