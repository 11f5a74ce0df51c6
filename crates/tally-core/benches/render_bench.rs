use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_core::{
    render_bar_chart, Chart, ChartConfig, ChartError, Host, Recorder, RenderOptions, Series, Theme,
};

fn categories(n: usize) -> Series {
    Series::from_pairs((0..n).map(|i| (format!("Category {i}"), ((i * 37) % 101) as f64)))
}

fn charts(n: usize) -> [(&'static str, Chart); 4] {
    [
        ("vbar", Chart::bar(categories(n), ChartConfig::vertical_bar())),
        ("hbar", Chart::bar(categories(n), ChartConfig::horizontal_bar())),
        ("donut", Chart::donut(categories(n))),
        ("line", Chart::line(categories(n), ChartConfig::line())),
    ]
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_recorded");
    let theme = Theme::light();
    for (name, chart) in charts(60) {
        group.bench_function(format!("{name}_60"), |b| {
            b.iter(|| {
                let mut rec = Recorder::new();
                chart.draw(&mut rec, 640.0, 320.0, &theme);
                black_box(rec.ops.len());
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_rgba8");
    let opts = RenderOptions { density: 2.0, ..Default::default() };
    for (name, chart) in charts(24) {
        group.bench_function(format!("{name}_24_dpr2"), |b| {
            b.iter(|| -> Result<(), ChartError> {
                let px = chart.render_to_rgba8(&opts)?;
                black_box(px);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_resize_storm(c: &mut Criterion) {
    let host = Host::new(2.0);
    host.add_surface("chartDept", 480.0, Some(240.0));
    let handle = match render_bar_chart(&host, "chartDept", categories(12), ChartConfig::vertical_bar()) {
        Ok(h) => h,
        Err(err) => panic!("initial draw failed: {err}"),
    };
    c.bench_function("resize_storm_100_then_tick", |b| {
        b.iter(|| {
            for w in 0..100 {
                host.resize_container("chartDept", 400.0 + w as f32, None);
            }
            black_box(host.clock().tick());
        });
    });
    drop(handle);
}

criterion_group!(benches, bench_layout, bench_render, bench_resize_storm);
criterion_main!(benches);
