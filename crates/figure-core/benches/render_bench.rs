use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figure_core::{Axis, Figure, RenderOptions, Series, Theme};

fn build_figure_xy(n: usize) -> Figure {
    let mut fig = Figure::new(RenderOptions::sized(800, 500), Theme::whitegrid());
    let data: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = i as f64;
            (x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect();
    if let Ok(panel) = fig.panel_mut(0) {
        panel.set_x_axis(Axis::new("X", 0.0, (n - 1) as f64));
        panel.set_y_axis(Axis::new("Y", -12.0, 12.0));
        panel.add_series(Series::line(data).with_fill_to(0.0));
    }
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let fig = build_figure_xy(n);
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
