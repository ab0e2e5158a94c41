use chart_core::{Attributes, Chart, ChartKind, FixedViewport, Theme};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn series(n: usize) -> String {
    (0..n)
        .map(|i| format!("{:.2}", (i as f64 * 0.37).sin().abs() * 100.0 + 1.0))
        .collect::<Vec<_>>()
        .join(";")
}

fn bench_animation(c: &mut Criterion) {
    let vp = FixedViewport::new(800.0, 500.0);
    let mut group = c.benchmark_group("mount_run_to_completion");
    for &n in &[16usize, 256usize] {
        let attrs = Attributes::new().with("data", series(n));
        for kind in [ChartKind::Pie, ChartKind::Bar] {
            group.bench_function(format!("{}_{n}", kind.tag()), |b| {
                b.iter(|| {
                    let chart = Chart::from_attrs(kind, &attrs).expect("chart");
                    let mut mounted = chart.mount(0.0);
                    black_box(mounted.run_to_completion(16.0, &vp));
                });
            });
        }
    }
    group.finish();
}

fn bench_svg(c: &mut Criterion) {
    let theme = Theme::light();
    let vp = FixedViewport::new(800.0, 500.0);
    let mut group = c.benchmark_group("settled_svg");
    for &n in &[10usize, 100usize] {
        let labels = (0..n).map(|i| format!("user{i}")).collect::<Vec<_>>().join(";");
        let ids = (0..n).map(|i| format!("input_user{i}")).collect::<Vec<_>>().join(";");
        let radar = Attributes::new()
            .with("scores", series(n))
            .with("labels", labels)
            .with("ids", ids)
            .with("max", "102");
        group.bench_function(format!("radar_{n}"), |b| {
            b.iter(|| {
                let mut chart = Chart::from_attrs(ChartKind::Radar, &radar).expect("chart");
                black_box(chart.settled_scene(&vp, &theme).to_svg(&theme));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_animation, bench_svg);
criterion_main!(benches);
