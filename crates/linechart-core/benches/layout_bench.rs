use linechart_core::{Axis, ChartConfig, LineChart, RecordingSink, Sample};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_samples(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            Sample::new(x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("derive_{n}"), |b| {
            let samples = build_samples(n);
            b.iter(|| {
                let mut chart = LineChart::new(samples.clone(), ChartConfig::default()).expect("chart");
                let layout = chart.layout().expect("layout");
                black_box(layout.base.path.len());
            });
        });
        group.bench_function(format!("tick_toggle_{n}"), |b| {
            let mut chart = LineChart::new(build_samples(n), ChartConfig::default()).expect("chart");
            b.iter(|| {
                if !chart.increment_ticks(Axis::X) {
                    while chart.decrement_ticks(Axis::X) {}
                }
                black_box(chart.layout().expect("layout").x_axis.ticks.len());
            });
        });
        group.bench_function(format!("render_{n}"), |b| {
            let mut chart = LineChart::new(build_samples(n), ChartConfig::default()).expect("chart");
            let mut sink = RecordingSink::new();
            b.iter(|| {
                chart.render(&mut sink).expect("render");
                black_box(sink.primitives.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
