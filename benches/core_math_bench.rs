use census_scatter::api::{MarkLayer, ScatterChart, ScatterConfig};
use census_scatter::core::{Attribute, Axis, DataPoint, LinearScale, build_scale};
use census_scatter::data::StaticDataSource;
use census_scatter::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn generated_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(format!("State {i}"), format!("S{}", i % 100))
                .with_value(Attribute::Poverty, 8.0 + (t * 0.37) % 14.0)
                .with_value(Attribute::Age, 30.0 + (t * 0.11) % 12.0)
                .with_value(Attribute::Income, 35_000.0 + (t * 97.0) % 40_000.0)
                .with_value(Attribute::Healthcare, 4.0 + (t * 0.23) % 20.0)
                .with_value(Attribute::Smokes, 9.0 + (t * 0.19) % 18.0)
                .with_value(Attribute::Obesity, 20.0 + (t * 0.29) % 16.0)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (380.0, 0.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_build_scale_10k(c: &mut Criterion) {
    let points = generated_points(10_000);

    c.bench_function("build_scale_10k", |b| {
        b.iter(|| {
            for attribute in Attribute::ALL {
                let _ = build_scale(black_box(&points), attribute, (0.0, 555.0))
                    .expect("scale should build");
            }
        })
    });
}

fn bench_render_marks_10k(c: &mut Criterion) {
    let points = generated_points(10_000);
    let x_scale = build_scale(&points, Attribute::Poverty, (0.0, 555.0)).expect("x scale");
    let y_scale = build_scale(&points, Attribute::Healthcare, (380.0, 0.0)).expect("y scale");
    let mut layer = MarkLayer::new(14.0, Duration::from_millis(1000));

    c.bench_function("render_marks_10k", |b| {
        b.iter(|| {
            black_box(layer.render_marks(
                black_box(&points),
                x_scale,
                Attribute::Poverty,
                y_scale,
                Attribute::Healthcare,
                Duration::ZERO,
            ))
        })
    });
}

fn bench_selection_cascade_50(c: &mut Criterion) {
    let source = StaticDataSource::new(generated_points(50));
    let mut chart =
        ScatterChart::new(NullRenderer::default(), ScatterConfig::default()).expect("chart");
    chart.mount(&source).expect("mount");
    let keys = ["age", "income", "poverty"];

    c.bench_function("selection_cascade_50", |b| {
        let mut step = 0usize;
        b.iter(|| {
            let key = keys[step % keys.len()];
            step += 1;
            let _ = chart.click_label(Axis::X, key).expect("click");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_build_scale_10k,
    bench_render_marks_10k,
    bench_selection_cascade_50
);
criterion_main!(benches);
