use criterion::{Criterion, criterion_group, criterion_main};
use geoclock_rs::api::{ChartEngine, ChartEngineConfig};
use geoclock_rs::core::clock::ClockScale;
use geoclock_rs::core::{Viewport, dataset};
use geoclock_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_angle_mapping_round_trip(c: &mut Criterion) {
    let scale = ClockScale::new();
    let events = dataset::event_list().expect("valid event list");

    c.bench_function("angle_mapping_round_trip", |b| {
        b.iter(|| {
            for event in events.events() {
                let angle = scale
                    .angle_of(black_box(event.time_hours))
                    .expect("angle of event");
                let _ = scale.time_at(black_box(angle)).expect("time at angle");
            }
        })
    });
}

fn bench_full_frame_build(c: &mut Criterion) {
    let renderer = NullRenderer::default();
    let config = ChartEngineConfig::new(Viewport::new(800, 800));
    let engine = ChartEngine::new(renderer, config).expect("engine init");

    c.bench_function("full_frame_build", |b| {
        b.iter(|| {
            let frame = engine.build_frame().expect("frame build should succeed");
            black_box(frame.texts.len());
        })
    });
}

criterion_group!(benches, bench_angle_mapping_round_trip, bench_full_frame_build);
criterion_main!(benches);
