use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyoti_core::{
    AnalyticBackend, Body, CalcFlags, Engine, EngineConfig, EphemerisBackend, HouseSystem,
    solve_kepler,
};

const JD: f64 = 2_460_000.5;

fn kepler_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("kepler");
    group.bench_function("e_0.05", |b| {
        b.iter(|| solve_kepler(black_box(123.4), black_box(0.05)))
    });
    group.bench_function("e_0.25", |b| {
        b.iter(|| solve_kepler(black_box(123.4), black_box(0.25)))
    });
    group.finish();
}

fn longitude_bench(c: &mut Criterion) {
    let backend = AnalyticBackend::new();
    let engine = Engine::analytic(EngineConfig::default()).expect("engine");

    let mut group = c.benchmark_group("longitude");
    group.bench_function("saturn_tropical", |b| {
        b.iter(|| backend.tropical_longitude(black_box(JD), Body::Saturn))
    });
    group.bench_function("moon_tropical", |b| {
        b.iter(|| backend.tropical_longitude(black_box(JD), Body::Moon))
    });
    group.bench_function("mars_sidereal_speed", |b| {
        b.iter(|| engine.body_longitude(black_box(JD), Body::Mars, CalcFlags::SIDEREAL_WITH_SPEED))
    });
    group.bench_function("all_bodies_sidereal_speed", |b| {
        b.iter(|| {
            for &body in Body::all() {
                let _ = engine.body_longitude(black_box(JD), body, CalcFlags::SIDEREAL_WITH_SPEED);
            }
        })
    });
    group.finish();
}

fn houses_bench(c: &mut Criterion) {
    let engine = Engine::analytic(EngineConfig::default()).expect("engine");
    c.bench_function("ascendant_and_houses", |b| {
        b.iter(|| {
            engine.ascendant_and_houses(
                black_box(JD),
                black_box(28.6139),
                black_box(77.2090),
                HouseSystem::WholeSign,
            )
        })
    });
}

criterion_group!(benches, kepler_bench, longitude_bench, houses_bench);
criterion_main!(benches);
