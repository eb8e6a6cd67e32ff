//! Mesh generation and frame composition benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery::geometry::{CubeMesh, OrbitRingMesh, SphereMesh};
use orrery::options::Options;
use orrery::scene::{BodyTable, Scene};

fn sphere_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_generation");

    for detail in [16, 64, 100, 255] {
        let _ = group.bench_function(format!("{detail}x{detail}"), |b| {
            b.iter(|| black_box(SphereMesh::with_detail(black_box(1.0), detail)))
        });
    }
    group.finish();
}

fn ring_and_cube_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("orbit_ring_360", |b| {
        b.iter(|| black_box(OrbitRingMesh::new(black_box(250.0), 360)))
    });
    let _ = c.bench_function("cube", |b| b.iter(|| black_box(CubeMesh::new(black_box(1.0)))));
}

fn compose_benchmark(c: &mut Criterion) {
    let scene = Scene::from_table(&BodyTable::solar_system(), &Options::default())
        .expect("solar system table is valid");
    let _ = c.bench_function("compose_solar_system", |b| {
        b.iter(|| black_box(scene.compose(black_box(12.5))))
    });
}

criterion_group!(benches, sphere_benchmark, ring_and_cube_benchmark, compose_benchmark);
criterion_main!(benches);
