//! Benchmarks for the face-culling pass.
//!
//! Run with: cargo bench --bench meshing

use cgmath::Point3;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use voxel_chunk_mesher::{
    generate_mesh, ChunkBounds, GenerationConfig, GenerationType, World, WorldConfig,
};

fn benchmark_strategies(c: &mut Criterion) {
    let bounds = ChunkBounds::new(Point3::new(0, 0, 0), 16, 128, 16);

    let mut group = c.benchmark_group("chunk_meshing");
    group.throughput(Throughput::Elements(bounds.max_block_count() as u64));

    for generation_type in GenerationType::all() {
        let config = GenerationConfig::with_type(generation_type);
        group.bench_with_input(
            BenchmarkId::from_parameter(generation_type),
            &config,
            |b, config| b.iter(|| black_box(generate_mesh(black_box(&bounds), config))),
        );
    }

    group.finish();
}

fn benchmark_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_generation");
    group.sample_size(10);

    // Radius 2 lays out 4x4 chunks.
    group.throughput(Throughput::Elements(16));
    group.bench_function("radius_2_procedural", |b| {
        b.iter(|| {
            let mut world = World::new(WorldConfig::default()).unwrap();
            world.regenerate_all().unwrap();
            black_box(world.total_vertex_count())
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_strategies, benchmark_world);
criterion_main!(benches);
