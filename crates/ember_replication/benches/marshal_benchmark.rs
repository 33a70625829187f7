//! # Marshal Benchmark
//!
//! Measures the replication tick hot path:
//! 1. Full player marshal (create block)
//! 2. Sparse dirty marshal (a handful of changed sections)
//! 3. Movement block encoding
//!
//! Target: dirty marshal cost scales with changed sections, not schema size.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ember_replication::{
    register_builtin_schemas, FallData, LivingData, LivingMovement, MovementBlock, MovementSpeeds,
    Player,
};
use ember_shared::{Guid, Vector4};

fn bench_full_marshal(c: &mut Criterion) {
    register_builtin_schemas().expect("builtin schemas");
    let mut player = Player::new(Guid::new(1));

    let bytes = player.marshal(false).len();
    let mut group = c.benchmark_group("player_full_marshal");
    group.throughput(Throughput::Bytes(bytes as u64));
    group.bench_function("full", |b| {
        b.iter(|| black_box(player.marshal(false)));
    });
    group.finish();
}

fn bench_dirty_marshal(c: &mut Criterion) {
    register_builtin_schemas().expect("builtin schemas");
    let mut group = c.benchmark_group("player_dirty_marshal");

    for changed in [1usize, 8, 32] {
        let mut player = Player::new(Guid::new(1));
        group.bench_with_input(BenchmarkId::new("sections", changed), &changed, |b, &changed| {
            b.iter(|| {
                for i in 0..changed {
                    player.player_mut().set_explored_zones(i * 4, i as u32);
                }
                player.unit_mut().set_health(black_box(100));
                black_box(player.marshal(true))
            });
        });
    }

    group.finish();
}

fn bench_movement(c: &mut Criterion) {
    let mut living = LivingMovement::new(LivingData {
        timestamp: 1,
        pose: Vector4::new(1.0, 2.0, 3.0, 0.0),
        fall_time: 0.0,
        speeds: MovementSpeeds::DEFAULT,
    });
    living.set_falling(Some(FallData::default()));
    living.set_flying(Some(0.1));
    let mut block = MovementBlock::living(living);
    block.set_self(true);

    c.bench_function("movement_living_encode", |b| {
        b.iter(|| black_box(block.to_bytes()));
    });
}

criterion_group!(benches, bench_full_marshal, bench_dirty_marshal, bench_movement);
criterion_main!(benches);
