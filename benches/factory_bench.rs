// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

// Criterion benchmarks for identifier allocation, collections and codecs.

use std::sync::Arc;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use dbid::ByteCodec;
use dbid::DbidFactory;
use dbid::Dbids;
use dbid::FactoryConfig;
use dbid::FixedWidthCodec;
use dbid::ModifiableDbids;

fn untracked() -> DbidFactory {
    return DbidFactory::with_config(FactoryConfig::new().with_liveness_tracking(false));
}

// =============================================================================
// Allocation
// =============================================================================

fn bench_single_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_allocation");

    for count in [1_000usize, 10_000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("fresh", count), &count, |b, &count| {
            b.iter(|| {
                let factory = untracked();
                for _ in 0..count {
                    black_box(factory.generate_single());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("recycled", count), &count, |b, &count| {
            b.iter(|| {
                let factory = untracked();
                let ids: Vec<_> = (0..count).map(|_| factory.generate_single()).collect();
                for id in ids {
                    factory.deallocate_single(id).unwrap();
                }
                for _ in 0..count {
                    black_box(factory.generate_single());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("tracked", count), &count, |b, &count| {
            b.iter(|| {
                let factory = DbidFactory::with_config(FactoryConfig::new().with_liveness_tracking(true));
                for _ in 0..count {
                    black_box(factory.generate_single());
                }
            });
        });
    }

    group.finish();
}

fn bench_contended_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_allocation");
    let per_thread = 2_000usize;

    for threads in [2usize, 4] {
        group.throughput(Throughput::Elements((threads * per_thread) as u64));
        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |b, &threads| {
            b.iter(|| {
                let factory = Arc::new(untracked());
                std::thread::scope(|scope| {
                    for _ in 0..threads {
                        let factory = Arc::clone(&factory);
                        scope.spawn(move || {
                            for _ in 0..per_thread {
                                black_box(factory.generate_single());
                            }
                        });
                    }
                });
            });
        });
    }

    group.finish();
}

fn bench_range_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_allocation");

    group.bench_function("allocate_release_cycle", |b| {
        b.iter(|| {
            let factory = untracked();
            let ranges: Vec<_> = (1..=64)
                .map(|size| factory.generate_static_range(size).unwrap())
                .collect();
            for range in ranges.into_iter().step_by(2) {
                factory.deallocate_range(range).unwrap();
            }
            for size in 1..=32 {
                black_box(factory.generate_static_range(size).unwrap());
            }
        });
    });

    group.finish();
}

// =============================================================================
// Collections
// =============================================================================

fn bench_collection_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_build");
    let count = 10_000usize;
    let factory = untracked();
    let range = factory.generate_static_range(count).unwrap();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("array", |b| {
        b.iter(|| black_box(factory.new_array_from(&range).len()));
    });

    group.bench_function("hash_set", |b| {
        b.iter(|| black_box(factory.new_hash_set_from(&range).len()));
    });

    group.bench_function("tree_set", |b| {
        b.iter(|| black_box(factory.new_tree_set_from(&range).len()));
    });

    group.finish();
}

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let factory = untracked();
    let range = factory.generate_static_range(4_096).unwrap();
    let hash = factory.new_hash_set_from(&range);
    let tree = factory.new_tree_set_from(&range);
    let mut lookups = factory.new_array();
    for offset in (0..range.len()).step_by(7) {
        lookups.add(range.get(offset).unwrap());
    }

    group.bench_function("hash_set", |b| {
        b.iter(|| lookups.iter().filter(|&id| hash.contains(id)).count());
    });

    group.bench_function("tree_set", |b| {
        b.iter(|| lookups.iter().filter(|&id| tree.contains(id)).count());
    });

    group.bench_function("range", |b| {
        b.iter(|| lookups.iter().filter(|&id| range.contains(id)).count());
    });

    group.finish();
}

// =============================================================================
// Codecs
// =============================================================================

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs");
    let factory = untracked();
    let range = factory.generate_static_range(10_000).unwrap();
    let fixed = factory.fixed_width_codec();
    let varint = factory.codec();

    group.throughput(Throughput::Elements(range.len() as u64));

    group.bench_function("fixed_encode_into_page", |b| {
        let mut page = vec![0u8; range.len() * fixed.fixed_len()];
        b.iter(|| {
            for (slot, id) in page.chunks_exact_mut(fixed.fixed_len()).zip(range.iter()) {
                fixed.encode_into(&id, slot).unwrap();
            }
            black_box(page[0])
        });
    });

    group.bench_function("varint_encode_decode", |b| {
        let mut buf = Vec::with_capacity(range.len() * 3);
        b.iter(|| {
            buf.clear();
            for id in range.iter() {
                varint.encode(&id, &mut buf).unwrap();
            }
            let mut rest = buf.as_slice();
            let mut count = 0;
            while !rest.is_empty() {
                let (_, used) = varint.decode(rest).unwrap();
                rest = &rest[used..];
                count += 1;
            }
            black_box(count)
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_single_allocation,
    bench_contended_allocation,
    bench_range_allocation,
    bench_collection_build,
    bench_membership,
    bench_codecs,
);

criterion_main!(benches);
