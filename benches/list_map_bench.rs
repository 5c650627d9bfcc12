//! Benchmark for ListMap vs standard BTreeMap.
//!
//! ListMap is a linear-scan container aimed at small collections; the
//! comparison documents where the crossover against BTreeMap sits rather
//! than claiming competitiveness at scale.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use listmap::ListMap;
use std::collections::BTreeMap;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [10, 100, 1000] {
        // ListMap insert
        group.bench_with_input(BenchmarkId::new("ListMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = ListMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });

        // Standard BTreeMap insert
        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = BTreeMap::new();
                    for index in 0..size {
                        map.insert(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [10, 100, 1000] {
        // Prepare data outside the measured loop
        let list_map: ListMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let btree_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("ListMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for index in 0..size {
                    black_box(list_map.get(black_box(&index)));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for index in 0..size {
                        black_box(btree_map.get(black_box(&index)));
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// iterate Benchmark
// =============================================================================

fn benchmark_iterate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iterate");

    for size in [10, 100, 1000] {
        let list_map: ListMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let btree_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("ListMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i32 = list_map.values().sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i32 = btree_map.values().sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [10, 100, 1000] {
        let list_map: ListMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let btree_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("ListMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = list_map.clone();
                for index in 0..size {
                    black_box(map.remove(black_box(&index)));
                }
                black_box(map)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = btree_map.clone();
                    for index in 0..size {
                        black_box(map.remove(black_box(&index)));
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_get,
    benchmark_iterate,
    benchmark_remove
);
criterion_main!(benches);
