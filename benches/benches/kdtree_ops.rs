// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_kdtree::{KdTree, Number, Point};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, dim: usize, extent: f64, seed: u64) -> Vec<Point<f64>> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let coords = (0..dim).map(|_| rng.next_f64() * extent).collect();
            Point::new(coords).unwrap()
        })
        .collect()
}

fn gen_grid_points(n: usize) -> Vec<Point<i64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point::from([x as i64, y as i64]));
        }
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000] {
        let points = gen_random_points(n, 2, 1000.0, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_2d_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| black_box(KdTree::from_points(points)),
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_random_points(10_000, 3, 1000.0, 0xBADC_F00D_1234_5678);
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("random_3d_n10000", |b| {
        b.iter_batched(
            || points.clone(),
            |points| black_box(KdTree::from_points(points)),
            BatchSize::SmallInput,
        )
    });
    // Row-major grid input degrades towards a list on the first axis.
    let grid = gen_grid_points(32);
    group.throughput(Throughput::Elements(grid.len() as u64));
    group.bench_function("grid_2d_n32", |b| {
        b.iter_batched(
            || grid.clone(),
            |points| black_box(KdTree::from_points(points)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for &n in &[1_000usize, 10_000] {
        let points = gen_random_points(n, 2, 1000.0, 0xC1A5_7E55_9999_ABCD);
        let misses = gen_random_points(n, 2, 1000.0, 0xFACE_FEED_CAFE_BABE);
        let tree = KdTree::from_points(points.iter().cloned());
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("hits_n{}", n), |b| {
            b.iter(|| {
                let found = points
                    .iter()
                    .filter(|p| tree.contains(p).unwrap_or(false))
                    .count();
                black_box(found);
            })
        });
        group.bench_function(format!("misses_n{}", n), |b| {
            b.iter(|| {
                let found = misses
                    .iter()
                    .filter(|p| tree.contains(p).unwrap_or(false))
                    .count();
                black_box(found);
            })
        });
    }
    group.finish();
}

fn bench_persistent_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("persistent_updates");
    let points = gen_random_points(10_000, 2, 1000.0, 0x0DDB_A11C_0FFE_E000);
    let tree = KdTree::from_points(points.iter().cloned());
    let extra = gen_random_points(1_000, 2, 1000.0, 0x5EED_5EED_5EED_5EED);

    group.throughput(Throughput::Elements(extra.len() as u64));
    group.bench_function("insert_1000_into_n10000", |b| {
        b.iter(|| {
            let mut t = tree.clone();
            for p in &extra {
                t = t.insert(p.clone()).unwrap();
            }
            black_box(t.len());
        })
    });

    let victims: Vec<_> = points.iter().step_by(10).cloned().collect();
    group.throughput(Throughput::Elements(victims.len() as u64));
    group.bench_function("delete_1000_from_n10000", |b| {
        b.iter(|| {
            let mut t = tree.clone();
            for p in &victims {
                t = t.delete(p).unwrap();
            }
            black_box(t.len());
        })
    });

    // Keeping every version alive is what path copying makes cheap.
    group.bench_function("insert_1000_keep_versions", |b| {
        b.iter(|| {
            let mut versions = Vec::with_capacity(extra.len() + 1);
            versions.push(tree.clone());
            for p in &extra {
                let next = versions[versions.len() - 1].insert(p.clone()).unwrap();
                versions.push(next);
            }
            black_box(versions.len());
        })
    });
    group.finish();
}

fn bench_find_minimum(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_minimum");
    let points = gen_random_points(10_000, 3, 1000.0, 0xA5A5_5A5A_A5A5_5A5A);
    let tree = KdTree::from_points(points);
    for axis in 0..3 {
        group.bench_function(format!("axis{}_n10000", axis), |b| {
            b.iter(|| black_box(tree.find_minimum(axis).unwrap()))
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    let a = KdTree::from_points(gen_random_points(5_000, 2, 1000.0, 0x1111_2222_3333_4444));
    let b_tree = KdTree::from_points(gen_random_points(1_000, 2, 1000.0, 0x5555_6666_7777_8888));
    group.bench_function("merge_1000_into_5000", |b| {
        b.iter(|| black_box(a.merge(&b_tree).unwrap()))
    });
    group.bench_function("graft_1000_into_5000", |b| {
        b.iter(|| black_box(a.insert_tree(&b_tree).unwrap()))
    });
    group.finish();
}

fn bench_mixed_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_numbers");
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    let points: Vec<Point<Number>> = (0..5_000)
        .map(|i| {
            let x = if i % 2 == 0 {
                Number::Int((rng.next_u64() % 1000) as i64)
            } else {
                Number::Float(rng.next_f64() * 1000.0)
            };
            Point::from([x, Number::Float(rng.next_f64() * 1000.0)])
        })
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("build_contains_n5000", |b| {
        b.iter_batched(
            || points.clone(),
            |points| {
                let tree = KdTree::from_points(points.iter().cloned());
                let found = points
                    .iter()
                    .filter(|p| tree.contains(p).unwrap_or(false))
                    .count();
                black_box(found);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_contains,
    bench_persistent_updates,
    bench_find_minimum,
    bench_merge,
    bench_mixed_numbers
);
criterion_main!(benches);
