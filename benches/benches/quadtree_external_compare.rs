// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bramble_quadtree::{PlotPoint, QuadTree};
use rstar::RTree;

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

fn gen_points(count: usize, extent: f64) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    for _ in 0..count {
        out.push([rng.next_f64() * extent, rng.next_f64() * extent]);
    }
    out
}

fn bench_quadtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_external_compare");
    for &n in &[1024usize, 4096] {
        let points = gen_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("quadtree_build_traverse_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 1000.0, 1000.0);
                    tree.insert_points(
                        points
                            .into_iter()
                            .enumerate()
                            .map(|(i, [x, y])| PlotPoint::new(x, y, i as u32)),
                    );
                    let cells: usize = tree.cells().count();
                    black_box((tree.root().mass(), cells));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let tree = RTree::bulk_load(points);
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_sequential_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut tree = RTree::new();
                    for p in points {
                        tree.insert(p);
                    }
                    black_box(tree.size());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_external_compare);
criterion_main!(benches);
