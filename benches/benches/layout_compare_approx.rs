// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bramble_layout::{Approximation, ForceLayout, LayoutOptions, Placement};
use bramble_quadtree::{PlotPoint, QuadTree};
use kurbo::{Point, Rect};

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

fn gen_points(count: usize, width: f64, height: f64) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push((rng.next_f64() * width, rng.next_f64() * height));
    }
    out
}

fn ring_graph(n: usize, options: LayoutOptions) -> ForceLayout {
    let mut layout = ForceLayout::new(
        Rect::new(0.0, 0.0, 1000.0, 1000.0),
        LayoutOptions {
            placement: Placement::Scatter,
            ..options
        },
    );
    let ids: Vec<_> = (0..n)
        .map(|_| layout.add_node(Point::new(0.0, 0.0)))
        .collect();
    for w in ids.windows(2) {
        layout.add_link(w[0], w[1]);
    }
    layout.add_link(ids[n - 1], ids[0]);
    layout.place();
    layout
}

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[256usize, 1024, 4096] {
        let points = gen_points(n, 1000.0, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut tree: QuadTree<u32> = QuadTree::new(0.0, 0.0, 1000.0, 1000.0);
                    tree.insert_points(
                        points
                            .into_iter()
                            .enumerate()
                            .map(|(i, (x, y))| PlotPoint::new(x, y, i as u32)),
                    );
                    black_box(tree.root().mass());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_step_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_exact");
    for &n in &[64usize, 256, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("step_n{}", n), |b| {
            b.iter_batched(
                || {
                    ring_graph(
                        n,
                        LayoutOptions {
                            approximation: Approximation::Exact,
                            ..LayoutOptions::default()
                        },
                    )
                },
                |mut layout| {
                    layout.step();
                    black_box(layout.iteration());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_step_barnes_hut(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_barnes_hut");
    for &n in &[64usize, 256, 1024, 4096] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("step_n{}", n), |b| {
            b.iter_batched(
                || {
                    ring_graph(
                        n,
                        LayoutOptions {
                            approximation: Approximation::BarnesHut,
                            ..LayoutOptions::default()
                        },
                    )
                },
                |mut layout| {
                    layout.step();
                    black_box(layout.iteration());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_run_short(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_short");
    for &approximation in &[Approximation::Exact, Approximation::BarnesHut] {
        group.bench_function(format!("run_50_iterations_{:?}", approximation), |b| {
            b.iter_batched(
                || {
                    ring_graph(
                        256,
                        LayoutOptions {
                            approximation,
                            max_iterations: 50,
                            ..LayoutOptions::default()
                        },
                    )
                },
                |mut layout| {
                    layout.run();
                    black_box(layout.iteration());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_tree_build,
    bench_step_exact,
    bench_step_barnes_hut,
    bench_run_short,
);
criterion_main!(benches);
