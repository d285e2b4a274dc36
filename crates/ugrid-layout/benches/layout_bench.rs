//! Benchmarks for uniform grid layout passes.
//!
//! Run with: cargo bench -p ugrid-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use ugrid_harness::TestItem;
use ugrid_layout::{GridDimensions, GridProperties, Size, UniformGrid};

fn items(n: usize) -> Vec<TestItem> {
    (0..n)
        .map(|i| {
            let item = TestItem::fixed('x', 8.0 + (i % 5) as f64, 4.0 + (i % 3) as f64);
            if i % 7 == 3 { item.collapsed() } else { item }
        })
        .collect()
}

// ============================================================================
// Shape inference
// ============================================================================

fn bench_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/uniform_grid/infer");

    for (name, props) in [
        ("auto", GridProperties::default()),
        ("columns", GridProperties::new(0, 7, 3)),
        ("rows", GridProperties::new(5, 0, 0)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(GridDimensions::infer(black_box(&props), black_box(997))))
        });
    }

    group.finish();
}

// ============================================================================
// Full measure + arrange
// ============================================================================

fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/uniform_grid/pass");

    for n in [16usize, 256, 4096] {
        let mut list = items(n);
        let mut grid = UniformGrid::new().columns(16).first_column(2);

        group.bench_with_input(BenchmarkId::new("measure_arrange", n), &n, |b, _| {
            b.iter(|| {
                let desired = grid.measure(&mut list, Size::new(1920.0, f64::INFINITY));
                let size = grid.arrange(&mut list, Size::new(1920.0, desired.height));
                black_box(size);
                for item in &mut list {
                    item.offered.clear();
                    item.placed.clear();
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_infer, bench_layout_pass);
criterion_main!(benches);
