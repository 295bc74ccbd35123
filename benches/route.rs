use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shortest_route::graph::generators::{generate_grid, generate_random};
use shortest_route::{find_shortest_path, find_shortest_paths};

fn benchmark_point_to_point(c: &mut Criterion) {
    let random = generate_random(20_000, 3.0, 100, 42);
    let grid = generate_grid(100, 100, &[]);

    c.bench_function("random_20k_single_query", |b| {
        b.iter(|| black_box(find_shortest_path(&random, &0, &19_999)))
    });

    c.bench_function("grid_100x100_corner_to_corner", |b| {
        b.iter(|| black_box(find_shortest_path(&grid, &0, &9_999)))
    });

    let queries: Vec<(usize, usize)> = (0..64).map(|i| (i * 7, 19_999 - i * 13)).collect();
    c.bench_function("random_20k_batch_64", |b| {
        b.iter(|| black_box(find_shortest_paths(&random, &queries)))
    });
}

criterion_group!(benches, benchmark_point_to_point);
criterion_main!(benches);
