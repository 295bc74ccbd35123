use shortest_route::graph::generators::generate_random;
use shortest_route::{find_shortest_path, find_shortest_paths, Distance};

#[test]
fn test_batch_matches_single_queries() {
    let graph = generate_random(500, 3.0, 40, 2024);
    let queries: Vec<(usize, usize)> = (0..100)
        .map(|i| (i * 3 % 500, (i * 37 + 11) % 500))
        .collect();

    let batch = find_shortest_paths(&graph, &queries);
    assert_eq!(batch.len(), queries.len());

    for ((start, end), result) in queries.iter().zip(&batch) {
        let (distance, path) = find_shortest_path(&graph, start, end);
        assert_eq!(result.distance, distance, "query {} -> {}", start, end);
        assert_eq!(result.path.len(), path.len());
        if result.is_reachable() {
            assert_eq!(result.path.first(), Some(start));
            assert_eq!(result.path.last(), Some(end));
        }
    }
}

#[test]
fn test_batch_with_no_queries() {
    let graph = generate_random(10, 1.0, 5, 1);
    let queries: Vec<(usize, usize)> = Vec::new();
    let batch = find_shortest_paths(&graph, &queries);
    assert!(batch.is_empty());
}

#[test]
fn test_batch_reports_unreachable_per_query() {
    let graph = generate_random(10, 0.0, 5, 1);
    let batch = find_shortest_paths(&graph, &[(0, 0), (0, 9)]);

    assert_eq!(batch[0].distance, Distance::Finite(0));
    assert_eq!(batch[0].path, vec![0]);
    assert_eq!(batch[1].distance, Distance::Infinite);
    assert!(batch[1].path.is_empty());
    assert_eq!(batch[1].hop_count(), 0);
}
