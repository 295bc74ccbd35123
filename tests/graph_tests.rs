use ordered_float::OrderedFloat;
use shortest_route::graph::generators::{generate_grid, generate_random};
use shortest_route::graph::{AdjacencyGraph, Graph, MutableGraph, PathWeight};
use shortest_route::Error;

#[test]
fn test_json_graph_keeps_undeclared_neighbors() {
    let graph = AdjacencyGraph::<String, OrderedFloat<f64>>::from_json_str(
        r#"{"A": {"B": 1.5, "C": 2}, "B": {}}"#,
    )
    .unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert!(!graph.has_node(&"C".to_string()));
    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(
        graph.edge_weight(&"A".to_string(), &"B".to_string()),
        Some(OrderedFloat(1.5))
    );
    assert_eq!(graph.outgoing_edges(&"C".to_string()).count(), 0);
}

#[test]
fn test_json_graph_rejects_malformed_input() {
    let err = AdjacencyGraph::<String, OrderedFloat<f64>>::from_json_str(r#"{"A": ["B"]}"#)
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn test_json_graph_from_reader() {
    let json = br#"{"x": {"y": 4}}"#;
    let graph = AdjacencyGraph::<String, OrderedFloat<f64>>::from_json_reader(&json[..]).unwrap();
    assert!(graph.has_edge(&"x".to_string(), &"y".to_string()));
}

#[test]
fn test_validate_non_negative() {
    let mut graph: AdjacencyGraph<&str, i32> = [("a", "b", 3), ("b", "c", 0)].into_iter().collect();
    assert!(graph.validate_non_negative().is_ok());

    graph.add_edge("c", "a", -2);
    match graph.validate_non_negative() {
        Err(Error::NegativeWeight { from, to, weight }) => {
            assert_eq!(from, "\"c\"");
            assert_eq!(to, "\"a\"");
            assert_eq!(weight, "-2");
        }
        other => panic!("expected negative weight error, got {:?}", other),
    }
}

#[test]
fn test_add_edge_overwrites_and_declares_source_only() {
    let mut graph: AdjacencyGraph<u32, u32> = AdjacencyGraph::new();
    graph.add_edge(1, 2, 10);
    graph.add_edge(1, 2, 4);

    assert_eq!(graph.edge_weight(&1, &2), Some(4));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.has_node(&1));
    assert!(!graph.has_node(&2));

    assert!(graph.add_node(2));
    assert!(!graph.add_node(2));
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_generators_are_seeded() {
    let a = generate_random(50, 2.0, 10, 11);
    let b = generate_random(50, 2.0, 10, 11);
    assert_eq!(a, b);
    assert_eq!(a.node_count(), 50);

    let empty = generate_random(0, 2.0, 10, 11);
    assert_eq!(empty.node_count(), 0);
}

#[test]
fn test_grid_blocks_cells() {
    let graph = generate_grid(3, 3, &[(1, 1)]);
    assert_eq!(graph.node_count(), 9);
    assert_eq!(graph.outgoing_edges(&4).count(), 0);
    assert!(!graph.has_edge(&0, &4));
    assert_eq!(graph.edge_weight(&0, &1), Some(OrderedFloat(1.0)));
}

#[test]
fn test_path_weight_checked_extend() {
    assert_eq!(7u32.checked_extend(3), Some(10));
    assert_eq!(u32::MAX.checked_extend(1), None);
    assert_eq!((-5i64).checked_extend(2), Some(-3));

    let huge = OrderedFloat(f64::MAX);
    assert_eq!(huge.checked_extend(huge), Some(OrderedFloat(f64::INFINITY)));
}
