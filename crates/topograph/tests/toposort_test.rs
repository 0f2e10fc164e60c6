use topograph::{Error, Graph, alg, matrix};

fn graph_with_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new(vertex_count);
    for &(u, v) in edges {
        g.add_edge(u, v);
    }
    g
}

fn assert_respects(order: &[usize], vertex_count: usize, edges: &[(usize, usize)]) {
    assert_eq!(order.len(), vertex_count, "order must cover every vertex");
    let mut position = vec![usize::MAX; vertex_count];
    for (i, &v) in order.iter().enumerate() {
        assert_eq!(position[v], usize::MAX, "vertex {v} emitted twice");
        position[v] = i;
    }
    for &(u, v) in edges {
        assert!(
            position[u] < position[v],
            "edge ({u}, {v}) violated: {u} at {}, {v} at {}",
            position[u],
            position[v]
        );
    }
}

#[test]
fn sorts_the_diamond_dag_in_seed_order() {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)];
    let mut g = graph_with_edges(5, &edges);

    let order = alg::topological_sort(&mut g).expect("acyclic");
    // FIFO seeding makes the order deterministic here.
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
    assert_respects(&order, 5, &edges);
}

#[test]
fn sort_consumes_the_edges_but_not_the_vertices() {
    let mut g = graph_with_edges(3, &[(0, 1), (1, 2)]);

    alg::topological_sort(&mut g).expect("acyclic");
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 0);
    for v in 0..3 {
        assert_eq!(g.out_degree(v), 0);
        assert_eq!(g.in_degree(v), 0);
    }
}

#[test]
fn three_cycle_is_detected() {
    let mut g = graph_with_edges(3, &[(0, 1), (1, 2), (2, 0)]);

    let err = alg::topological_sort(&mut g).unwrap_err();
    assert!(matches!(err, Error::CycleDetected { remaining: 3 }));
}

#[test]
fn cycle_leaves_the_residual_edges_well_formed() {
    // An acyclic tail hanging off a 2-cycle: the tail edge is consumed, the cycle is not.
    let mut g = graph_with_edges(4, &[(0, 1), (1, 0), (2, 0), (2, 3)]);

    // Vertex 2 is the only seed; its two out-edges get removed before the queue drains.
    let err = alg::topological_sort(&mut g).unwrap_err();
    assert!(matches!(err, Error::CycleDetected { remaining: 2 }));
    assert_eq!(g.edge_count(), 2);

    // Every surviving out-entry still has its paired in-entry.
    for u in 0..g.vertex_count() {
        for v in g.out_neighbors(u) {
            assert!(
                g.in_neighbors(v).any(|w| w == u),
                "dangling half-edge ({u}, {v})"
            );
        }
    }
}

#[test]
fn self_loop_is_a_cycle() {
    let mut g = graph_with_edges(2, &[(0, 1), (1, 1)]);
    let err = alg::topological_sort(&mut g).unwrap_err();
    assert!(matches!(err, Error::CycleDetected { remaining: 1 }));
}

#[test]
fn empty_graph_sorts_to_an_empty_order() {
    let mut g = Graph::new(0);
    let order = alg::topological_sort(&mut g).expect("trivially acyclic");
    assert!(order.is_empty());
}

#[test]
fn edgeless_graph_sorts_in_seed_order() {
    let mut g = Graph::new(4);
    let order = alg::topological_sort(&mut g).expect("trivially acyclic");
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn parallel_edges_delay_readiness_until_the_last_one() {
    let mut g = graph_with_edges(2, &[(0, 1), (0, 1)]);

    let order = alg::topological_sort(&mut g).expect("acyclic");
    assert_eq!(order, vec![0, 1]);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn every_original_edge_is_respected_on_a_larger_dag() {
    // Layered DAG with cross-layer edges, deliberately inserted out of order.
    let edges = [
        (3, 7),
        (0, 4),
        (1, 4),
        (4, 6),
        (2, 5),
        (0, 3),
        (5, 7),
        (4, 5),
        (1, 2),
        (6, 7),
    ];
    let mut g = graph_with_edges(8, &edges);

    let order = alg::topological_sort(&mut g).expect("acyclic");
    assert_respects(&order, 8, &edges);
}

#[test]
fn sorted_variant_leaves_the_input_untouched() {
    let g = graph_with_edges(3, &[(0, 1), (1, 2)]);

    let order = alg::topological_sorted(&g).expect("acyclic");
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.out_neighbors(0).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn sorted_variant_detects_cycles_without_consuming_edges() {
    let g = graph_with_edges(2, &[(0, 1), (1, 0)]);

    let err = alg::topological_sorted(&g).unwrap_err();
    assert!(matches!(err, Error::CycleDetected { remaining: 2 }));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn matrix_input_sorts_end_to_end() {
    let mut g = matrix::parse("5\n01100\n00010\n00010\n00001\n00000\n").expect("valid matrix");
    let order = alg::topological_sort(&mut g).expect("acyclic");
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}
