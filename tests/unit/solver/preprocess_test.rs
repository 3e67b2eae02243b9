use super::*;
use crate::helpers::*;

#[test]
fn can_filter_nodes_beyond_reach() {
    let from_start = [0., 1., 5.];
    let from_end = [5., 1., 0.];

    let valid = valid_nodes(&from_start, Some(&from_end), 3.);

    assert_eq!(valid, vec![1]);
}

#[test]
fn can_keep_reachable_nodes_in_open_ended_query() {
    let from_start = [0., 2., 5.];

    let valid = valid_nodes(&from_start, None, 3.);

    assert_eq!(valid, vec![0, 1]);
}

#[test]
fn can_compute_metric_per_bound_kind() {
    let edges = vec![
        test_edge((0., 0.), (1., 0.), 5.),
        test_edge((0., 0.), (0., 1.), 1.),
        test_edge((0., 1.), (1., 0.), 1.),
    ];
    let graph = test_graph(&edges, (0., 0.), (1., 0.));

    let distances = metric_from(&graph, graph.start, BoundKind::Distance);
    let hops = metric_from(&graph, graph.start, BoundKind::Segment);

    assert_eq!(distances[graph.end], 2.);
    assert_eq!(hops[graph.end], 1.);
}

#[test]
fn can_keep_whole_graph_when_corridor_is_wide() {
    let mut graph = test_graph(&diamond_edges(), (0., 0.), (2., 0.));
    let config = test_config(0., 10., BoundKind::Distance);

    apply_bound_constraint(&mut graph, &config).expect("constraint rejected a feasible corridor");

    assert_eq!(graph.node_count(), 4);
}

#[test]
fn cannot_accept_corridor_below_shortest_reach() {
    // pruning interior nodes disconnects the query nodes entirely
    let mut graph = test_graph(&diamond_edges(), (0., 0.), (2., 0.));
    let config = test_config(0., 1.5, BoundKind::Distance);

    let result = apply_bound_constraint(&mut graph, &config);

    assert_eq!(result, Err(SearchError::UnreachableTarget));
}

#[test]
fn cannot_accept_disconnected_query_nodes() {
    let mut graph = test_graph(&disconnected_edges(), (0., 0.), (10., 0.));
    let config = test_config(0., 10., BoundKind::Distance);

    let result = apply_bound_constraint(&mut graph, &config);

    assert_eq!(result, Err(SearchError::UnreachableTarget));
}

#[test]
fn cannot_accept_unattainable_lower_bound() {
    let mut graph = test_graph(&diamond_edges(), (0., 0.), (2., 0.));
    let config = test_config(5., 10., BoundKind::Distance);

    let result = apply_bound_constraint(&mut graph, &config);

    assert_eq!(result, Err(SearchError::InfeasibleConstraint { min_bound: 5., shortest: 2. }));
}

#[test]
fn can_prune_nodes_outside_segment_corridor() {
    // the appendage node cannot lie on any path of at most two segments
    let mut edges = diamond_edges();
    edges.extend([test_edge((1., 1.), (5., 5.), 1.), test_edge((5., 5.), (1., -1.), 1.)]);
    let mut graph = test_graph(&edges, (0., 0.), (2., 0.));
    let config = test_config(0., 2., BoundKind::Segment);

    apply_bound_constraint(&mut graph, &config).expect("constraint rejected a feasible corridor");

    assert_eq!(graph.node_count(), 4);
    assert!(!graph.coords.contains(&(5., 5.)));
}
