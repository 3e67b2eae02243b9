use super::*;
use crate::helpers::*;
use crate::utils::DefaultRandom;

fn uniform_pheromone(graph: &RoadGraph) -> DenseMatrix {
    let mut pheromone = DenseMatrix::new(graph.node_count());
    for row in 0..graph.node_count() {
        for col in graph.adjacency.nonzero_row(row) {
            pheromone.set(row, col, 1.);
        }
    }

    pheromone
}

fn path_distance(graph: &RoadGraph, path: &[usize]) -> Float {
    path.windows(2).map(|edge| graph.distance_real.get(edge[0], edge[1])).sum()
}

#[test]
fn can_build_path_within_corridor() {
    let graph = test_graph(&diamond_edges(), (0., 0.), (2., 0.));
    let pheromone = uniform_pheromone(&graph);
    let config = test_config(0., 10., BoundKind::Distance);
    let params = AcoParams::from_weights(&config.weights);
    let ant = Ant::new(&graph, &pheromone, &config, &params, DefaultRandom::with_seed(1));

    let ant_path = ant.build_path().expect("no path found");

    assert_eq!(ant_path.path.first(), Some(&graph.start));
    assert_eq!(ant_path.path.last(), Some(&graph.end));
    assert_eq!(ant_path.totals.segments, 2);
    assert_eq!(ant_path.totals.distance_real, 2.);
    assert_eq!(ant_path.ratio, 1.);
}

#[test]
fn can_march_deterministically_along_chain() {
    let graph = test_graph(&chain_edges(10), (0., 0.), (9., 0.));
    let pheromone = uniform_pheromone(&graph);
    let config = test_config(9., 9., BoundKind::Distance);
    let params = AcoParams::from_weights(&config.weights);
    let ant = Ant::new(&graph, &pheromone, &config, &params, DefaultRandom::with_seed(1));

    let ant_path = ant.build_path().expect("no path found");

    assert_eq!(ant_path.path, (0..10).collect::<Vec<_>>());
    assert_eq!(ant_path.totals.distance_real, 9.);
    assert_eq!(ant_path.totals.segments, 9);
}

#[test]
fn can_recover_from_cul_de_sac() {
    // a cycle hanging off the middle node lures ants away from the direct route
    let edges = vec![
        test_edge((0., 0.), (1., 0.), 1.),
        test_edge((1., 0.), (2., 0.), 1.),
        test_edge((1., 0.), (1., 1.), 1.),
        test_edge((1., 1.), (2., 1.), 1.),
        test_edge((2., 1.), (1., 0.), 1.),
    ];
    let graph = test_graph(&edges, (0., 0.), (2., 0.));
    let pheromone = uniform_pheromone(&graph);
    let config = test_config(0., 10., BoundKind::Segment);
    let params = AcoParams::from_weights(&config.weights);

    for seed in 0..20 {
        let ant = Ant::new(&graph, &pheromone, &config, &params, DefaultRandom::with_seed(seed));
        let ant_path = ant.build_path().expect("no path found");

        assert_eq!(ant_path.path.first(), Some(&graph.start));
        assert_eq!(ant_path.path.last(), Some(&graph.end));

        let unique: FxHashSet<usize> = ant_path.path.iter().copied().collect();
        assert_eq!(unique.len(), ant_path.path.len());
        assert_eq!(ant_path.totals.distance_real, path_distance(&graph, &ant_path.path));
    }
}

#[test]
fn cannot_build_path_when_corridor_is_empty() {
    // every simple path through the diamond has distance two
    let graph = test_graph(&diamond_edges(), (0., 0.), (2., 0.));
    let pheromone = uniform_pheromone(&graph);
    let config = test_config(3., 4., BoundKind::Distance);
    let params = AcoParams::from_weights(&config.weights);
    let ant = Ant::new(&graph, &pheromone, &config, &params, DefaultRandom::with_seed(1));

    assert!(ant.build_path().is_none());
}

#[test]
fn can_check_corridor_metric_per_bound_kind() {
    let totals = PathTotals { distance_real: 5., segments: 3, ..PathTotals::default() };

    assert_eq!(totals.metric(BoundKind::Distance), 5.);
    assert_eq!(totals.metric(BoundKind::Segment), 3.);
}
