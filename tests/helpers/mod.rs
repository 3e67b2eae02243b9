//! Shared fixtures for unit tests.

use crate::models::{RatioWeights, RoadEdge, RoadGraph};
use crate::solver::{BoundKind, SearchConfig};
use crate::utils::{Environment, Float, Quota};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Creates an edge with unit attributes and the given length for both distance kinds.
pub fn test_edge(source: (Float, Float), target: (Float, Float), distance: Float) -> RoadEdge {
    RoadEdge {
        source,
        target,
        distance_std: distance,
        distance_real: distance,
        score: 1.,
        total_std: 1.,
        total_real: 1.,
    }
}

/// A diamond: two equal length paths between (0., 0.) and (2., 0.).
pub fn diamond_edges() -> Vec<RoadEdge> {
    vec![
        test_edge((0., 0.), (1., 1.), 1.),
        test_edge((1., 1.), (2., 0.), 1.),
        test_edge((0., 0.), (1., -1.), 1.),
        test_edge((1., -1.), (2., 0.), 1.),
    ]
}

/// A linear chain of the given amount of nodes with unit edges along the x axis.
pub fn chain_edges(nodes: usize) -> Vec<RoadEdge> {
    (0..nodes - 1).map(|i| test_edge((i as Float, 0.), (i as Float + 1., 0.), 1.)).collect()
}

/// Two triangles with no connection in between.
pub fn disconnected_edges() -> Vec<RoadEdge> {
    vec![
        test_edge((0., 0.), (1., 0.), 1.),
        test_edge((1., 0.), (0., 1.), 1.),
        test_edge((0., 1.), (0., 0.), 1.),
        test_edge((10., 0.), (11., 0.), 1.),
        test_edge((11., 0.), (10., 1.), 1.),
        test_edge((10., 1.), (10., 0.), 1.),
    ]
}

/// A square grid with unit edges and nodes at integer coordinates.
pub fn grid_edges(side: usize) -> Vec<RoadEdge> {
    let mut edges = Vec::new();
    for x in 0..side {
        for y in 0..side {
            if x + 1 < side {
                edges.push(test_edge((x as Float, y as Float), (x as Float + 1., y as Float), 1.));
            }
            if y + 1 < side {
                edges.push(test_edge((x as Float, y as Float), (x as Float, y as Float + 1.), 1.));
            }
        }
    }

    edges
}

/// An environment which swallows all log output.
pub fn silent_environment() -> Environment {
    Environment { quota: None, logger: Arc::new(|_: &str| {}) }
}

/// A seeded search configuration with a small iteration budget.
pub fn test_config(min_bound: Float, max_bound: Float, bound_kind: BoundKind) -> SearchConfig {
    SearchConfig {
        num_ants: 10,
        max_iterations: 20,
        min_bound,
        max_bound,
        bound_kind,
        seed: Some(42),
        ..SearchConfig::default()
    }
}

/// Builds a road graph with default weights, panicking on failure.
pub fn test_graph(edges: &[RoadEdge], start: (Float, Float), end: (Float, Float)) -> RoadGraph {
    RoadGraph::new(edges, start, end, &RatioWeights::default()).expect("cannot build test graph")
}

/// A quota which is reached after a fixed amount of checks.
pub struct CountQuota {
    limit: usize,
    count: AtomicUsize,
}

impl CountQuota {
    /// Creates a new instance of `CountQuota`.
    pub fn new(limit: usize) -> Self {
        Self { limit, count: AtomicUsize::new(0) }
    }
}

impl Quota for CountQuota {
    fn is_reached(&self) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst) >= self.limit
    }
}
