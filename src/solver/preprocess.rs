#[cfg(test)]
#[path = "../../tests/unit/solver/preprocess_test.rs"]
mod preprocess_test;

use crate::algorithms::{shortest_distances, shortest_hops};
use crate::models::{RoadGraph, SearchError};
use crate::solver::{BoundKind, SearchConfig};
use crate::utils::Float;

/// Filters the graph down to nodes which can lie on a path within the corridor and
/// validates that the corridor is feasible at all.
pub fn apply_bound_constraint(graph: &mut RoadGraph, config: &SearchConfig) -> Result<(), SearchError> {
    let from_start = metric_from(graph, graph.start, config.bound_kind);
    let from_end = metric_from(graph, graph.end, config.bound_kind);

    let valid = valid_nodes(&from_start, Some(&from_end), config.max_bound);
    let mut mask = vec![false; graph.node_count()];
    valid.into_iter().for_each(|index| mask[index] = true);
    // the query nodes are kept regardless of the computed metric
    mask[graph.start] = true;
    mask[graph.end] = true;

    let keep: Vec<usize> = (0..graph.node_count()).filter(|&index| mask[index]).collect();
    graph.project(&keep)?;

    let shortest = metric_from(graph, graph.start, config.bound_kind)[graph.end];
    if shortest > config.max_bound {
        return Err(SearchError::UnreachableTarget);
    }
    if config.min_bound > shortest {
        return Err(SearchError::InfeasibleConstraint { min_bound: config.min_bound, shortest });
    }

    Ok(())
}

/// Returns indices of nodes which can lie on a path within the upper bound. When the
/// metric from the end node is not given (open ended query), only the distance from the
/// start is checked.
pub fn valid_nodes(from_start: &[Float], from_end: Option<&[Float]>, max_bound: Float) -> Vec<usize> {
    (0..from_start.len())
        .filter(|&index| match from_end {
            Some(from_end) => from_start[index] + from_end[index] <= max_bound,
            None => from_start[index] <= max_bound,
        })
        .collect()
}

/// Computes the single source bound metric: real distances or hop counts.
pub fn metric_from(graph: &RoadGraph, source: usize, kind: BoundKind) -> Vec<Float> {
    match kind {
        BoundKind::Distance => shortest_distances(&graph.distance_real, source),
        BoundKind::Segment => shortest_hops(&graph.adjacency, source),
    }
}
