#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::models::{DenseMatrix, RatioWeights, SearchError};
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// An input road segment connecting two coordinate points. All segments are bidirectional.
#[derive(Clone, Debug)]
pub struct RoadEdge {
    /// A source endpoint coordinate.
    pub source: (Float, Float),
    /// A target endpoint coordinate.
    pub target: (Float, Float),
    /// A standardized segment length used by the desirability heuristic.
    pub distance_std: Float,
    /// A real world segment length.
    pub distance_real: Float,
    /// A segment preference score.
    pub score: Float,
    /// A standardized sustainability total.
    pub total_std: Float,
    /// A real world sustainability total.
    pub total_real: Float,
}

/// A road network snapshot with dense node indexed attribute matrices. Node ids are dense,
/// zero based and reassigned after every projection.
pub struct RoadGraph {
    /// Node coordinates indexed by node id.
    pub coords: Vec<(Float, Float)>,
    /// Standardized distance matrix; an entry is nonzero iff the edge exists.
    pub adjacency: DenseMatrix,
    /// Real distance matrix.
    pub distance_real: DenseMatrix,
    /// Score matrix.
    pub score: DenseMatrix,
    /// Desirability numerator matrix.
    pub total_std: DenseMatrix,
    /// Real sustainability total matrix.
    pub total_real: DenseMatrix,
    /// Mean of the numerator over the input edge list.
    pub total_mean: Float,
    /// Mean of the standardized distance over the input edge list.
    pub distance_mean: Float,
    /// A start node id.
    pub start: usize,
    /// An end node id.
    pub end: usize,
}

impl RoadGraph {
    /// Builds the snapshot from an edge list: deduplicates coordinate identical endpoints
    /// into nodes, populates the attribute matrices, resolves the query coordinates and
    /// prunes dead end stubs which cannot lie on any through path.
    pub fn new(
        edges: &[RoadEdge],
        start: (Float, Float),
        end: (Float, Float),
        weights: &RatioWeights,
    ) -> Result<Self, SearchError> {
        if edges.is_empty() {
            return Err(SearchError::MalformedGraph("empty edge list".to_string()));
        }

        let mut index = FxHashMap::default();
        let mut coords = Vec::new();
        edges.iter().for_each(|edge| {
            intern(&mut index, &mut coords, edge.source);
            intern(&mut index, &mut coords, edge.target);
        });

        let dim = coords.len();
        let mut adjacency = DenseMatrix::new(dim);
        let mut distance_real = DenseMatrix::new(dim);
        let mut score = DenseMatrix::new(dim);
        let mut total_std = DenseMatrix::new(dim);
        let mut total_real = DenseMatrix::new(dim);

        let (mut total_sum, mut distance_sum) = (0., 0.);
        for edge in edges {
            let source = index[&coord_key(edge.source)];
            let target = index[&coord_key(edge.target)];
            if source == target {
                // self loops would break the zero diagonal invariant
                continue;
            }

            let numerator = weights.numerator(edge);
            adjacency.set_symmetric(source, target, edge.distance_std);
            distance_real.set_symmetric(source, target, edge.distance_real);
            score.set_symmetric(source, target, edge.score);
            total_std.set_symmetric(source, target, numerator);
            total_real.set_symmetric(source, target, edge.total_real);

            total_sum += numerator;
            distance_sum += edge.distance_std;
        }

        let start = *index
            .get(&coord_key(start))
            .ok_or_else(|| SearchError::MalformedGraph("start coordinate is not a node of the snapshot".to_string()))?;
        let end = *index
            .get(&coord_key(end))
            .ok_or_else(|| SearchError::MalformedGraph("end coordinate is not a node of the snapshot".to_string()))?;
        if start == end {
            return Err(SearchError::MalformedGraph("start and end must be distinct nodes".to_string()));
        }

        let mut graph = Self {
            coords,
            adjacency,
            distance_real,
            score,
            total_std,
            total_real,
            total_mean: total_sum / edges.len() as Float,
            distance_mean: distance_sum / edges.len() as Float,
            start,
            end,
        };
        graph.prune_dead_ends()?;

        Ok(graph)
    }

    /// Returns the current amount of nodes.
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Re-projects the whole snapshot onto the surviving index subset and relocates the
    /// query node ids through the projection.
    pub fn project(&mut self, keep: &[usize]) -> Result<(), SearchError> {
        let start = keep
            .iter()
            .position(|&index| index == self.start)
            .ok_or_else(|| SearchError::MalformedGraph("start node was pruned away".to_string()))?;
        let end = keep
            .iter()
            .position(|&index| index == self.end)
            .ok_or_else(|| SearchError::MalformedGraph("end node was pruned away".to_string()))?;

        self.coords = keep.iter().map(|&index| self.coords[index]).collect();
        self.adjacency = self.adjacency.project(keep);
        self.distance_real = self.distance_real.project(keep);
        self.score = self.score.project(keep);
        self.total_std = self.total_std.project(keep);
        self.total_real = self.total_real.project(keep);
        self.start = start;
        self.end = end;

        Ok(())
    }

    /// Removes all degree one nodes at once, re-indexes and repeats until the fixpoint.
    /// The query nodes are kept even when they are dead ends themselves: a path is allowed
    /// to start or finish in a stub, but not to pass through one.
    fn prune_dead_ends(&mut self) -> Result<(), SearchError> {
        loop {
            let keep: Vec<usize> = (0..self.node_count())
                .filter(|&index| {
                    index == self.start || index == self.end || self.degree(index) != 1
                })
                .collect();

            if keep.len() == self.node_count() {
                break;
            }

            self.project(&keep)?;
        }

        if self.degree(self.start) == 0 || self.degree(self.end) == 0 {
            return Err(SearchError::MalformedGraph(
                "start or end node has no edges left after dead end pruning".to_string(),
            ));
        }

        Ok(())
    }

    fn degree(&self, node: usize) -> usize {
        self.adjacency.nonzero_row(node).count()
    }
}

fn coord_key(coord: (Float, Float)) -> (u64, u64) {
    (coord.0.to_bits(), coord.1.to_bits())
}

fn intern(index: &mut FxHashMap<(u64, u64), usize>, coords: &mut Vec<(Float, Float)>, coord: (Float, Float)) -> usize {
    *index.entry(coord_key(coord)).or_insert_with(|| {
        coords.push(coord);
        coords.len() - 1
    })
}
