#[cfg(test)]
#[path = "../../tests/unit/construction/ant_test.rs"]
mod ant_test;

use crate::models::{DenseMatrix, RoadGraph};
use crate::solver::{AcoParams, BoundKind, SearchConfig};
use crate::utils::{Float, Random};
use rustc_hash::FxHashSet;

/// A state of a single path construction attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntState {
    /// The ant tries to extend the path from its current node.
    Advancing,
    /// The ant steps back from a dead end.
    Backtracking,
    /// The ant reached the end node within the bound corridor.
    Success,
    /// The attempt is aborted.
    Failure,
}

/// Running totals accumulated along a partial path.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathTotals {
    /// Standardized distance.
    pub distance_std: Float,
    /// Real distance.
    pub distance_real: Float,
    /// Desirability numerator total.
    pub total_std: Float,
    /// Real sustainability total.
    pub total_real: Float,
    /// Score total.
    pub score: Float,
    /// Amount of traversed segments.
    pub segments: usize,
}

impl PathTotals {
    fn accumulate(&mut self, graph: &RoadGraph, from: usize, to: usize) {
        self.distance_std += graph.adjacency.get(from, to);
        self.distance_real += graph.distance_real.get(from, to);
        self.total_std += graph.total_std.get(from, to);
        self.total_real += graph.total_real.get(from, to);
        self.score += graph.score.get(from, to);
        self.segments += 1;
    }

    fn revert(&mut self, graph: &RoadGraph, from: usize, to: usize) {
        self.distance_std -= graph.adjacency.get(from, to);
        self.distance_real -= graph.distance_real.get(from, to);
        self.total_std -= graph.total_std.get(from, to);
        self.total_real -= graph.total_real.get(from, to);
        self.score -= graph.score.get(from, to);
        self.segments -= 1;
    }

    /// Returns the value checked against the bound corridor.
    pub fn metric(&self, kind: BoundKind) -> Float {
        match kind {
            BoundKind::Distance => self.distance_real,
            BoundKind::Segment => self.segments as Float,
        }
    }
}

/// A successfully constructed path with its totals and ratio.
#[derive(Clone, Debug)]
pub struct AntPath {
    /// Visited node ids in travel order.
    pub path: Vec<usize>,
    /// Final totals of the path.
    pub totals: PathTotals,
    /// The joggability ratio of the path.
    pub ratio: Float,
}

/// Builds one valid path from start to end with bounded retries. The graph and pheromone
/// matrices are only read, so many ants can run concurrently against the same iteration
/// snapshot.
pub struct Ant<'a, R: Random> {
    graph: &'a RoadGraph,
    pheromone: &'a DenseMatrix,
    config: &'a SearchConfig,
    params: &'a AcoParams,
    random: R,
}

impl<'a, R: Random> Ant<'a, R> {
    /// Creates a new instance of `Ant`.
    pub fn new(
        graph: &'a RoadGraph,
        pheromone: &'a DenseMatrix,
        config: &'a SearchConfig,
        params: &'a AcoParams,
        random: R,
    ) -> Self {
        Self { graph, pheromone, config, params, random }
    }

    /// Runs construction attempts until one produces a valid path or the attempt budget
    /// is exhausted. Returns `None` in the latter case.
    pub fn build_path(&self) -> Option<AntPath> {
        (0..self.config.max_attempts).find_map(|_| self.try_attempt())
    }

    fn try_attempt(&self) -> Option<AntPath> {
        let mut attempt = Attempt::new(self.graph.start);

        loop {
            attempt.state = match attempt.state {
                AntState::Advancing => self.advance(&mut attempt),
                AntState::Backtracking => self.backtrack(&mut attempt),
                AntState::Success => {
                    let weights = &self.config.weights;
                    let ratio =
                        weights.ratio(attempt.totals.total_std, attempt.totals.distance_std, attempt.totals.segments);
                    return Some(AntPath { path: attempt.path, totals: attempt.totals, ratio });
                }
                AntState::Failure => return None,
            };
        }
    }

    fn advance(&self, attempt: &mut Attempt) -> AntState {
        let current = attempt.current();

        if current == self.graph.end {
            // final validation is authoritative
            let metric = attempt.totals.metric(self.config.bound_kind);
            return if metric >= self.config.min_bound && metric <= self.config.max_bound {
                AntState::Success
            } else {
                AntState::Failure
            };
        }

        let reachable: Vec<usize> = self
            .graph
            .adjacency
            .nonzero_row(current)
            .filter(|node| !attempt.visited.contains(node) && !attempt.barrier.contains(node))
            .collect();

        if reachable.is_empty() {
            return if attempt.path.len() == 1 || attempt.backoff_steps > self.config.max_backoff {
                AntState::Failure
            } else {
                AntState::Backtracking
            };
        }

        let next = if reachable.len() == 1 { reachable[0] } else { self.select_next(current, &reachable) };
        attempt.push(self.graph, next);

        // an overshoot, or an arrival at the end node which is still too short, is a dead end
        let metric = attempt.totals.metric(self.config.bound_kind);
        if metric > self.config.max_bound || (metric < self.config.min_bound && next == self.graph.end) {
            attempt.reject(self.graph, next);
            return AntState::Advancing;
        }

        attempt.backoff_steps = 0;
        AntState::Advancing
    }

    fn backtrack(&self, attempt: &mut Attempt) -> AntState {
        let Some(dead) = attempt.path.pop() else { return AntState::Failure };
        let Some(&previous) = attempt.path.last() else { return AntState::Failure };

        attempt.barrier.insert(dead);
        attempt.totals.revert(self.graph, previous, dead);
        attempt.backoff_steps += 1;

        AntState::Advancing
    }

    fn select_next(&self, current: usize, reachable: &[usize]) -> usize {
        let desirability: Vec<Float> = reachable
            .iter()
            .map(|&node| {
                self.pheromone.get(current, node).powf(self.params.alpha)
                    * self.graph.total_std.get(current, node).powf(self.params.beta)
            })
            .collect();

        reachable[self.random.weighted(&desirability)]
    }
}

/// An attempt scoped construction state.
struct Attempt {
    path: Vec<usize>,
    visited: FxHashSet<usize>,
    barrier: FxHashSet<usize>,
    totals: PathTotals,
    backoff_steps: usize,
    state: AntState,
}

impl Attempt {
    fn new(start: usize) -> Self {
        Self {
            path: vec![start],
            visited: FxHashSet::from_iter([start]),
            barrier: FxHashSet::default(),
            totals: PathTotals::default(),
            backoff_steps: 0,
            state: AntState::Advancing,
        }
    }

    fn current(&self) -> usize {
        *self.path.last().expect("attempt path is never empty")
    }

    fn push(&mut self, graph: &RoadGraph, next: usize) {
        let current = self.current();
        self.path.push(next);
        self.visited.insert(next);
        self.totals.accumulate(graph, current, next);
    }

    fn reject(&mut self, graph: &RoadGraph, next: usize) {
        self.path.pop();
        self.barrier.insert(next);
        self.totals.revert(graph, self.current(), next);
        self.backoff_steps += 1;
    }
}
