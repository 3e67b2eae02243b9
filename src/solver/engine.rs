#[cfg(test)]
#[path = "../../tests/unit/solver/engine_test.rs"]
mod engine_test;

use crate::construction::{Ant, AntPath, PathTotals};
use crate::models::{DenseMatrix, RoadEdge, RoadGraph, SearchError};
use crate::solver::{AcoParams, RouteSolution, SearchConfig, StopReason, apply_bound_constraint};
use crate::utils::{DefaultRandom, Environment, Float, compare_floats, parallel_into_collect};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Two consecutive iterations whose best ratios differ by less than this are considered
/// stalled by the early stopping check.
const STALL_THRESHOLD: Float = 1e-6;

/// A constrained route search engine based on ant colony optimization. The engine owns
/// the graph matrices for the duration of one request; the pheromone matrix is the only
/// state mutated between iterations.
pub struct RouteSearch {
    graph: RoadGraph,
    config: SearchConfig,
    params: AcoParams,
    environment: Environment,
    pheromone: DenseMatrix,
}

/// Keeps a deep copy of the best path found so far.
#[derive(Clone, Debug)]
struct BestRecord {
    path: Vec<usize>,
    totals: PathTotals,
    ratio: Float,
}

impl From<AntPath> for BestRecord {
    fn from(ant_path: AntPath) -> Self {
        Self { path: ant_path.path, totals: ant_path.totals, ratio: ant_path.ratio }
    }
}

impl RouteSearch {
    /// Creates the engine for the given graph snapshot: validates the weights, builds and
    /// prunes the matrices and applies the bound constraint. All fatal preconditions are
    /// checked here, before any ant runs.
    pub fn new(
        edges: &[RoadEdge],
        start: (Float, Float),
        end: (Float, Float),
        config: SearchConfig,
        environment: Environment,
    ) -> Result<Self, SearchError> {
        config.weights.validate()?;

        let mut graph = RoadGraph::new(edges, start, end, &config.weights)?;
        apply_bound_constraint(&mut graph, &config)?;

        let params = AcoParams::from_weights(&config.weights);
        let pheromone = init_pheromone(&graph.adjacency);

        (environment.logger)(&format!(
            "prepared search over {} nodes, start {} end {}, corridor [{}, {}]",
            graph.node_count(),
            graph.start,
            graph.end,
            config.min_bound,
            config.max_bound
        ));

        Ok(Self { graph, config, params, environment, pheromone })
    }

    /// Runs the search and extracts the best route. Fails with `NoValidPathFound` only
    /// when every iteration failed to construct a single valid path.
    pub fn solve(mut self) -> Result<RouteSolution, SearchError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);

        let mut best: Option<BestRecord> = None;
        let mut convergence = Vec::with_capacity(self.config.max_iterations);
        let mut stall_count = 0;
        let mut stop_reason = StopReason::MaxIterations;

        for iteration in 0..self.config.max_iterations {
            if self.environment.quota.as_ref().is_some_and(|quota| quota.is_reached()) {
                stop_reason = StopReason::QuotaReached;
                break;
            }

            self.params.decay_rho();

            let paths = self.dispatch_ants(seed, iteration);
            let succeeded = paths.iter().flatten().count();

            // ties are broken by the lowest ant index: only a strictly better ratio wins
            let iteration_best = paths
                .into_iter()
                .flatten()
                .reduce(|left, right| if compare_floats(right.ratio, left.ratio) == Ordering::Greater { right } else { left });

            match iteration_best {
                Some(candidate) => {
                    (self.environment.logger)(&format!(
                        "iteration {}: {}/{} ants succeeded, iteration best ratio {:.6}",
                        iteration, succeeded, self.config.num_ants, candidate.ratio
                    ));

                    let improved = best
                        .as_ref()
                        .is_none_or(|record| compare_floats(candidate.ratio, record.ratio) == Ordering::Greater);
                    if improved {
                        best = Some(BestRecord::from(candidate));
                    }

                    if let Some(record) = best.as_ref() {
                        self.update_pheromone(record);
                    }
                }
                None => {
                    (self.environment.logger)(&format!(
                        "iteration {iteration}: no ant found a valid path, skipping pheromone update"
                    ));
                }
            }

            let current = best.as_ref().map_or(Float::NEG_INFINITY, |record| record.ratio);
            convergence.push(current);

            if let Some(window) = self.config.early_stop {
                let len = convergence.len();
                if len >= 2 && (convergence[len - 1] - convergence[len - 2]).abs() < STALL_THRESHOLD {
                    stall_count += 1;
                } else {
                    stall_count = 0;
                }

                if stall_count >= window {
                    (self.environment.logger)(&format!(
                        "no improvement within {window} iterations, stopping early"
                    ));
                    stop_reason = StopReason::Converged;
                    break;
                }
            }
        }

        match best {
            Some(record) => {
                (self.environment.logger)(&format!(
                    "finished with best ratio {:.6}, path of {} segments",
                    record.ratio, record.totals.segments
                ));
                Ok(self.extract_solution(record, convergence, stop_reason))
            }
            None => Err(SearchError::NoValidPathFound),
        }
    }

    /// Dispatches all ants of one iteration in parallel against the frozen pheromone and
    /// attribute matrices. Every ant gets its own random stream derived from the master
    /// seed, so results do not depend on thread scheduling.
    fn dispatch_ants(&self, seed: u64, iteration: usize) -> Vec<Option<AntPath>> {
        let ant_seeds: Vec<u64> =
            (0..self.config.num_ants).map(|index| derive_seed(seed, iteration, index)).collect();

        parallel_into_collect(ant_seeds, |ant_seed| {
            let random = DefaultRandom::with_seed(ant_seed);
            Ant::new(&self.graph, &self.pheromone, &self.config, &self.params, random).build_path()
        })
    }

    /// Evaporates all pheromone and reinforces the edges of the global best path. When the
    /// sustainability total participates in the ratio, off path edges get a flat addition
    /// which keeps exploration alive.
    fn update_pheromone(&mut self, best: &BestRecord) {
        self.pheromone.scale(1. - self.params.rho);

        let delta = self.reinforcement_delta(best);
        best.path.windows(2).for_each(|edge| self.pheromone.add_symmetric(edge[0], edge[1], delta));

        if self.config.weights.w1 == 1 {
            let on_path: FxHashSet<(usize, usize)> =
                best.path.windows(2).flat_map(|edge| [(edge[0], edge[1]), (edge[1], edge[0])]).collect();

            let dim = self.pheromone.dim();
            for row in 0..dim {
                for col in 0..dim {
                    if self.pheromone.get(row, col) > 0. && !on_path.contains(&(row, col)) {
                        self.pheromone.add(row, col, 1.);
                    }
                }
            }
        }
    }

    /// Selects the reinforcement delta by the same weight combination which governs the
    /// ratio formula.
    fn reinforcement_delta(&self, best: &BestRecord) -> Float {
        let weights = &self.config.weights;
        match (weights.w1, weights.is_distance_weighted()) {
            // average sustainability per segment over the global mean
            (1, false) => (best.totals.total_std / best.totals.segments as Float) / self.graph.total_mean,
            // average sustainability per standardized meter, rescaled by the mean segment length
            (1, true) => {
                self.graph.distance_mean * (best.totals.total_std / best.totals.distance_std) / self.graph.total_mean
            }
            _ => best.ratio,
        }
    }

    fn extract_solution(self, best: BestRecord, convergence: Vec<Float>, stop_reason: StopReason) -> RouteSolution {
        let coords = best.path.iter().map(|&node| self.graph.coords[node]).collect();

        RouteSolution {
            path: best.path,
            ratio: best.ratio,
            distance_real: best.totals.distance_real,
            distance_std: best.totals.distance_std,
            segments: best.totals.segments,
            total: best.totals.total_std,
            score: best.totals.score,
            coords,
            convergence,
            stop_reason,
        }
    }
}

/// Initializes pheromone to one on every existing edge.
fn init_pheromone(adjacency: &DenseMatrix) -> DenseMatrix {
    let mut pheromone = DenseMatrix::new(adjacency.dim());
    for row in 0..adjacency.dim() {
        for col in adjacency.nonzero_row(row) {
            pheromone.set(row, col, 1.);
        }
    }

    pheromone
}

/// Mixes the master seed with the iteration and ant indices (splitmix64 finalizer), so
/// every ant gets an independent reproducible stream.
fn derive_seed(seed: u64, iteration: usize, ant_index: usize) -> u64 {
    let mut value = seed ^ (((iteration as u64) << 32) | ant_index as u64);
    value = value.wrapping_add(0x9E37_79B9_7F4A_7C15);
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
