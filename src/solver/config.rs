use crate::models::RatioWeights;
use crate::utils::Float;

/// Selects which metric constrains the path corridor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundKind {
    /// The corridor is expressed in real distance units.
    Distance,
    /// The corridor is expressed in segment count.
    Segment,
}

/// A configuration of the route search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Amount of ants dispatched per iteration.
    pub num_ants: usize,
    /// Maximum amount of iterations.
    pub max_iterations: usize,
    /// Lower bound of the corridor.
    pub min_bound: Float,
    /// Upper bound of the corridor.
    pub max_bound: Float,
    /// The metric kind of the corridor.
    pub bound_kind: BoundKind,
    /// Blend weights of the joggability ratio.
    pub weights: RatioWeights,
    /// Enables early stopping after the given amount of iterations without improvement.
    pub early_stop: Option<usize>,
    /// A seed of the random generator; a nondeterministic seed is taken when not set.
    pub seed: Option<u64>,
    /// Maximum construction attempts per ant per iteration.
    pub max_attempts: usize,
    /// Maximum backtracking steps within one attempt.
    pub max_backoff: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 80,
            min_bound: 10_000.,
            max_bound: 11_000.,
            bound_kind: BoundKind::Distance,
            weights: RatioWeights::default(),
            early_stop: None,
            seed: None,
            max_attempts: 100,
            max_backoff: 50,
        }
    }
}

/// Parameters of the ant colony derived from the weight configuration.
#[derive(Clone, Copy, Debug)]
pub struct AcoParams {
    /// Pheromone importance.
    pub alpha: Float,
    /// Heuristic importance.
    pub beta: Float,
    /// Current pheromone evaporation rate.
    pub rho: Float,
    /// Per iteration decay factor of `rho`.
    pub lambda: Float,
    /// Lower limit of `rho`.
    pub rho_min: Float,
}

impl AcoParams {
    /// Derives the colony parameters from validated weights.
    pub fn from_weights(weights: &RatioWeights) -> Self {
        Self { alpha: weights.alpha(), beta: 1., rho: weights.initial_rho(), lambda: 0.98, rho_min: 0.05 }
    }

    /// Applies the per iteration decay to the evaporation rate.
    pub fn decay_rho(&mut self) {
        self.rho = (self.lambda * self.rho).max(self.rho_min);
    }
}
