use crate::utils::Float;

/// Explains why the search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The iteration budget is exhausted.
    MaxIterations,
    /// The best ratio stalled for the configured amount of iterations.
    Converged,
    /// The caller deadline was reached; the result is partial.
    QuotaReached,
}

/// The best route found by the search together with its real world metrics and the
/// convergence history.
#[derive(Clone, Debug)]
pub struct RouteSolution {
    /// Node ids of the best path in travel order.
    pub path: Vec<usize>,
    /// The joggability ratio of the best path.
    pub ratio: Float,
    /// Real world length of the path.
    pub distance_real: Float,
    /// Standardized length of the path.
    pub distance_std: Float,
    /// Amount of segments of the path.
    pub segments: usize,
    /// Sustainability total of the path.
    pub total: Float,
    /// Score total of the path.
    pub score: Float,
    /// Coordinates of the path nodes in travel order.
    pub coords: Vec<(Float, Float)>,
    /// The global best ratio after each completed iteration.
    pub convergence: Vec<Float>,
    /// The stop cause of the search.
    pub stop_reason: StopReason,
}
