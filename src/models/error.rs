use crate::utils::Float;
use std::fmt;

/// An error which explains why the route search cannot produce a path.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    /// The blend weights violate the supported configuration: `w0` and `w1` must be 0 or 1
    /// and exactly one of `w2`, `w3` must be nonzero.
    InvalidWeightConfiguration(String),

    /// The graph snapshot is unusable: it is empty, the query points are not part of it,
    /// or dead end pruning removed them.
    MalformedGraph(String),

    /// No path exists between start and end which satisfies the upper bound of the
    /// active metric.
    UnreachableTarget,

    /// The lower bound of the corridor is unattainable under the active metric.
    InfeasibleConstraint {
        /// A configured lower bound.
        min_bound: Float,
        /// The best metric value achievable between start and end.
        shortest: Float,
    },

    /// Every iteration of the search failed to construct a valid path.
    NoValidPathFound,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeightConfiguration(msg) => write!(f, "invalid weight configuration: {msg}"),
            Self::MalformedGraph(msg) => write!(f, "malformed graph: {msg}"),
            Self::UnreachableTarget => write!(f, "end node is not reachable within the upper bound"),
            Self::InfeasibleConstraint { min_bound, shortest } => {
                write!(f, "lower bound {min_bound} exceeds the best achievable value {shortest}")
            }
            Self::NoValidPathFound => write!(f, "no valid path found within the given bounds"),
        }
    }
}

impl std::error::Error for SearchError {}
