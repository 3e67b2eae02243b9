//! This module reimports commonly used types.

pub use crate::models::DenseMatrix;
pub use crate::models::RatioWeights;
pub use crate::models::RoadEdge;
pub use crate::models::RoadGraph;
pub use crate::models::SearchError;

pub use crate::solver::AcoParams;
pub use crate::solver::BoundKind;
pub use crate::solver::RouteSearch;
pub use crate::solver::RouteSolution;
pub use crate::solver::SearchConfig;
pub use crate::solver::StopReason;
pub use crate::solver::solve_route;

pub use crate::construction::Ant;
pub use crate::construction::AntPath;
pub use crate::construction::AntState;
pub use crate::construction::PathTotals;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Random;
pub use crate::utils::TimeQuota;
pub use crate::utils::Timer;
pub use crate::utils::compare_floats;
