//! The solver module wires the graph builder, the constraint preprocessor and the ant
//! colony search engine together.

use crate::models::{RoadEdge, SearchError};
use crate::utils::{Environment, Float};

mod config;
pub use self::config::*;

mod engine;
pub use self::engine::*;

mod preprocess;
pub use self::preprocess::*;

mod result;
pub use self::result::*;

/// Plans a route through the given graph snapshot: builds and prunes the matrices,
/// applies the bound constraint and runs the ant colony search.
pub fn solve_route(
    edges: &[RoadEdge],
    start: (Float, Float),
    end: (Float, Float),
    config: SearchConfig,
    environment: Environment,
) -> Result<RouteSolution, SearchError> {
    RouteSearch::new(edges, start, end, config, environment)?.solve()
}
