//! The domain model: the dense numeric substrate, the road network snapshot and the
//! error taxonomy of the search.

mod error;
pub use self::error::*;

mod graph;
pub use self::graph::*;

mod matrix;
pub use self::matrix::*;

mod weights;
pub use self::weights::*;
