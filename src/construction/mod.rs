//! Provides per ant constrained path construction logic.

mod ant;
pub use self::ant::*;
