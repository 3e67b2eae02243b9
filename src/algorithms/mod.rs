//! This module contains graph algorithms used by the constraint preprocessor.

mod shortest_path;
pub use self::shortest_path::*;
