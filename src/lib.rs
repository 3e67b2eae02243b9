//! This crate provides a constrained route search engine: given a snapshot of a weighted,
//! undirected road network it looks for a path between two points which maximizes a
//! joggability ratio (sustainability total normalized by path length or segment count)
//! while keeping the path inside a target distance or segment count corridor.
//!
//! The search itself is a multi-agent stochastic algorithm (ant colony optimization) with
//! bounded backtracking and pheromone reinforcement across iterations.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
