//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains the shared grid, vector and graph-search utilities,
//! a set of small pathfinding teaching problems, and puzzle solutions
//! organized by year. Each solution uses the `AutoRegisterSolver` derive
//! macro for automatic plugin registration with the solver framework.

pub mod utils;

#[cfg(feature = "colloquium")]
pub mod colloquium;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
