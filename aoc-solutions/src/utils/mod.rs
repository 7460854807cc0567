//! Shared building blocks for the puzzle solutions.

mod error;
pub mod geom;
pub mod graph;
pub mod grid;
pub mod search;

pub use error::{Error, Result};
