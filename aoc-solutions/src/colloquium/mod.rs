//! Small pathfinding problems used to teach BFS, DFS, Dijkstra, A* and
//! Floyd-Warshall side by side.
//!
//! A [`Maze`] is a character grid solved with any [`Algorithm`]; a
//! [`Network`] is a small weighted graph solved with Dijkstra or
//! Floyd-Warshall. The [`render`] helpers turn searches into plain text
//! frames so a caller can print or animate them however it likes.
//!
//! ```rust
//! use aoc_solutions::colloquium::{Algorithm, Maze};
//!
//! let maze = Maze::parse("S.#\n..#\n#.G").unwrap();
//! for algorithm in Algorithm::ALL {
//!     assert!(maze.solve(algorithm).is_ok());
//! }
//! assert_eq!(maze.solve(Algorithm::Bfs).unwrap().steps(), 4);
//! ```

mod maze;
mod network;
pub mod render;

pub use maze::{Algorithm, Maze};
pub use network::{Network, vertex_label};

#[cfg(test)]
mod tests;
