//! Graph search over arbitrary node types.
//!
//! Every search takes its graph as a closure: `neighbors(&node)` for the
//! unweighted searches, `successors(&node)` yielding `(next, weight)` pairs
//! for the weighted ones. Nodes only need `Clone + Eq + Hash`, so grid
//! points, vertex indices or whole puzzle states all work.
//!
//! Each search has a `*_with` form that reports progress to a
//! [`SearchObserver`]; the plain form passes a [`NoopObserver`]. Observers
//! see events but cannot steer the search.
//!
//! ```rust
//! use aoc_solutions::utils::geom::Point2;
//! use aoc_solutions::utils::grid::Grid;
//! use aoc_solutions::utils::search::bfs;
//!
//! let grid = Grid::filled_with(3, 3, ()).unwrap();
//! let path = bfs(Point2::new(0, 0), Point2::new(2, 2), |p| {
//!     grid.four_neighbors_in_bounds(*p).collect::<Vec<_>>()
//! })
//! .unwrap();
//! assert_eq!(path.steps(), 4);
//! assert_eq!(path.nodes.len(), 5);
//! ```

mod bfs;
mod dijkstra;
mod floyd_warshall;
mod observer;
mod path;

pub use bfs::{bfs, bfs_distances, bfs_with, dfs, dfs_with};
pub use dijkstra::{astar, astar_with, dijkstra, dijkstra_all, dijkstra_with, manhattan_heuristic};
pub use floyd_warshall::{
    NextHop, Relaxation, floyd_warshall, floyd_warshall_with, floyd_warshall_with_paths,
};
pub use observer::{NoopObserver, SearchEvent, SearchObserver};
pub use path::{Path, reconstruct_path};
