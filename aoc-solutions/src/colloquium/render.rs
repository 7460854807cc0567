//! Plain-text views of searches, for printing or replaying as an animation.
//!
//! Legend: `#` wall, `S`/`G` endpoints, `x` node being expanded, `o`
//! frontier, `.` already expanded, `*` final path.

use std::collections::HashSet;

use super::maze::Maze;
use super::network::vertex_label;
use crate::utils::geom::Point2;
use crate::utils::graph::{Distance, DistanceMatrix};
use crate::utils::search::{Path, SearchEvent, SearchObserver};

/// Observer that draws one frame of a maze search per expansion.
#[derive(Debug, Clone)]
pub struct FrameRecorder<'a> {
    maze: &'a Maze,
    frontier: HashSet<Point2>,
    closed: HashSet<Point2>,
    frames: Vec<String>,
}

impl<'a> FrameRecorder<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            frontier: HashSet::new(),
            closed: HashSet::new(),
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<String> {
        self.frames
    }

    fn draw(&self, current: Point2) -> String {
        self.maze.walls().render(|p, wall| {
            if p == self.maze.start() {
                'S'
            } else if p == self.maze.goal() {
                'G'
            } else if *wall {
                '#'
            } else if p == current {
                'x'
            } else if self.frontier.contains(&p) {
                'o'
            } else if self.closed.contains(&p) {
                '.'
            } else {
                ' '
            }
        })
    }
}

impl SearchObserver<Point2> for FrameRecorder<'_> {
    fn observe(&mut self, event: SearchEvent<'_, Point2>) {
        match event {
            SearchEvent::Expand { node } => {
                self.frontier.remove(node);
                let frame = self.draw(*node);
                self.frames.push(frame);
                self.closed.insert(*node);
            }
            SearchEvent::Discover { node, .. } => {
                self.frontier.insert(*node);
            }
        }
    }
}

/// The maze with `path` drawn over it.
pub fn render_path(maze: &Maze, path: &Path<Point2>) -> String {
    let on_path: HashSet<Point2> = path.nodes.iter().copied().collect();
    maze.walls().render(|p, wall| {
        if p == maze.start() {
            'S'
        } else if p == maze.goal() {
            'G'
        } else if *wall {
            '#'
        } else if on_path.contains(&p) {
            '*'
        } else {
            ' '
        }
    })
}

/// `inf`, or the distance right-aligned in three columns with at least one
/// leading space, so `8` is `"  8"` and `100` is `" 100"`.
fn distance_cell(distance: Distance) -> String {
    match distance {
        Distance::Infinite => "inf".to_string(),
        Distance::Finite(d) if d >= 10 => format!(" {d}"),
        Distance::Finite(d) => format!("  {d}"),
    }
}

/// Table of distances with lettered rows and columns, `inf` where no route.
///
/// ```rust
/// use aoc_solutions::colloquium::{Network, render::render_distance_matrix};
///
/// let network = Network::parse("2 1\n0 0\n5 0\n0 1 7").unwrap();
/// assert_eq!(
///     render_distance_matrix(&network.all_pairs()),
///     "   A | B \n --------\nA|  0|  7\nB|  7|  0"
/// );
/// ```
pub fn render_distance_matrix(matrix: &DistanceMatrix) -> String {
    let size = matrix.len();
    let header = (0..size)
        .map(|i| format!(" {} ", vertex_label(i)))
        .collect::<Vec<_>>()
        .join("|");
    let mut lines = vec![format!("  {header}"), format!(" {}", "----".repeat(size))];
    for (i, row) in matrix.rows().enumerate().take(size) {
        let cells = row
            .iter()
            .map(|&d| distance_cell(d))
            .collect::<Vec<_>>()
            .join("|");
        lines.push(format!("{}|{cells}", vertex_label(i)));
    }
    lines.join("\n")
}
