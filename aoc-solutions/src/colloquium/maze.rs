use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::utils::geom::Point2;
use crate::utils::grid::Grid;
use crate::utils::search::{self, NoopObserver, Path, SearchObserver};
use crate::utils::{Error, Result};

/// Search strategy for [`Maze::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::malformed(0, format!("unknown algorithm '{s}'")))
    }
}

/// Walled grid with one start and one goal.
///
/// Text form: `#` is a wall, `S` the start, `G` the goal, any other
/// character open floor. Moves are 4-connected and cost 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Grid<bool>,
    start: Point2,
    goal: Point2,
}

impl Maze {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::malformed(0, "empty maze"));
        }

        // trailing whitespace on a row is not part of the maze
        let rows = input.lines().map(str::trim_end).collect::<Vec<_>>().join("\n");
        let mut start = None;
        let mut goal = None;
        let walls = Grid::parse_chars(&rows, |p, c| {
            let line = p.y as usize + 1;
            match c {
                '#' => Ok(true),
                'S' => match start.replace(p) {
                    Some(_) => Err(Error::malformed(line, "more than one start 'S'")),
                    None => Ok(false),
                },
                'G' => match goal.replace(p) {
                    Some(_) => Err(Error::malformed(line, "more than one goal 'G'")),
                    None => Ok(false),
                },
                _ => Ok(false),
            }
        })?;

        let start = start.ok_or_else(|| Error::malformed(0, "no start 'S'"))?;
        let goal = goal.ok_or_else(|| Error::malformed(0, "no goal 'G'"))?;
        debug!(
            "parsed {}x{} maze, start {start}, goal {goal}",
            walls.width(),
            walls.height()
        );
        Ok(Self { walls, start, goal })
    }

    #[inline]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point2 {
        self.goal
    }

    /// `true` cells are walls
    #[inline]
    pub fn walls(&self) -> &Grid<bool> {
        &self.walls
    }

    #[inline]
    pub fn is_open(&self, p: Point2) -> bool {
        self.walls.get(p) == Ok(&false)
    }

    pub fn open_neighbors(&self, p: Point2) -> impl Iterator<Item = Point2> + '_ {
        self.walls
            .four_neighbors_in_bounds(p)
            .filter(move |n| self.is_open(*n))
    }

    pub fn solve(&self, algorithm: Algorithm) -> Result<Path<Point2>> {
        self.solve_with(algorithm, &mut NoopObserver)
    }

    pub fn solve_with<O>(&self, algorithm: Algorithm, observer: &mut O) -> Result<Path<Point2>>
    where
        O: SearchObserver<Point2> + ?Sized,
    {
        let neighbors = |p: &Point2| self.open_neighbors(*p).collect::<Vec<_>>();
        let successors = |p: &Point2| self.open_neighbors(*p).map(|n| (n, 1)).collect::<Vec<_>>();

        match algorithm {
            Algorithm::Bfs => search::bfs_with(self.start, self.goal, neighbors, observer),
            Algorithm::Dfs => search::dfs_with(self.start, self.goal, neighbors, observer),
            Algorithm::Dijkstra => {
                search::dijkstra_with(self.start, self.goal, successors, observer)
            }
            Algorithm::AStar => search::astar_with(
                self.start,
                self.goal,
                successors,
                search::manhattan_heuristic(self.goal),
                observer,
            ),
        }
    }
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Maze::parse(s)
    }
}
