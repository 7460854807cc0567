//! Undirected weighted graphs and dense distance matrices.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::ops::Add;

use super::error::{Error, Result};
use super::geom::Point2;

/// Path length that may be unbounded.
///
/// `Infinite` compares greater than every finite value and absorbs addition,
/// so `a + b` never overflows into a wrong finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distance {
    #[default]
    Infinite,
    Finite(u64),
}

impl Distance {
    pub const ZERO: Self = Distance::Finite(0);

    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    #[inline]
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl From<u64> for Distance {
    fn from(value: u64) -> Self {
        Distance::Finite(value)
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Ordering::Less,
            (Distance::Infinite, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Infinite, Distance::Infinite) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Distance::Finite(a), Distance::Finite(b)) => {
                a.checked_add(b).map_or(Distance::Infinite, Distance::Finite)
            }
            _ => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => fmt::Display::fmt(d, f),
            Distance::Infinite => f.pad("inf"),
        }
    }
}

/// Undirected graph whose vertices carry a position for drawing.
///
/// Edges are stored once per direction, so `(i, j)` and `(j, i)` always
/// hold the same weight.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    vertices: Vec<Point2>,
    edges: HashMap<(usize, usize), u64>,
}

impl WeightedGraph {
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self {
            vertices,
            edges: HashMap::new(),
        }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Insert or replace the undirected edge `a - b`.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: u64) -> Result<()> {
        for v in [a, b] {
            if v >= self.vertices.len() {
                return Err(Error::malformed(
                    0,
                    format!("vertex {v} out of range 0..{}", self.vertices.len()),
                ));
            }
        }
        self.edges.insert((a, b), weight);
        self.edges.insert((b, a), weight);
        Ok(())
    }

    pub fn weight(&self, a: usize, b: usize) -> Option<u64> {
        self.edges.get(&(a, b)).copied()
    }

    /// Vertices adjacent to `v` with the connecting weight, ordered by index.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        (0..self.vertices.len()).filter_map(move |u| self.weight(v, u).map(|w| (u, w)))
    }

    /// Each undirected edge once, as `(low, high, weight)` in index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        let mut edges: Vec<_> = self
            .edges
            .iter()
            .filter(|((a, b), _)| a <= b)
            .map(|(&(a, b), &w)| (a, b, w))
            .collect();
        edges.sort_unstable();
        edges.into_iter()
    }

    /// Direct edge lengths: zero on the diagonal, `Infinite` where no edge.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(self.vertices.len());
        for (&(a, b), &w) in &self.edges {
            if a != b {
                matrix.set(a, b, Distance::Finite(w));
            }
        }
        matrix
    }
}

/// Square matrix of distances between vertex indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// `size` x `size` matrix with a zero diagonal and everything else infinite.
    pub fn new(size: usize) -> Self {
        let mut cells = vec![Distance::Infinite; size * size];
        for i in 0..size {
            cells[i * size + i] = Distance::ZERO;
        }
        Self { size, cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// # Panics
    ///
    /// Panics if either index is not below [`len`](Self::len).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Distance {
        assert!(i < self.size && j < self.size, "index ({i}, {j}) out of range");
        self.cells[i * self.size + j]
    }

    /// # Panics
    ///
    /// Panics if either index is not below [`len`](Self::len).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, distance: Distance) {
        assert!(i < self.size && j < self.size, "index ({i}, {j}) out of range");
        self.cells[i * self.size + j] = distance;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}
