//! Dense rectangular grid addressed by [`Point2`].
//!
//! Cells are stored row-major in a single `Vec`. Point `(x, y)` is valid when
//! `0 <= x < width` and `0 <= y < height`; every accessor checks this and
//! reports [`Error::OutOfBounds`] instead of panicking.
//!
//! ```rust
//! use aoc_solutions::utils::geom::Point2;
//! use aoc_solutions::utils::grid::Grid;
//!
//! let mut grid = Grid::filled_with(3, 2, '.').unwrap();
//! grid.set(Point2::new(2, 1), '#').unwrap();
//! assert_eq!(grid.get(Point2::new(2, 1)), Ok(&'#'));
//! assert_eq!(grid.render(|_, c| *c), "...\n..#");
//! ```

use super::error::{Error, Result};
use super::geom::Point2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a `width` x `height` grid with every cell set to `value`.
    pub fn filled_with(width: usize, height: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![value; width * height],
        })
    }

    /// Build a grid from rows of equal, non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a block of text, one row per line, converting each character
    /// with `f`. Trailing blank lines are ignored; `\r\n` endings are accepted.
    pub fn parse_chars<F>(input: &str, mut f: F) -> Result<Self>
    where
        F: FnMut(Point2, char) -> Result<T>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (y, line) in input.trim_end().lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let before = cells.len();
            for (x, c) in line.chars().enumerate() {
                cells.push(f(Point2::new(x as i64, y as i64), c)?);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(Error::malformed(
                        y + 1,
                        format!("row has {row_width} cells, expected {w}"),
                    ));
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn has(&self, p: Point2) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index_of(&self, p: Point2) -> Result<usize> {
        if self.has(p) {
            Ok(p.y as usize * self.width + p.x as usize)
        } else {
            Err(Error::OutOfBounds {
                point: p,
                width: self.width,
                height: self.height,
            })
        }
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point2 {
        Point2::new((index % self.width) as i64, (index / self.width) as i64)
    }

    pub fn get(&self, p: Point2) -> Result<&T> {
        let index = self.index_of(p)?;
        Ok(&self.cells[index])
    }

    pub fn get_mut(&mut self, p: Point2) -> Result<&mut T> {
        let index = self.index_of(p)?;
        Ok(&mut self.cells[index])
    }

    pub fn set(&mut self, p: Point2, value: T) -> Result<()> {
        *self.get_mut(p)? = value;
        Ok(())
    }

    /// Orthogonal neighbours of `p` that lie inside the grid.
    pub fn four_neighbors_in_bounds(&self, p: Point2) -> impl Iterator<Item = Point2> + '_ {
        p.four_neighbors().into_iter().filter(move |n| self.has(*n))
    }

    /// Orthogonal and diagonal neighbours of `p` that lie inside the grid.
    pub fn eight_neighbors_in_bounds(&self, p: Point2) -> impl Iterator<Item = Point2> + '_ {
        p.eight_neighbors().into_iter().filter(move |n| self.has(*n))
    }

    /// Every cell with its position, row by row from the top-left corner.
    pub fn iter(&self) -> impl Iterator<Item = (Point2, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (self.point_at(i), value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Point2, &mut T)> + '_ {
        let width = self.width;
        self.cells.iter_mut().enumerate().map(move |(i, value)| {
            (Point2::new((i % width) as i64, (i / width) as i64), value)
        })
    }

    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        (0..self.cells.len()).map(move |i| self.point_at(i))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    /// A grid of the same shape with every cell converted by `f`.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(Point2, &T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.iter().map(|(p, v)| f(p, v)).collect(),
        }
    }

    /// Draw the grid as text, one line per row, no trailing newline.
    pub fn render<F>(&self, mut f: F) -> String
    where
        F: FnMut(Point2, &T) -> char,
    {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (p, value) in self.iter() {
            if p.x == 0 && p.y > 0 {
                out.push('\n');
            }
            out.push(f(p, value));
        }
        out
    }
}

#[cfg(test)]
mod tests;
