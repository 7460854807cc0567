use std::fmt;

use super::vector_ops;

/// A 2D integer point. X grows right, Y grows down (row index).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2 {
    pub x: i64,
    pub y: i64,
}

impl Point2 {
    pub const ZERO: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(0, -1);
    pub const DOWN: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);

    /// The four orthogonal unit steps
    pub const ORTHOGONAL: [Self; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbours: up, right, down, left.
    #[inline]
    pub fn four_neighbors(self) -> [Self; 4] {
        Self::ORTHOGONAL.map(|d| self + d)
    }

    /// Orthogonal and diagonal neighbours, clockwise from up.
    #[inline]
    pub fn eight_neighbors(self) -> [Self; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }

    /// Rotate about the origin by `radians`, anticlockwise in the
    /// mathematical (y-up) sense.
    ///
    /// Each coordinate is rounded to the nearest integer, ties to even, so
    /// rotating by multiples of a quarter turn is exact while repeated
    /// rotation by other angles accumulates rounding error.
    ///
    /// ```rust
    /// use aoc_solutions::utils::geom::Point2;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_eq!(Point2::new(1, 0).rotate(FRAC_PI_2), Point2::new(0, 1));
    /// ```
    pub fn rotate(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (x, y) = (self.x as f64, self.y as f64);
        Self::new(
            (x * cos - y * sin).round_ties_even() as i64,
            (x * sin + y * cos).round_ties_even() as i64,
        )
    }
}

vector_ops!(Point2 { x, y });

impl From<(i64, i64)> for Point2 {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
