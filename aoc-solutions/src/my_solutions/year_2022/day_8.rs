use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::Error;
use crate::utils::geom::Point2;
use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_chars(input.trim(), |p, c| {
            c.to_digit(10)
                .map(|height| height as u8)
                .ok_or_else(|| Error::malformed(p.y as usize + 1, format!("'{c}' is not a tree height")))
        })
        .map_err(ParseError::from)
    }
}

impl PartSolver<1> for Solver {
    fn solve(trees: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visible = trees.map(|_, _| false);
        let (width, height) = (trees.width() as i64, trees.height() as i64);

        for y in 0..height {
            cast_ray(trees, &mut visible, Point2::new(0, y), Point2::RIGHT)?;
            cast_ray(trees, &mut visible, Point2::new(width - 1, y), Point2::LEFT)?;
        }
        for x in 0..width {
            cast_ray(trees, &mut visible, Point2::new(x, 0), Point2::DOWN)?;
            cast_ray(trees, &mut visible, Point2::new(x, height - 1), Point2::UP)?;
        }

        Ok(visible.values().filter(|v| **v).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(trees: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = trees
            .points()
            .map(|p| scenic_score(trees, p))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

/// Walk from `start` toward the edge, marking every tree taller than all
/// trees before it.
fn cast_ray(
    trees: &Grid<u8>,
    visible: &mut Grid<bool>,
    start: Point2,
    direction: Point2,
) -> Result<(), Error> {
    let mut tallest = None;
    let mut p = start;
    while let Ok(&height) = trees.get(p) {
        if tallest.is_none_or(|t| height > t) {
            visible.set(p, true)?;
            tallest = Some(height);
        }
        if height == 9 {
            break;
        }
        p += direction;
    }
    Ok(())
}

/// Product over the four directions of how many trees can be seen from `p`,
/// counting the first one at least as tall as `p`.
fn scenic_score(trees: &Grid<u8>, p: Point2) -> u64 {
    let Ok(&own) = trees.get(p) else {
        return 0;
    };
    Point2::ORTHOGONAL
        .iter()
        .map(|&direction| {
            let mut seen = 0;
            let mut q = p + direction;
            while let Ok(&height) = trees.get(q) {
                seen += 1;
                if height >= own {
                    break;
                }
                q += direction;
            }
            seen
        })
        .product()
}
