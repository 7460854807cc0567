use std::collections::HashSet;

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geom::Point2;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["geom"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    direction: Point2,
    steps: u32,
}

fn parse_motion(line: &str) -> Result<Motion, anyhow::Error> {
    let (direction, steps) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<direction> <steps>', got '{line}'"))?;
    let direction = match direction {
        "U" => Point2::UP,
        "D" => Point2::DOWN,
        "L" => Point2::LEFT,
        "R" => Point2::RIGHT,
        other => bail!("unknown direction '{other}'"),
    };
    let steps = steps
        .trim()
        .parse()
        .with_context(|| format!("invalid step count '{steps}'"))?;
    Ok(Motion { direction, steps })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Motion>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_motion(line.trim()).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(motions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate::<2>(motions).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(motions: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate::<10>(motions).to_string())
    }
}

/// Move a knot one step toward `leader` unless they already touch.
#[inline]
fn follow(leader: Point2, knot: Point2) -> Point2 {
    if leader.chebyshev(knot) > 1 {
        knot + (leader - knot).signum()
    } else {
        knot
    }
}

/// Number of distinct cells the last of `KNOTS` knots visits.
fn simulate<const KNOTS: usize>(motions: &[Motion]) -> usize {
    let mut rope = [Point2::ZERO; KNOTS];
    let mut visited = HashSet::from([Point2::ZERO]);

    for motion in motions {
        for _ in 0..motion.steps {
            rope[0] += motion.direction;
            for i in 1..KNOTS {
                rope[i] = follow(rope[i - 1], rope[i]);
            }
            visited.insert(rope[KNOTS - 1]);
        }
    }
    visited.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
    const LARGER: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

    #[test]
    fn short_rope() {
        let motions = Solver::parse(SAMPLE).unwrap();
        assert_eq!(simulate::<2>(&motions), 13);
    }

    #[test]
    fn long_rope() {
        assert_eq!(simulate::<10>(&Solver::parse(SAMPLE).unwrap()), 1);
        assert_eq!(simulate::<10>(&Solver::parse(LARGER).unwrap()), 36);
    }

    #[test]
    fn knots_follow_diagonally() {
        assert_eq!(follow(Point2::new(2, 1), Point2::ZERO), Point2::new(1, 1));
        assert_eq!(follow(Point2::new(2, 2), Point2::ZERO), Point2::new(1, 1));
        assert_eq!(follow(Point2::new(1, 1), Point2::ZERO), Point2::ZERO);
        assert_eq!(follow(Point2::new(0, -2), Point2::ZERO), Point2::new(0, -1));
    }

    #[test]
    fn reports_bad_line() {
        let Err(ParseError::InvalidFormat(message)) = Solver::parse("R 4\nX 2") else {
            panic!("expected a format error");
        };
        assert!(message.contains("line 2"), "{message}");
        assert!(Solver::parse("R four").is_err());
    }
}
