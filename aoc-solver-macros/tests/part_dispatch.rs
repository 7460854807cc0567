use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Default)]
struct Shared {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct Numbers;

impl AocParser for Numbers {
    type SharedData<'a> = Shared;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Shared { numbers, sum: None })
    }
}

// Part 1 caches the sum for part 2
impl PartSolver<1> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared
            .sum
            .unwrap_or_else(|| shared.numbers.iter().sum());
        Ok((sum * 2).to_string())
    }
}

impl PartSolver<3> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.numbers.is_empty() {
            Err(SolveError::failed("no numbers"))
        } else {
            Ok(shared.numbers.iter().product::<i32>().to_string())
        }
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<Numbers as Solver>::PARTS, 3);
}

#[test]
fn dispatches_each_part() {
    let mut shared = Numbers::parse("2\n3\n4").unwrap();
    assert_eq!(Numbers::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(shared.sum, Some(9));
    assert_eq!(Numbers::solve_part(&mut shared, 2).unwrap(), "18");
    assert_eq!(Numbers::solve_part(&mut shared, 3).unwrap(), "24");
}

#[test]
fn part_two_works_without_part_one() {
    let mut shared = Numbers::parse("5\n5").unwrap();
    assert_eq!(Numbers::solve_part(&mut shared, 2).unwrap(), "20");
}

#[test]
fn unknown_parts_are_not_implemented() {
    let mut shared = Numbers::parse("1").unwrap();
    assert!(matches!(
        Numbers::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
    assert!(matches!(
        Numbers::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
}

#[test]
fn part_errors_propagate() {
    let mut shared = Shared::default();
    assert!(matches!(
        Numbers::solve_part(&mut shared, 3),
        Err(SolveError::SolveFailed(_))
    ));
}
