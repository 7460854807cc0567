use aoc_solutions::my_solutions::year_2022::{day_8, day_9};
use aoc_solver::{DynSolver, RegistryBuilder, SolveError, SolverError, SolverInstance, SolverRegistry};

const TREES: &str = "30373\n25512\n65332\n33549\n35390\n";
const ROPE: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
const LONG_ROPE: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2022)
        .expect("2022 solvers register once")
        .build()
}

fn answers(registry: &SolverRegistry, day: u8, input: &str) -> Vec<String> {
    let mut solver = registry.create_solver(2022, day, input).unwrap();
    (1..=solver.parts())
        .map(|part| solver.solve(part).unwrap().answer)
        .collect()
}

#[test]
fn registered_by_plugin() {
    let registry = registry();
    let days: Vec<_> = registry.iter_info().map(|info| info.day).collect();
    assert!(days.contains(&8));
    assert!(days.contains(&9));
    assert_eq!(registry.info(2022, 8).map(|info| info.parts), Some(2));
}

#[test]
fn tree_house_sample() {
    assert_eq!(answers(&registry(), 8, TREES), ["21", "8"]);
}

#[test]
fn rope_bridge_samples() {
    let registry = registry();
    assert_eq!(answers(&registry, 9, ROPE), ["13", "1"]);
    assert_eq!(answers(&registry, 9, LONG_ROPE)[1], "36");
}

#[test]
fn parse_errors_surface_through_registry() {
    let registry = registry();
    assert!(matches!(
        registry.create_solver(2022, 8, "12\n3"),
        Err(SolverError::ParseError(_))
    ));
    assert!(matches!(
        registry.create_solver(2022, 9, "Q 1"),
        Err(SolverError::ParseError(_))
    ));
}

#[test]
fn direct_instance_has_timing() {
    let mut solver = SolverInstance::<day_9::Solver>::new(2022, 9, ROPE).unwrap();
    assert!(solver.parse_end() >= solver.parse_start());
    let result = solver.solve(1).unwrap();
    assert_eq!(result.answer, "13");
    assert!(result.duration().num_nanoseconds().unwrap_or(0) >= 0);
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));

    let trees = SolverInstance::<day_8::Solver>::new(2022, 8, TREES).unwrap();
    assert_eq!(trees.shared().width(), 5);
}
