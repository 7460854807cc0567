use std::collections::HashSet;
use std::f64::consts::{FRAC_PI_2, PI};

use proptest::prelude::*;

use super::*;

fn point2() -> impl Strategy<Value = Point2> {
    (-1_000_000i64..1_000_000, -1_000_000i64..1_000_000).prop_map(Point2::from)
}

fn point3() -> impl Strategy<Value = Point3> {
    (-10_000i64..10_000, -10_000i64..10_000, -10_000i64..10_000).prop_map(Point3::from)
}

proptest! {
    #[test]
    fn four_neighbors_are_distinct_and_one_step_away(p in point2()) {
        let neighbors = p.four_neighbors();
        prop_assert_eq!(neighbors.iter().collect::<HashSet<_>>().len(), 4);
        for n in neighbors {
            prop_assert_eq!(p.manhattan(n), 1);
        }
    }

    #[test]
    fn eight_neighbors_are_distinct_and_one_step_away(p in point2()) {
        let neighbors = p.eight_neighbors();
        prop_assert_eq!(neighbors.iter().collect::<HashSet<_>>().len(), 8);
        for n in neighbors {
            prop_assert_eq!(p.chebyshev(n), 1);
        }
        let four: HashSet<_> = p.four_neighbors().into_iter().collect();
        prop_assert!(four.iter().all(|n| neighbors.contains(n)));
    }

    #[test]
    fn six_neighbors_are_distinct_and_one_step_away(p in point3()) {
        let neighbors = p.six_neighbors();
        prop_assert_eq!(neighbors.iter().collect::<HashSet<_>>().len(), 6);
        for n in neighbors {
            prop_assert_eq!(p.manhattan(n), 1);
        }
    }

    #[test]
    fn add_then_sub_is_identity(a in point2(), b in point2()) {
        prop_assert_eq!(a + b - b, a);
        prop_assert_eq!(a - a, Point2::ZERO);
        prop_assert_eq!(-(-a), a);
    }

    #[test]
    fn floor_div_matches_float_floor(a in -10_000i64..10_000, b in prop_oneof![-50i64..-1, 1i64..50]) {
        let expected = (a as f64 / b as f64).floor() as i64;
        prop_assert_eq!(floor_div(a, b), expected);
    }

    #[test]
    fn quarter_turns_are_exact(p in point2()) {
        prop_assert_eq!(p.rotate(FRAC_PI_2), Point2::new(-p.y, p.x));
        prop_assert_eq!(p.rotate(PI), -p);
        prop_assert_eq!(p.rotate(FRAC_PI_2).rotate(-FRAC_PI_2), p);
    }
}

#[test]
fn scale_and_floor_div() {
    let p = Point2::new(7, -7);
    assert_eq!(p.scale(3), Point2::new(21, -21));
    assert_eq!(p.floor_div(2), Point2::new(3, -4));
    assert_eq!(p / -2, Point2::new(-4, 3));

    let q = Point3::new(5, -5, 0);
    assert_eq!(q * -1, Point3::new(-5, 5, 0));
    assert_eq!(q / 2, Point3::new(2, -3, 0));
}

#[test]
fn assign_ops() {
    let mut p = Point2::new(1, 1);
    p += Point2::RIGHT;
    p -= Point2::UP;
    assert_eq!(p, Point2::new(2, 2));
}

#[test]
fn signum_per_component() {
    assert_eq!(Point2::new(-9, 0).signum(), Point2::new(-1, 0));
    assert_eq!(Point3::new(4, -2, 0).signum(), Point3::new(1, -1, 0));
}

#[test]
fn rotate_unit_x_quarter_turn() {
    assert_eq!(Point2::new(1, 0).rotate(FRAC_PI_2), Point2::new(0, 1));
    assert_eq!(Point2::new(1, 0).rotate(3.0 * FRAC_PI_2), Point2::new(0, -1));
}

#[test]
fn rotate_rounds_to_nearest() {
    // (3, 1) by 45deg -> (1.414.., 2.828..); (1, 1) by -45deg -> (1.414.., 0)
    assert_eq!(Point2::new(3, 1).rotate(PI / 4.0), Point2::new(1, 3));
    assert_eq!(Point2::new(1, 1).rotate(-PI / 4.0), Point2::new(1, 0));
}

#[test]
fn points_are_usable_as_keys() {
    let set: HashSet<Point2> = [Point2::new(1, 2), Point2::new(1, 2), Point2::new(2, 1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn display() {
    assert_eq!(Point2::new(-1, 4).to_string(), "(-1, 4)");
    assert_eq!(Point3::new(1, 2, 3).to_string(), "(1, 2, 3)");
}
