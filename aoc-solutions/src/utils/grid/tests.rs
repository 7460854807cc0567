use std::collections::HashSet;

use proptest::prelude::*;

use super::*;

#[test]
fn zero_dimension_is_rejected() {
    assert_eq!(
        Grid::filled_with(0, 3, 0u8),
        Err(Error::InvalidDimension { width: 0, height: 3 })
    );
    assert_eq!(
        Grid::filled_with(3, 0, 0u8),
        Err(Error::InvalidDimension { width: 3, height: 0 })
    );
}

#[test]
fn out_of_bounds_access() {
    let mut grid = Grid::filled_with(2, 2, 0u8).unwrap();
    let outside = [
        Point2::new(-1, 0),
        Point2::new(0, -1),
        Point2::new(2, 0),
        Point2::new(0, 2),
    ];
    for p in outside {
        assert!(!grid.has(p));
        let expected = Error::OutOfBounds {
            point: p,
            width: 2,
            height: 2,
        };
        assert_eq!(grid.get(p), Err(expected.clone()));
        assert_eq!(grid.set(p, 1), Err(expected));
    }
}

#[test]
fn from_rows_rejects_ragged_and_empty() {
    assert!(Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).is_ok());
    assert!(matches!(
        Grid::from_rows(vec![vec![1, 2], vec![3]]),
        Err(Error::InvalidDimension { .. })
    ));
    assert!(matches!(
        Grid::<u8>::from_rows(vec![]),
        Err(Error::InvalidDimension { width: 0, height: 0 })
    ));
}

#[test]
fn parse_chars_reads_rows() {
    let grid = Grid::parse_chars("ab\r\ncd\n\n", |_, c| Ok(c)).unwrap();
    assert_eq!((grid.width(), grid.height()), (2, 2));
    assert_eq!(grid.get(Point2::new(1, 0)), Ok(&'b'));
    assert_eq!(grid.get(Point2::new(0, 1)), Ok(&'c'));
}

#[test]
fn parse_chars_reports_ragged_line() {
    let err = Grid::parse_chars("abc\nab\nabc", |_, c| Ok(c)).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { line: 2, .. }));
}

#[test]
fn parse_chars_propagates_cell_errors() {
    let err = Grid::parse_chars("12\n3x", |p, c| {
        c.to_digit(10)
            .ok_or_else(|| Error::malformed(p.y as usize + 1, format!("not a digit: {c}")))
    })
    .unwrap_err();
    assert!(matches!(err, Error::MalformedInput { line: 2, .. }));
}

#[test]
fn parse_chars_empty_input() {
    assert!(matches!(
        Grid::parse_chars("", |_, c| Ok(c)),
        Err(Error::InvalidDimension { .. })
    ));
}

#[test]
fn corner_neighbors_are_clipped() {
    let grid = Grid::filled_with(3, 3, ()).unwrap();
    let corner: HashSet<_> = grid.four_neighbors_in_bounds(Point2::ZERO).collect();
    assert_eq!(corner, HashSet::from([Point2::new(1, 0), Point2::new(0, 1)]));
    assert_eq!(grid.eight_neighbors_in_bounds(Point2::ZERO).count(), 3);
    assert_eq!(grid.four_neighbors_in_bounds(Point2::new(1, 1)).count(), 4);
    assert_eq!(grid.eight_neighbors_in_bounds(Point2::new(1, 1)).count(), 8);
}

#[test]
fn iteration_is_row_major() {
    let grid = Grid::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
    let points: Vec<_> = grid.points().collect();
    assert_eq!(points[0], Point2::new(0, 0));
    assert_eq!(points[1], Point2::new(1, 0));
    assert_eq!(points[3], Point2::new(0, 1));
    assert_eq!(grid.values().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);

    // restartable
    assert_eq!(grid.iter().count(), grid.iter().count());
}

#[test]
fn iter_mut_and_map() {
    let mut grid = Grid::filled_with(2, 2, 0i64).unwrap();
    for (p, v) in grid.iter_mut() {
        *v = p.x + 10 * p.y;
    }
    assert_eq!(grid.get(Point2::new(1, 1)), Ok(&11));

    let doubled = grid.map(|_, v| v * 2);
    assert_eq!(doubled.get(Point2::new(1, 1)), Ok(&22));
}

#[test]
fn render_rows() {
    let grid = Grid::parse_chars("#.\n.#", |_, c| Ok(c == '#')).unwrap();
    assert_eq!(grid.render(|_, wall| if *wall { '#' } else { ' ' }), "# \n #");
}

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (1usize..24, 1usize..24)
}

proptest! {
    #[test]
    fn set_then_get((w, h) in dims(), x in 0usize..24, y in 0usize..24, value: i32) {
        let mut grid = Grid::filled_with(w, h, 0i32).unwrap();
        let p = Point2::new((x % w) as i64, (y % h) as i64);
        grid.set(p, value).unwrap();
        prop_assert_eq!(grid.get(p), Ok(&value));
    }

    #[test]
    fn iteration_covers_every_cell_once((w, h) in dims()) {
        let grid = Grid::filled_with(w, h, ()).unwrap();
        let seen: Vec<Point2> = grid.iter().map(|(p, _)| p).collect();
        prop_assert_eq!(seen.len(), w * h);
        let unique: HashSet<_> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), w * h);
        prop_assert!(seen.iter().all(|p| grid.has(*p)));
    }

    #[test]
    fn neighbors_in_bounds_stay_in_bounds((w, h) in dims(), x in 0usize..24, y in 0usize..24) {
        let grid = Grid::filled_with(w, h, ()).unwrap();
        let p = Point2::new((x % w) as i64, (y % h) as i64);
        prop_assert!(grid.eight_neighbors_in_bounds(p).all(|n| grid.has(n) && p.chebyshev(n) == 1));
    }
}
