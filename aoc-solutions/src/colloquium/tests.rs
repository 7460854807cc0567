use super::render::{FrameRecorder, render_distance_matrix, render_path};
use super::*;
use crate::utils::Error;
use crate::utils::geom::Point2;
use crate::utils::graph::Distance;

const SMALL: &str = "S.#\n..#\n#.G";
const DETOUR: &str = ".....\nS.#.G\n.....";
const CORRIDOR: &str = "S..\n##.\nG..";
const TRIANGLE: &str = "3 3\n0 0\n4 0\n2 3\n0 1 5\n1 2 3\n0 2 100\n";

#[test]
fn parse_maze() {
    let maze = Maze::parse(SMALL).unwrap();
    assert_eq!(maze.start(), Point2::new(0, 0));
    assert_eq!(maze.goal(), Point2::new(2, 2));
    assert!(!maze.is_open(Point2::new(2, 0)));
    assert!(maze.is_open(Point2::new(1, 1)));
    assert!(!maze.is_open(Point2::new(3, 0)));
    assert_eq!(maze.walls().width(), 3);
}

#[test]
fn malformed_mazes() {
    for input in ["", "\n\n", "S..\n..", "...\n..G", "S.G\nS..", "S.G\n.G."] {
        assert!(
            matches!(Maze::parse(input), Err(Error::MalformedInput { .. })),
            "accepted {input:?}"
        );
    }
}

#[test]
fn trailing_spaces_on_rows_are_ignored() {
    let maze = Maze::parse("S.. \n..G\n").unwrap();
    assert_eq!((maze.walls().width(), maze.walls().height()), (3, 2));
    assert_eq!(maze.goal(), Point2::new(2, 1));
    assert_eq!(maze.solve(Algorithm::Bfs).unwrap().steps(), 3);
}

#[test]
fn every_algorithm_reaches_the_goal() {
    let maze = Maze::parse(SMALL).unwrap();
    for algorithm in Algorithm::ALL {
        let path = maze.solve(algorithm).unwrap();
        assert_eq!(path.start(), Some(&maze.start()), "{algorithm}");
        assert_eq!(path.goal(), Some(&maze.goal()), "{algorithm}");
        assert!(path.nodes.iter().all(|p| maze.is_open(*p)), "{algorithm}");
    }
    for algorithm in [Algorithm::Bfs, Algorithm::Dijkstra, Algorithm::AStar] {
        assert_eq!(maze.solve(algorithm).unwrap().steps(), 4, "{algorithm}");
    }
}

#[test]
fn wall_costs_two_extra_steps() {
    let maze = Maze::parse(DETOUR).unwrap();
    assert_eq!(maze.start().manhattan(maze.goal()), 4);
    assert_eq!(maze.solve(Algorithm::Bfs).unwrap().steps(), 6);
    assert_eq!(maze.solve(Algorithm::AStar).unwrap().cost, 6);
}

#[test]
fn astar_expands_no_more_than_dijkstra() {
    let maze = Maze::parse(DETOUR).unwrap();
    let astar = maze.solve(Algorithm::AStar).unwrap();
    let dijkstra = maze.solve(Algorithm::Dijkstra).unwrap();
    assert!(astar.explored <= dijkstra.explored);
}

#[test]
fn walled_off_goal() {
    let maze = Maze::parse("S#G").unwrap();
    for algorithm in Algorithm::ALL {
        assert_eq!(maze.solve(algorithm), Err(Error::NoPathFound));
    }
}

#[test]
fn algorithm_names() {
    assert_eq!("AStar".parse::<Algorithm>(), Ok(Algorithm::AStar));
    assert_eq!(" bfs ".parse::<Algorithm>(), Ok(Algorithm::Bfs));
    assert!("greedy".parse::<Algorithm>().is_err());
    assert_eq!(Algorithm::Dijkstra.to_string(), "dijkstra");
}

#[test]
fn path_is_drawn_over_the_maze() {
    let maze: Maze = CORRIDOR.parse().unwrap();
    let path = maze.solve(Algorithm::Bfs).unwrap();
    assert_eq!(path.steps(), 6);
    assert_eq!(render_path(&maze, &path), "S**\n##*\nG**");
}

#[test]
fn recorder_draws_one_frame_per_expansion() {
    let maze = Maze::parse(CORRIDOR).unwrap();
    let mut recorder = FrameRecorder::new(&maze);
    let path = maze.solve_with(Algorithm::Bfs, &mut recorder).unwrap();

    let frames = recorder.into_frames();
    assert_eq!(frames.len(), path.explored);
    assert_eq!(frames[0], "S  \n## \nG  ");
    assert_eq!(frames[1], "Sx \n## \nG  ");
    assert_eq!(frames[2], "S.x\n## \nG  ");
    assert_eq!(frames[3], "S..\n##x\nG  ");
}

#[test]
fn recorder_shows_frontier() {
    let maze = Maze::parse("...\nS.G").unwrap();
    let mut recorder = FrameRecorder::new(&maze);
    maze.solve_with(Algorithm::Bfs, &mut recorder).unwrap();
    // while the cell above S is expanded, the one to its right waits on the frontier
    assert_eq!(recorder.frames()[1].matches('o').count(), 1);
    assert!(recorder.frames().iter().all(|f| f.lines().count() == 2));
}

#[test]
fn vertex_labels() {
    assert_eq!(vertex_label(0), "A");
    assert_eq!(vertex_label(25), "Z");
    assert_eq!(vertex_label(26), "AA");
    assert_eq!(vertex_label(27), "AB");
    assert_eq!(vertex_label(52), "BA");
    assert_eq!(vertex_label(701), "ZZ");
    assert_eq!(vertex_label(702), "AAA");
    assert_ne!(vertex_label(usize::MAX), vertex_label(usize::MAX - 1));
}

#[test]
fn network_shortest_path() {
    let network = Network::parse(TRIANGLE).unwrap();
    assert_eq!(network.len(), 3);
    assert_eq!(network.graph().vertices()[2], Point2::new(2, 3));

    let path = network.shortest_path(0, 2).unwrap();
    assert_eq!(path.cost, 8);
    assert_eq!(network.describe_path(&path.nodes), "A->B->C");
    assert_eq!(network.shortest_path(0, 9), Err(Error::NoPathFound));
}

#[test]
fn network_all_pairs() {
    let network = Network::parse(TRIANGLE).unwrap();
    let matrix = network.all_pairs();
    assert_eq!(matrix.get(0, 2), Distance::Finite(8));
    assert_eq!(
        render_distance_matrix(&matrix),
        "   A | B | C \n ------------\nA|  0|  5|  8\nB|  5|  0|  3\nC|  8|  3|  0"
    );

    let (matrix, next) = network.all_pairs_with_paths();
    for i in 0..3 {
        for j in 0..3 {
            let dijkstra = network.shortest_path(i, j).unwrap();
            assert_eq!(matrix.get(i, j), Distance::Finite(dijkstra.cost));
            assert_eq!(next.path(i, j), Some(dijkstra.nodes));
        }
    }
}

#[test]
fn wide_distances_keep_a_leading_space() {
    let network = Network::parse("2 1\n0 0\n1 0\n0 1 100").unwrap();
    let rendered = render_distance_matrix(&network.all_pairs());
    assert_eq!(rendered.lines().nth(2), Some("A|  0| 100"));
    assert_eq!(rendered.lines().nth(3), Some("B| 100|  0"));
}

#[test]
fn disconnected_network() {
    let network = Network::parse("3 1\n0 0\n1 0\n2 0\n0 1 4").unwrap();
    assert_eq!(network.shortest_path(0, 2), Err(Error::NoPathFound));
    let rendered = render_distance_matrix(&network.all_pairs());
    assert_eq!(rendered.lines().nth(2), Some("A|  0|  4|inf"));
}

#[test]
fn malformed_networks() {
    let cases = [
        ("", 0),
        ("2 1\n0 0", 0),
        ("2 1\n0 0\n1 x\n0 1 3", 3),
        ("2 1\n0 0\n1 1\n0 5 3", 4),
        ("2 1\n0 0\n1 1\n0 1 -3", 4),
        ("2 0\n0 0\n1 1\n0 1 3", 4),
        ("2\n0 0\n1 1", 1),
        ("18446744073709551615 0\n0 0", 0),
        ("1 18446744073709551615\n0 0", 0),
    ];
    for (input, line) in cases {
        match Network::parse(input) {
            Err(Error::MalformedInput { line: got, .. }) => assert_eq!(got, line, "{input:?}"),
            other => panic!("{input:?} gave {other:?}"),
        }
    }
}
