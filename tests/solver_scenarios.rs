mod common;

use common::synthetic_image::{columns, noise, rectangle, uniform};
use livewire::energy::EPSILON;
use livewire::graph::{GridGraph, Viewport};
use livewire::solver::{shortest_path, SolverWorkspace};
use livewire::{GridPoint, Rgb};

fn rel_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn two_by_two_black_image() {
    let _ = env_logger::builder().is_test(true).try_init();
    let graph = GridGraph::build(&uniform(2, 2, Rgb::BLACK), Viewport::default()).unwrap();
    let path = shortest_path(&graph, GridPoint::new(0, 0), GridPoint::new(1, 1)).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.points[0], GridPoint::new(0, 0));
    assert_eq!(path.points[2], GridPoint::new(1, 1));
    assert!(rel_eq(path.cost, 2.0 / EPSILON), "cost={}", path.cost);
}

#[test]
fn equal_cost_relaxation_overwrites_predecessor() {
    // (1,1) is first reached through (0,1); the later equal-cost offer from
    // (1,0) replaces it.
    let graph = GridGraph::build(&uniform(2, 2, Rgb::BLACK), Viewport::default()).unwrap();
    let path = shortest_path(&graph, GridPoint::new(0, 0), GridPoint::new(1, 1)).unwrap();
    assert_eq!(
        path.points,
        vec![GridPoint::new(0, 0), GridPoint::new(1, 0), GridPoint::new(1, 1)]
    );

    let mut ws = SolverWorkspace::new();
    let again = ws.solve(&graph, GridPoint::new(0, 0), GridPoint::new(1, 1)).unwrap();
    assert_eq!(again.points, path.points);
}

#[test]
fn uniform_cost_is_proportional_to_manhattan_distance() {
    let graph = GridGraph::build(&uniform(12, 9, Rgb::gray(77)), Viewport::default()).unwrap();
    let mut ws = SolverWorkspace::new();
    let pairs = [((0, 0), (8, 11)), ((4, 4), (4, 4)), ((8, 0), (0, 11)), ((3, 7), (5, 2))];
    for (s, d) in pairs {
        let (s, d) = (GridPoint::from(s), GridPoint::from(d));
        let path = ws.solve(&graph, s, d).unwrap();
        let hops = s.manhattan(d);
        assert_eq!(path.len(), hops + 1, "{:?} -> {:?}", s, d);
        assert!(
            rel_eq(path.cost, hops as f64 * (1.0 / EPSILON)),
            "{:?} -> {:?}: cost={} hops={}",
            s,
            d,
            path.cost,
            hops
        );
        for pair in path.points.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }
}

#[test]
fn single_row_strip_crosses_the_edge() {
    let graph = GridGraph::build(&columns(&[0, 0, 0, 255, 255], 1), Viewport::default()).unwrap();
    let path = shortest_path(&graph, GridPoint::new(0, 0), GridPoint::new(0, 4)).unwrap();
    let cols: Vec<usize> = path.points.iter().map(|p| p.col).collect();
    assert_eq!(cols, vec![0, 1, 2, 3, 4]);
    assert!(path.points.iter().all(|p| p.row == 0));
}

#[test]
fn reversed_solve_has_equal_cost() {
    let graph = GridGraph::build(&noise(20, 16, 11), Viewport::default()).unwrap();
    let mut ws = SolverWorkspace::new();
    let (s, d) = (GridPoint::new(1, 2), GridPoint::new(14, 17));
    let forward = ws.solve(&graph, s, d).unwrap();
    let backward = ws.solve(&graph, d, s).unwrap();
    assert!(rel_eq(forward.cost, backward.cost), "{} vs {}", forward.cost, backward.cost);
    assert_eq!(forward.first(), Some(s));
    assert_eq!(backward.first(), Some(d));
    assert_eq!(graph.path_cost(&forward.points).map(|c| rel_eq(c, forward.cost)), Some(true));
}

#[test]
fn reversed_solve_retraces_a_unique_path() {
    // The only cheap route runs along the bright/dark boundary in row 2.
    let img = rectangle(10, 6, 0..3, 0..10, Rgb::BLACK, Rgb::WHITE);
    let graph = GridGraph::build(&img, Viewport::default()).unwrap();
    let (s, d) = (GridPoint::new(2, 0), GridPoint::new(2, 9));
    let forward = shortest_path(&graph, s, d).unwrap();
    let mut backward = shortest_path(&graph, d, s).unwrap().points;
    backward.reverse();
    assert_eq!(forward.points, backward);
    assert!(forward.points.iter().all(|p| p.row == 2));
}

#[test]
fn solves_inside_a_scrolled_window() {
    let img = uniform(700, 600, Rgb::gray(64));
    let graph = GridGraph::build(&img, Viewport::scrolled_to(50, 100)).unwrap();
    let (s, d) = (GridPoint::new(60, 110), GridPoint::new(90, 150));
    let path = shortest_path(&graph, s, d).unwrap();
    assert_eq!(path.first(), Some(s));
    assert_eq!(path.last(), Some(d));
    assert_eq!(path.len(), s.manhattan(d) + 1);
    assert!(shortest_path(&graph, GridPoint::new(10, 10), d).is_err());
}
