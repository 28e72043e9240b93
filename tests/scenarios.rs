use domset::{compute_dominating_set, Point};

#[test]
fn test_unit_square_needs_one_point() {
    // Side 1, threshold 1.5: the diagonal (~1.414) is inside the threshold,
    // so every point dominates all four.
    let points = vec![
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(1, 1),
    ];
    let set = compute_dominating_set(&points, 1.5).unwrap();
    assert_eq!(set.len(), 1, "expected a single dominator, got {set:?}");
    assert!(points.contains(&set[0]));
}

#[test]
fn test_two_isolated_points() {
    let points = vec![Point::new(0, 0), Point::new(10, 0)];
    let mut set = compute_dominating_set(&points, 1.0).unwrap();
    set.sort_unstable_by_key(|p| (p.x, p.y));
    assert_eq!(set, points);
}

#[test]
fn test_line_of_five_reaches_two() {
    // Spacing 1, threshold 1.1: only consecutive points are adjacent.
    // The optimum is 2 (e.g. indices 1 and 3) and the local search must get
    // there even when greedy starts with 3.
    let points: Vec<Point> = (0..5).map(|x| Point::new(x, 0)).collect();
    let set = compute_dominating_set(&points, 1.1).unwrap();
    assert_eq!(set.len(), 2, "expected 2 dominators, got {set:?}");
}

#[test]
fn test_empty_input() {
    let set = compute_dominating_set(&[], 3.0).unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_single_point_any_threshold() {
    let points = vec![Point::new(-4, 9)];
    for threshold in [0.001, 1.0, 1e6] {
        let set = compute_dominating_set(&points, threshold).unwrap();
        assert_eq!(set, points);
    }
}

#[test]
fn test_boundary_pair_not_adjacent() {
    // Exactly threshold apart: adjacency is strict, so both points are
    // isolated and both must be in the result.
    let points = vec![Point::new(0, 0), Point::new(5, 0)];
    let set = compute_dominating_set(&points, 5.0).unwrap();
    assert_eq!(set.len(), 2);
}
