use crate::local_search;
use crate::neighbors::NeighborMap;
use crate::point::Point;

/// Builds an initial dominating set with a greedy set-cover strategy.
///
/// Isolated points go in first since nothing else can dominate them. After
/// that the builder repeatedly picks the undominated point covering the most
/// currently undominated points, where "currently" means degrees are
/// recomputed against the shrinking working set after every pick. Ties go to
/// the lowest point index.
///
/// The returned set is feasible but usually redundant, so a single
/// [`local_search::clean`] pass runs before returning. Indices refer to
/// `points`; `full_map` must be built over `points` with the same threshold.
pub fn greedy_cover(points: &[Point], threshold: f64, full_map: &NeighborMap) -> Vec<usize> {
    let mut result = Vec::new();
    if points.is_empty() {
        return result;
    }

    // Degree-zero points dominate only themselves.
    let mut working: Vec<usize> = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        if full_map.is_isolated(i) {
            result.push(i);
        } else {
            working.push(i);
        }
    }

    while !working.is_empty() {
        // Adjacency among the not-yet-dominated points only. A point's
        // degree here is how many undominated points it would newly cover.
        let subset: Vec<Point> = working.iter().map(|&i| points[i]).collect();
        let map = NeighborMap::build(&subset, threshold);

        let mut best = 0;
        for local in 1..working.len() {
            if map.degree(local) > map.degree(best) {
                best = local;
            }
        }

        result.push(working[best]);

        let mut done = vec![false; working.len()];
        done[best] = true;
        for &local in map.neighbors(best) {
            done[local] = true;
        }

        let mut next = Vec::with_capacity(working.len());
        for (local, &global) in working.iter().enumerate() {
            if !done[local] {
                next.push(global);
            }
        }
        working = next;
    }

    local_search::clean(&mut result, points.len(), full_map);
    result
}
