use crate::point::Point;
use rayon::prelude::*;

/// Index-based adjacency lists for a point set under a distance threshold.
///
/// `lists[i]` holds the indices of every point strictly closer than the
/// threshold to point `i`, excluding `i` itself, in ascending index order.
/// Construction is an all-pairs O(n²) scan, parallelized per row.
///
/// A map is tied to the exact point slice it was built from. The greedy
/// builder rebuilds maps over its shrinking working set; the domination
/// oracle and the swap passes must only ever see the map built over the
/// full input.
#[derive(Clone, Debug, Default)]
pub struct NeighborMap {
    lists: Vec<Vec<usize>>,
}

impl NeighborMap {
    /// Builds the adjacency lists for `points` under `threshold`.
    ///
    /// Adjacency is strict: two points exactly `threshold` apart are not
    /// neighbors. Comparison happens on squared distances, which is exact
    /// for integer coordinates.
    pub fn build(points: &[Point], threshold: f64) -> NeighborMap {
        let threshold_sq = threshold * threshold;
        let lists = points
            .par_iter()
            .enumerate()
            .map(|(i, p)| {
                points
                    .iter()
                    .enumerate()
                    .filter(|&(j, q)| i != j && p.distance_sq(q) < threshold_sq)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();
        NeighborMap { lists }
    }

    /// Neighbor indices of point `index`.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.lists[index]
    }

    /// Number of neighbors of point `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.lists[index].len()
    }

    /// True if point `index` has no neighbors under the threshold.
    pub fn is_isolated(&self, index: usize) -> bool {
        self.lists[index].is_empty()
    }

    /// Number of points the map was built over.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
