use crate::neighbors::NeighborMap;

/// Checks whether `candidate` dominates all `point_count` input points.
///
/// A point is dominated when it is in `candidate` or adjacent to a member of
/// `candidate`. Adjacency is looked up in `full_map`, which must be the map
/// built over the complete input point set: checking a swap against a map
/// rebuilt over a shrunken working set would accept sets that leave already
/// dominated points uncovered.
pub fn is_dominating(candidate: &[usize], point_count: usize, full_map: &NeighborMap) -> bool {
    debug_assert_eq!(full_map.len(), point_count);

    let mut covered = vec![false; point_count];
    let mut remaining = point_count;

    for &i in candidate {
        debug_assert!(i < point_count, "candidate index out of range");
        if !covered[i] {
            covered[i] = true;
            remaining -= 1;
        }
        for &j in full_map.neighbors(i) {
            if !covered[j] {
                covered[j] = true;
                remaining -= 1;
            }
        }
        if remaining == 0 {
            return true;
        }
    }

    remaining == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn map(points: &[Point], t: f64) -> NeighborMap {
        NeighborMap::build(points, t)
    }

    #[test]
    fn test_single_center_dominates_square() {
        // Unit square, threshold 1.5: diagonal ~1.414 < 1.5, all adjacent.
        let points = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(1, 1),
        ];
        let m = map(&points, 1.5);
        for i in 0..points.len() {
            assert!(is_dominating(&[i], points.len(), &m));
        }
    }

    #[test]
    fn test_rejects_uncovered_point() {
        let points = vec![Point::new(0, 0), Point::new(10, 0)];
        let m = map(&points, 1.0);
        assert!(!is_dominating(&[0], points.len(), &m));
        assert!(is_dominating(&[0, 1], points.len(), &m));
    }

    #[test]
    fn test_boundary_pair_rejected() {
        // Exactly threshold apart: neither dominates the other.
        let points = vec![Point::new(0, 0), Point::new(3, 0)];
        let m = map(&points, 3.0);
        assert!(!is_dominating(&[0], points.len(), &m));
    }

    #[test]
    fn test_empty_set_dominates_nothing_but_empty() {
        let m = map(&[], 1.0);
        assert!(is_dominating(&[], 0, &m));

        let points = vec![Point::new(0, 0)];
        let m = map(&points, 1.0);
        assert!(!is_dominating(&[], points.len(), &m));
    }
}
