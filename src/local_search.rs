//! Local-search refinement of a feasible dominating set.
//!
//! Three passes, each accepting a move only if the domination oracle still
//! accepts the modified set against the full neighbor map:
//!
//! - [`clean`] drops members that are individually redundant (remove-1);
//! - [`swap_pairs`] replaces two members with one outside point (2-for-1);
//! - [`swap_triples`] replaces three members with two outside points (3-for-2).
//!
//! The swap passes are first-improvement searches: the scan restarts from
//! the top after every accepted swap. Candidate enumeration runs in parallel
//! over the outermost scan position, and among parallel hits the
//! lexicographically smallest position wins, so results are reproducible.

use crate::config::SolverConfig;
use crate::domination::is_dominating;
use crate::neighbors::NeighborMap;
use crate::point::Point;
use rayon::prelude::*;
use tracing::{debug, trace, warn};

/// Runs clean, 2-for-1 and 3-for-2 in sequence, cycling until a full cycle
/// changes nothing or `config.max_rounds` cycles have run.
pub fn optimize(
    set: &mut Vec<usize>,
    points: &[Point],
    full_map: &NeighborMap,
    config: &SolverConfig,
) {
    for round in 0..config.max_rounds {
        let before = set.len();

        clean(set, points.len(), full_map);
        debug!(round, size = set.len(), "clean pass done");

        swap_pairs(set, points, full_map, config);
        debug!(round, size = set.len(), "2-for-1 pass done");

        swap_triples(set, points, full_map, config);
        debug!(round, size = set.len(), "3-for-2 pass done");

        if set.len() == before {
            return;
        }
    }
    warn!(
        max_rounds = config.max_rounds,
        "optimizer stopped at round budget before reaching a fixed point"
    );
}

/// Remove-1 pass: drops every member whose removal keeps the set dominating.
///
/// Members are tried in their current order and removals take effect
/// immediately, so an early removal can make a later one safe or unsafe.
/// Running the pass again on its own output removes nothing further.
/// Returns true if the set shrank.
pub fn clean(set: &mut Vec<usize>, point_count: usize, full_map: &NeighborMap) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i < set.len() {
        let member = set.remove(i);
        if is_dominating(set, point_count, full_map) {
            trace!(point = member, "removed redundant member");
            changed = true;
        } else {
            set.insert(i, member);
            i += 1;
        }
    }
    changed
}

/// 2-for-1 pass: swaps a pair of members for a single outside point while
/// the set stays dominating. Returns true if the set shrank.
pub fn swap_pairs(
    set: &mut Vec<usize>,
    points: &[Point],
    full_map: &NeighborMap,
    config: &SolverConfig,
) -> bool {
    let mut changed = false;
    while let Some((a, b, candidate)) = find_pair_swap(set, points, full_map, config) {
        trace!(
            out1 = set[a],
            out2 = set[b],
            inn = candidate,
            "2-for-1 swap accepted"
        );
        set.remove(b);
        set.remove(a);
        set.push(candidate);
        changed = true;
    }
    changed
}

/// 3-for-2 pass: swaps a triple of members for a pair of outside points
/// while the set stays dominating. Returns true if the set shrank.
pub fn swap_triples(
    set: &mut Vec<usize>,
    points: &[Point],
    full_map: &NeighborMap,
    config: &SolverConfig,
) -> bool {
    let mut changed = false;
    while let Some(((a, b, c), (c1, c2))) = find_triple_swap(set, points, full_map, config) {
        trace!(
            out1 = set[a],
            out2 = set[b],
            out3 = set[c],
            in1 = c1,
            in2 = c2,
            "3-for-2 swap accepted"
        );
        set.remove(c);
        set.remove(b);
        set.remove(a);
        set.push(c1);
        set.push(c2);
        changed = true;
    }
    changed
}

/// Finds the lexicographically first accepted 2-for-1 swap, if any.
///
/// Pair pruning: a single replacement point can only cover both removed
/// neighborhoods if the pair is within `2 * threshold` of each other.
/// Candidates are outside points within `swap_radius_factor * threshold`
/// of BOTH pair members.
fn find_pair_swap(
    set: &[usize],
    points: &[Point],
    full_map: &NeighborMap,
    config: &SolverConfig,
) -> Option<(usize, usize, usize)> {
    let pair_limit_sq = (2.0 * config.edge_threshold) * (2.0 * config.edge_threshold);
    let radius = config.swap_radius_factor * config.edge_threshold;
    let radius_sq = radius * radius;
    let in_set = membership(set, points.len());

    (0..set.len()).into_par_iter().find_map_first(|a| {
        let p1 = points[set[a]];
        let mut trial: Vec<usize> = Vec::with_capacity(set.len() - 1);
        for b in (a + 1)..set.len() {
            let p2 = points[set[b]];
            if p1.distance_sq(&p2) > pair_limit_sq {
                continue;
            }
            trial.clear();
            trial.extend(
                set.iter()
                    .enumerate()
                    .filter(|&(k, _)| k != a && k != b)
                    .map(|(_, &m)| m),
            );
            trial.push(usize::MAX); // placeholder for the candidate
            for (candidate, q) in points.iter().enumerate() {
                if in_set[candidate]
                    || q.distance_sq(&p1) > radius_sq
                    || q.distance_sq(&p2) > radius_sq
                {
                    continue;
                }
                *trial.last_mut().unwrap() = candidate;
                if is_dominating(&trial, points.len(), full_map) {
                    return Some((a, b, candidate));
                }
            }
        }
        None
    })
}

/// Finds the lexicographically first accepted 3-for-2 swap, if any.
///
/// Triple pruning: every member must be within `2 * radius` of at least one
/// other member, otherwise no two replacement points can bridge the triple.
/// The candidate pool is the union of the triple members' full-map neighbor
/// lists minus current set members, which keeps the pool proportional to
/// vertex degree rather than the instance size. Pool members already lie
/// within the threshold of a removed point, so `swap_radius_factor` (always
/// at least 1) prunes which triples are scanned, never the candidates
/// themselves.
fn find_triple_swap(
    set: &[usize],
    points: &[Point],
    full_map: &NeighborMap,
    config: &SolverConfig,
) -> Option<((usize, usize, usize), (usize, usize))> {
    let radius = config.swap_radius_factor * config.edge_threshold;
    let link_limit_sq = (2.0 * radius) * (2.0 * radius);
    let in_set = membership(set, points.len());

    (0..set.len()).into_par_iter().find_map_first(|a| {
        let p1 = points[set[a]];
        let mut pool: Vec<usize> = Vec::new();
        let mut trial: Vec<usize> = Vec::with_capacity(set.len() - 1);
        for b in (a + 1)..set.len() {
            let p2 = points[set[b]];
            let d12 = p1.distance_sq(&p2);
            for c in (b + 1)..set.len() {
                let p3 = points[set[c]];
                let d13 = p1.distance_sq(&p3);
                let d23 = p2.distance_sq(&p3);
                // Each member needs a partner within reach.
                if d12.min(d13) > link_limit_sq
                    || d12.min(d23) > link_limit_sq
                    || d13.min(d23) > link_limit_sq
                {
                    continue;
                }

                pool.clear();
                for &m in [set[a], set[b], set[c]].iter() {
                    for &n in full_map.neighbors(m) {
                        if !in_set[n] && !pool.contains(&n) {
                            pool.push(n);
                        }
                    }
                }
                pool.sort_unstable();
                if pool.len() < 2 {
                    continue;
                }

                trial.clear();
                trial.extend(
                    set.iter()
                        .enumerate()
                        .filter(|&(k, _)| k != a && k != b && k != c)
                        .map(|(_, &m)| m),
                );
                trial.push(usize::MAX);
                trial.push(usize::MAX);
                let base = trial.len() - 2;
                for i in 0..pool.len() {
                    for j in (i + 1)..pool.len() {
                        trial[base] = pool[i];
                        trial[base + 1] = pool[j];
                        if is_dominating(&trial, points.len(), full_map) {
                            return Some(((a, b, c), (pool[i], pool[j])));
                        }
                    }
                }
            }
        }
        None
    })
}

fn membership(set: &[usize], point_count: usize) -> Vec<bool> {
    let mut in_set = vec![false; point_count];
    for &m in set {
        in_set[m] = true;
    }
    in_set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: i64, spacing: i64) -> Vec<Point> {
        (0..n).map(|i| Point::new(i * spacing, 0)).collect()
    }

    #[test]
    fn test_clean_removes_redundant_members() {
        // Path of 5, threshold 1.1: {1, 3} dominates, the rest is padding.
        let points = line(5, 1);
        let map = NeighborMap::build(&points, 1.1);
        let mut set = vec![0, 1, 2, 3, 4];

        assert!(clean(&mut set, points.len(), &map));
        assert!(is_dominating(&set, points.len(), &map));
        assert!(set.len() <= 2, "clean left {} members", set.len());
    }

    #[test]
    fn test_clean_is_idempotent() {
        let points = line(7, 1);
        let map = NeighborMap::build(&points, 1.1);
        let mut set = vec![0, 1, 2, 3, 4, 5, 6];

        clean(&mut set, points.len(), &map);
        let after_first = set.clone();
        assert!(!clean(&mut set, points.len(), &map));
        assert_eq!(set, after_first);
    }

    #[test]
    fn test_clean_keeps_needed_members() {
        let points = vec![Point::new(0, 0), Point::new(10, 0)];
        let map = NeighborMap::build(&points, 1.0);
        let mut set = vec![0, 1];
        assert!(!clean(&mut set, points.len(), &map));
        assert_eq!(set, vec![0, 1]);
    }

    #[test]
    fn test_swap_pairs_merges_overlapping_members() {
        // Endpoints of a path of 3 get replaced by the middle point.
        let points = line(3, 1);
        let map = NeighborMap::build(&points, 1.1);
        let config = SolverConfig::new(1.1);
        let mut set = vec![0, 2];

        assert!(swap_pairs(&mut set, &points, &map, &config));
        assert_eq!(set, vec![1]);
        assert!(is_dominating(&set, points.len(), &map));
    }

    #[test]
    fn test_swap_pairs_fixed_point() {
        let points = line(3, 1);
        let map = NeighborMap::build(&points, 1.1);
        let config = SolverConfig::new(1.1);
        let mut set = vec![1];
        assert!(!swap_pairs(&mut set, &points, &map, &config));
        assert_eq!(set, vec![1]);
    }

    #[test]
    fn test_swap_triples_shrinks_line_cover() {
        // Path of 5, threshold 1.1: {0, 2, 4} is feasible but {1, 3} is
        // the optimum, reachable only through a 3-for-2 move.
        let points = line(5, 1);
        let map = NeighborMap::build(&points, 1.1);
        let config = SolverConfig::new(1.1);
        let mut set = vec![0, 2, 4];
        assert!(is_dominating(&set, points.len(), &map));

        assert!(swap_triples(&mut set, &points, &map, &config));
        set.sort_unstable();
        assert_eq!(set, vec![1, 3]);
    }

    #[test]
    fn test_optimize_reaches_minimum_on_line() {
        let points = line(5, 1);
        let map = NeighborMap::build(&points, 1.1);
        let config = SolverConfig::new(1.1);

        // Worst feasible starting set: everything.
        let mut set = vec![0, 1, 2, 3, 4];
        optimize(&mut set, &points, &map, &config);

        assert!(is_dominating(&set, points.len(), &map));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_optimize_respects_round_budget() {
        let points = line(5, 1);
        let map = NeighborMap::build(&points, 1.1);
        let mut config = SolverConfig::new(1.1);
        config.max_rounds = 0;

        let mut set = vec![0, 1, 2, 3, 4];
        optimize(&mut set, &points, &map, &config);
        assert_eq!(set, vec![0, 1, 2, 3, 4]);
    }
}
