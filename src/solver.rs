use crate::config::SolverConfig;
use crate::domination::is_dominating;
use crate::error::Error;
use crate::greedy;
use crate::local_search;
use crate::neighbors::NeighborMap;
use crate::point::Point;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::info;

/// The main container for dominating-set computations.
///
/// Owns the input points and a [`SolverConfig`]; [`Solver::solve`] runs the
/// full pipeline: neighbor-map construction, greedy cover, then local-search
/// refinement. The input is read-only once set, so `solve` can be called
/// repeatedly (e.g. after swapping in a retuned configuration with
/// [`Solver::set_config`]).
pub struct Solver {
    points: Vec<Point>,
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with a validated configuration and no points.
    pub fn new(config: SolverConfig) -> Result<Solver, Error> {
        config.validate()?;
        Ok(Solver {
            points: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Replaces the configuration, rejecting invalid values.
    ///
    /// The config is only reachable through this validated path, so a
    /// non-positive threshold can never make it into a `solve` call.
    pub fn set_config(&mut self, config: SolverConfig) -> Result<(), Error> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Replaces the input point set.
    ///
    /// Duplicate coordinates are rejected: the greedy degree counts assume
    /// each location appears once, and a duplicate would corrupt them
    /// silently rather than fail.
    pub fn set_points(&mut self, points: Vec<Point>) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(points.len());
        for &p in &points {
            if !seen.insert(p) {
                return Err(Error::DuplicatePoint { point: p });
            }
        }
        self.points = points;
        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn count_points(&self) -> usize {
        self.points.len()
    }

    /// Generates `count` distinct random points in `[0, width) x [0, height)`
    /// and sets them as the input.
    ///
    /// Both dimensions must be positive; sampling from an empty range is an
    /// input error, not a panic.
    pub fn random_points(&mut self, count: usize, width: i64, height: i64) -> Result<(), Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidArea { width, height });
        }
        let mut rng = StdRng::seed_from_u64(get_seed());
        let mut seen = HashSet::with_capacity(count);
        let mut points = Vec::with_capacity(count);

        let max_attempts = count.saturating_mul(1000); // Safety limit
        let mut attempts = 0;
        while points.len() < count && attempts < max_attempts {
            attempts += 1;
            let p = Point::new(rng.gen_range(0..width), rng.gen_range(0..height));
            if seen.insert(p) {
                points.push(p);
            }
        }
        self.points = points;
        Ok(())
    }

    /// Computes an approximate minimum dominating set.
    ///
    /// The returned points are a subset of the input; every input point is
    /// either in the result or strictly within `edge_threshold` of one.
    pub fn solve(&self) -> Vec<Point> {
        let full_map = NeighborMap::build(&self.points, self.config.edge_threshold);
        let set = self.solve_with_map(&full_map);
        set.into_iter().map(|i| self.points[i]).collect()
    }

    /// Pipeline over an already-built full neighbor map, returning indices.
    pub(crate) fn solve_with_map(&self, full_map: &NeighborMap) -> Vec<usize> {
        info!(
            points = self.points.len(),
            threshold = self.config.edge_threshold,
            "starting dominating set computation"
        );

        let mut set = greedy::greedy_cover(&self.points, self.config.edge_threshold, full_map);
        debug_assert!(is_dominating(&set, self.points.len(), full_map));
        info!(size = set.len(), "greedy construction done");

        local_search::optimize(&mut set, &self.points, full_map, &self.config);
        debug_assert!(is_dominating(&set, self.points.len(), full_map));
        info!(size = set.len(), "local search done");

        set
    }

    /// Checks a previously computed set against the current input.
    ///
    /// Used to validate cached results: the set must consist solely of
    /// current input points and must still dominate them.
    pub fn is_valid_solution(&self, set: &[Point]) -> bool {
        let Some(indices) = self.resolve_indices(set) else {
            return false;
        };
        let full_map = NeighborMap::build(&self.points, self.config.edge_threshold);
        is_dominating(&indices, self.points.len(), &full_map)
    }

    fn resolve_indices(&self, set: &[Point]) -> Option<Vec<usize>> {
        let positions: std::collections::HashMap<Point, usize> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, i))
            .collect();
        set.iter().map(|p| positions.get(p).copied()).collect()
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}

/// Convenience entry point: one call from points and threshold to result.
///
/// Uses the default [`SolverConfig`] apart from the threshold. Returns an
/// error for a non-positive threshold or duplicate input points; never
/// returns a partial result.
pub fn compute_dominating_set(points: &[Point], edge_threshold: f64) -> Result<Vec<Point>, Error> {
    let mut solver = Solver::new(SolverConfig::new(edge_threshold))?;
    solver.set_points(points.to_vec())?;
    Ok(solver.solve())
}
