use crate::config::SolverConfig;
use crate::point::Point;
use crate::solver::Solver;
use js_sys::Array;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// JS-facing dominating-set solver over 2D integer points.
///
/// Points cross the boundary as flat `[x, y, x, y, ...]` arrays, matching
/// typed-array ergonomics on the JS side. Coordinates are truncated to
/// integers.
#[wasm_bindgen]
pub struct DominatingSet {
    inner: Solver,
    result: Vec<Point>,
}

#[wasm_bindgen]
impl DominatingSet {
    /// Creates a solver for the given adjacency threshold.
    ///
    /// Throws if the threshold is not strictly positive.
    #[wasm_bindgen(constructor)]
    pub fn new(edge_threshold: f64) -> Result<DominatingSet, JsError> {
        let inner = Solver::new(SolverConfig::new(edge_threshold))?;
        Ok(DominatingSet {
            inner,
            result: Vec::new(),
        })
    }

    /// Replaces the input points from a flat `[x, y, x, y, ...]` array.
    ///
    /// Throws on an odd-length array or duplicate coordinates.
    pub fn set_points(&mut self, coords: &[f64]) -> Result<(), JsError> {
        if coords.len() % 2 != 0 {
            return Err(JsError::new("expected a flat [x, y, x, y, ...] array"));
        }
        let points = coords
            .chunks_exact(2)
            .map(|c| Point::new(c[0] as i64, c[1] as i64))
            .collect();
        self.inner.set_points(points)?;
        self.result.clear();
        Ok(())
    }

    /// Generates `count` distinct random points in `[0, width) x [0, height)`.
    ///
    /// Throws when either dimension truncates to a non-positive integer.
    pub fn random_points(&mut self, count: usize, width: f64, height: f64) -> Result<(), JsError> {
        self.inner
            .random_points(count, width as i64, height as i64)?;
        self.result.clear();
        Ok(())
    }

    /// Bounds how far from removed points the swap passes search for
    /// replacements, as a multiple of the edge threshold.
    ///
    /// Throws if the factor is below 1.
    pub fn set_swap_radius_factor(&mut self, factor: f64) -> Result<(), JsError> {
        let mut config = *self.inner.config();
        config.swap_radius_factor = factor;
        self.inner.set_config(config)?;
        Ok(())
    }

    /// Runs the full pipeline and stores the result.
    pub fn solve(&mut self) {
        self.result = self.inner.solve();
    }

    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize {
        self.inner.count_points()
    }

    #[wasm_bindgen(getter)]
    pub fn count_result(&self) -> usize {
        self.result.len()
    }

    /// The computed dominating set as a flat `[x, y, x, y, ...]` array.
    ///
    /// Empty until [`DominatingSet::solve`] has run.
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> Vec<f64> {
        self.result
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect()
    }

    /// The current input as a flat `[x, y, x, y, ...]` array.
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> {
        self.inner
            .points()
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect()
    }

    /// The computed set as an array of `[x, y]` pairs, for callers that
    /// prefer nested arrays over the flat layout.
    pub fn result_pairs(&self) -> Array {
        self.result
            .iter()
            .map(|p| {
                Array::of2(
                    &JsValue::from_f64(p.x as f64),
                    &JsValue::from_f64(p.y as f64),
                )
            })
            .collect()
    }
}
