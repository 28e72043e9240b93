use crate::error::Error;

/// Tuning parameters for a dominating-set computation.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Two points are adjacent when their distance is strictly below this.
    pub edge_threshold: f64,
    /// Multiplier of `edge_threshold` bounding how far from the removed
    /// points the swap passes look for replacement candidates. 1.0 keeps
    /// only candidates adjacent to every removed point; larger values widen
    /// the search (better sets, slower scans). Values around 2.0–2.5 are a
    /// good trade-off.
    pub swap_radius_factor: f64,
    /// Upper bound on full clean/swap cycles before the optimizer gives up
    /// reaching a fixed point. Guards against pathological inputs where the
    /// swap scans are O(n³) per cycle.
    pub max_rounds: usize,
}

impl SolverConfig {
    pub fn new(edge_threshold: f64) -> SolverConfig {
        SolverConfig {
            edge_threshold,
            ..SolverConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.edge_threshold > 0.0) {
            return Err(Error::InvalidThreshold {
                value: self.edge_threshold,
            });
        }
        if !(self.swap_radius_factor >= 1.0) {
            return Err(Error::InvalidRadiusFactor {
                value: self.swap_radius_factor,
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            edge_threshold: 1.0,
            swap_radius_factor: 2.0,
            max_rounds: 64,
        }
    }
}
