use crate::error::Error;
use crate::io::{read_points, write_points};
use crate::point::Point;
use crate::solver::Solver;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Advisory file cache of previously computed dominating sets.
///
/// Results are stored as `<stem><index>.points` files in a directory, using
/// the plain point format from [`crate::io`]. The cache never substitutes
/// for validation: [`ResultCache::load`] only hands back a set that still
/// dominates the solver's current input, and silently skips files that are
/// unreadable, malformed, or stale.
pub struct ResultCache {
    dir: PathBuf,
}

impl ResultCache {
    pub fn new(dir: impl Into<PathBuf>) -> ResultCache {
        ResultCache { dir: dir.into() }
    }

    /// Saves a result under the first free `<stem><index>.points` name and
    /// returns the path written.
    pub fn save(&self, stem: &str, points: &[Point]) -> Result<PathBuf, Error> {
        std::fs::create_dir_all(&self.dir)?;
        let mut index = 0;
        let mut path = self.entry_path(stem, index);
        while path.exists() {
            index += 1;
            path = self.entry_path(stem, index);
        }
        write_points(&path, points)?;
        debug!(path = %path.display(), "saved result");
        Ok(path)
    }

    /// Returns the first cached set under `stem` that is still a valid
    /// dominating set for the solver's current points, or `None`.
    pub fn load(&self, stem: &str, solver: &Solver) -> Option<Vec<Point>> {
        let mut index = 0;
        loop {
            let path = self.entry_path(stem, index);
            if !path.exists() {
                return None;
            }
            match read_points(&path) {
                Ok(set) if solver.is_valid_solution(&set) => {
                    debug!(path = %path.display(), "cache hit");
                    return Some(set);
                }
                Ok(_) => {
                    debug!(path = %path.display(), "cached set is stale, skipping");
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "unreadable cache entry, skipping");
                }
            }
            index += 1;
        }
    }

    fn entry_path(&self, stem: &str, index: usize) -> PathBuf {
        self.dir.join(format!("{stem}{index}.points"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;

    fn line_solver() -> Solver {
        let mut solver = Solver::new(SolverConfig::new(1.1)).unwrap();
        solver
            .set_points(vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)])
            .unwrap();
        solver
    }

    #[test]
    fn test_save_picks_next_free_index() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path());
        let set = vec![Point::new(1, 0)];

        let first = cache.save("run", &set).unwrap();
        let second = cache.save("run", &set).unwrap();
        assert_eq!(first.file_name().unwrap(), "run0.points");
        assert_eq!(second.file_name().unwrap(), "run1.points");
    }

    #[test]
    fn test_load_returns_valid_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path());
        let solver = line_solver();

        cache.save("run", &[Point::new(1, 0)]).unwrap();
        assert_eq!(cache.load("run", &solver), Some(vec![Point::new(1, 0)]));
    }

    #[test]
    fn test_load_skips_stale_entries() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path());
        let solver = line_solver();

        // Not dominating under the current input.
        cache.save("run", &[Point::new(0, 0)]).unwrap();
        // Not even a current input point.
        cache.save("run", &[Point::new(9, 9)]).unwrap();
        // Valid.
        cache.save("run", &[Point::new(1, 0)]).unwrap();

        assert_eq!(cache.load("run", &solver), Some(vec![Point::new(1, 0)]));
    }

    #[test]
    fn test_load_misses_on_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ResultCache::new(dir.path());
        assert_eq!(cache.load("run", &line_solver()), None);
    }
}
