use std::fmt;

/// A 2D point with integer coordinates.
///
/// Points are plain values: equality and hashing go by coordinates, so two
/// points at the same location are interchangeable everywhere in the crate.
/// All distance computations are done in `f64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Point {
        Point { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Exact for coordinates up to ~2^26, which covers the persisted integer
    /// format by a wide margin. Preferred over [`Point::distance`] in hot
    /// loops since it avoids the square root.
    pub fn distance_sq(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Point {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
