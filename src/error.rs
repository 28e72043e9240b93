use crate::point::Point;
use thiserror::Error;

/// Errors produced while validating input or reading persisted point files.
///
/// The solver itself has no failure states once its input is validated;
/// everything here is caught before the pipeline starts or at the I/O edge.
#[derive(Debug, Error)]
pub enum Error {
    /// Adjacency threshold must be strictly positive.
    #[error("edge threshold must be positive, got {value}")]
    InvalidThreshold { value: f64 },

    /// The swap candidate radius factor must be at least 1.
    #[error("swap radius factor must be >= 1, got {value}")]
    InvalidRadiusFactor { value: f64 },

    /// Random instances need a non-empty sampling area.
    #[error("random point area must be positive, got {width}x{height}")]
    InvalidArea { width: i64, height: i64 },

    /// Duplicate coordinates would silently corrupt degree counts.
    #[error("duplicate point {point} in input")]
    DuplicatePoint { point: Point },

    /// A persisted point line that is not two whitespace-separated integers.
    #[error("malformed point on line {line}: {content:?}")]
    PointFormat { line: usize, content: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
