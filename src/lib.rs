//! # domset
//!
//! `domset` computes approximate minimum dominating sets over 2D point
//! clouds, designed to be used in Rust as well as compiled to WebAssembly
//! (WASM). Two points are adjacent when their Euclidean distance is strictly
//! below a configurable edge threshold; a dominating set is a subset such
//! that every input point is either in the subset or adjacent to one of its
//! members.
//!
//! Finding a minimum dominating set is NP-hard, so the crate settles for a
//! small-but-not-optimal one via a three-stage heuristic:
//!
//! 1. **Neighbor map**: all-pairs adjacency lists under the threshold.
//! 2. **Greedy cover**: repeatedly pick the point dominating the most
//!    currently undominated points.
//! 3. **Local search**: shrink the set to a fixed point with redundant-member
//!    removal, 2-for-1 swaps, and 3-for-2 swaps.
//!
//! ## Features
//!
//! - **WASM-first**: Built with `wasm-bindgen` for seamless integration with
//!   JavaScript and TypeScript.
//! - **Parallel**: Neighbor-map rows and swap-candidate scans run on `rayon`,
//!   with a deterministic lowest-index tie-break so output is reproducible.
//! - **Advisory caching**: Previously computed sets persist as plain text
//!   files and are revalidated before reuse.
//!
//! ## Example
//!
//! ```
//! use domset::{compute_dominating_set, Point};
//!
//! // A line of five points, spacing 1: two members suffice.
//! let points: Vec<Point> = (0..5).map(|x| Point::new(x, 0)).collect();
//! let set = compute_dominating_set(&points, 1.1).unwrap();
//! assert_eq!(set.len(), 2);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is [`compute_dominating_set`]; the [`Solver`]
//! struct exposes the tuning knobs.

mod cache;
mod config;
mod domination;
mod error;
mod greedy;
mod io;
mod local_search;
mod neighbors;
mod point;
mod solver;
mod wasm;

pub use cache::ResultCache;
pub use config::SolverConfig;
pub use domination::is_dominating;
pub use error::Error;
pub use greedy::greedy_cover;
pub use io::read_points;
pub use io::write_points;
pub use local_search::clean;
pub use local_search::optimize;
pub use local_search::swap_pairs;
pub use local_search::swap_triples;
pub use neighbors::NeighborMap;
pub use point::Point;
pub use solver::compute_dominating_set;
pub use solver::Solver;
pub use wasm::DominatingSet;
