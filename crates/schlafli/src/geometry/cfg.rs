//! Tolerance and size limits for geometric construction (internal).
//!
//! Policy
//! - Coordinates are exact algebraic expressions in {1, √5, φ} evaluated
//!   once; floating error is far below these thresholds, so the defaults are
//!   fixed constants rather than caller-tunable knobs.

/// Edge-length comparison tolerance, relative to the maximum coordinate
/// magnitude of the solid.
pub(crate) const EDGE_EPS: f64 = 1e-9;

/// Saturation threshold for supporting-hyperplane membership (unit normals).
pub(crate) const TIGHT_EPS: f64 = 1e-7;

/// Degeneracy cutoff for normals produced by near-collinear spans.
pub(crate) const DEGEN_EPS: f64 = 1e-12;

/// Hypercube construction cap: vertex count is 2^d.
pub const MAX_HYPERCUBE_DIM: usize = 20;

/// Simplex construction cap: keeps binomials of subset enumeration sane.
pub const MAX_SIMPLEX_DIM: usize = 30;
