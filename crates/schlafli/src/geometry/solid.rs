//! The concrete polytope value: coordinates plus low-rank incidence.
//!
//! Invariants after full construction
//! - edge endpoints are distinct indices into `vertices`, stored `(a, b)`
//!   with `a < b`;
//! - every 2-face is a cycle whose consecutive pairs (with wrap-around) are
//!   edges;
//! - cells (d >= 4) are sorted vertex index sets;
//! - the per-vertex edge degree is constant (vertex-transitivity proxy).

use nalgebra::DVector;

use crate::symbol::SchlafliSymbol;

/// A constructed regular polytope: vertex coordinates, edges, 2-faces, and
/// (for d >= 4) cells. Higher ranks live in the `FaceLattice`, which
/// references vertex indices but owns no coordinate data.
#[derive(Clone, Debug)]
pub struct PolytopeSolid {
    pub symbol: SchlafliSymbol,
    pub name: String,
    /// Rows are vertex positions. The simplex uses the symmetric embedding
    /// in R^(d+1); every other family lives in R^d.
    pub vertices: Vec<DVector<f64>>,
    /// Unordered vertex pairs, each stored `(a, b)` with `a < b`.
    pub edges: Vec<(u32, u32)>,
    /// Cyclic vertex index lists of length p1 each.
    pub faces2: Vec<Vec<u32>>,
    /// Sorted vertex index sets; empty unless d >= 4.
    pub cells3: Vec<Vec<u32>>,
}

impl PolytopeSolid {
    /// Polytope dimension d (not the ambient coordinate width).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.symbol.dimension()
    }

    /// Width of the coordinate rows (d, or d+1 for the simplex embedding).
    #[inline]
    pub fn ambient_dim(&self) -> usize {
        self.vertices.first().map_or(0, |v| v.len())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Indices of vertices sharing an edge with `v`.
    pub fn neighbors(&self, v: u32) -> Vec<u32> {
        let mut out = Vec::new();
        for &(a, b) in &self.edges {
            if a == v {
                out.push(b);
            } else if b == v {
                out.push(a);
            }
        }
        out
    }

    /// Edge degree of every vertex, indexed by vertex.
    pub fn edge_degrees(&self) -> Vec<usize> {
        let mut deg = vec![0usize; self.vertices.len()];
        for &(a, b) in &self.edges {
            deg[a as usize] += 1;
            deg[b as usize] += 1;
        }
        deg
    }

    /// Vertex-transitivity proxy: the edge degree is the same everywhere.
    pub fn has_uniform_edge_degree(&self) -> bool {
        let deg = self.edge_degrees();
        match deg.first() {
            Some(&d0) => deg.iter().all(|&d| d == d0),
            None => true,
        }
    }

    /// Largest absolute coordinate; the scale for tolerance checks.
    pub fn coordinate_scale(&self) -> f64 {
        self.vertices
            .iter()
            .flat_map(|v| v.iter())
            .fold(0.0_f64, |acc, &x| acc.max(x.abs()))
    }
}
