//! Coordinate realizations of the regular polytopes.
//!
//! Purpose
//! - Turn a validated Schläfli symbol into concrete vertex coordinates plus
//!   edge/face/cell incidence (`PolytopeSolid`).
//! - The three infinite families are constructed combinatorially; the five
//!   exceptional solids start from exact coordinate tables and have their
//!   incidence recovered geometrically.
//!
//! Why
//! - The closed-form counts in `counts` say how many faces exist; this
//!   module says where they are. The two are cross-checked in debug builds.

mod cfg;
mod exceptional;
mod families;
mod hull;
mod solid;

#[cfg(test)]
mod tests;

pub use cfg::{MAX_HYPERCUBE_DIM, MAX_SIMPLEX_DIM};
pub use families::{cross_polytope, hypercube, polygon, simplex};
pub use solid::PolytopeSolid;

pub(crate) use families::{fixed_bit_bases, signed_axis_faces};

use crate::error::Error;
use crate::family::{Exceptional3d, Exceptional4d, Family};
use crate::symbol::SchlafliSymbol;

/// Build the solid a symbol denotes, dispatching on its family.
pub fn build_solid(sym: &SchlafliSymbol) -> Result<PolytopeSolid, Error> {
    if let [p] = sym.components() {
        return polygon(*p);
    }
    let d = sym.dimension();
    match Family::classify(sym).ok_or_else(|| Error::unsupported(sym))? {
        Family::Simplex => simplex(d),
        Family::Hypercube => hypercube(d),
        Family::CrossPolytope => cross_polytope(d),
        Family::Exceptional3d(which) => exceptional::solid_3d(which),
        Family::Exceptional4d(which) => exceptional::solid_4d(which),
    }
}

/// One of the two exceptional 3D solids from its coordinate table.
pub fn exceptional_3d(which: Exceptional3d) -> Result<PolytopeSolid, Error> {
    exceptional::solid_3d(which)
}

/// One of the three exceptional 4D solids from its coordinate table.
pub fn exceptional_4d(which: Exceptional4d) -> Result<PolytopeSolid, Error> {
    exceptional::solid_4d(which)
}

/// The regular d-polytope whose vertex count is nearest `n_target`. Ties go
/// to the earlier family in the order simplex, hypercube, cross-polytope,
/// exceptional.
pub fn by_vertex_count(d: usize, n_target: u64) -> Result<SchlafliSymbol, Error> {
    if d < 2 {
        return Err(Error::BadDimension { dimension: d });
    }
    if d == 2 {
        return SchlafliSymbol::new(vec![u32::try_from(n_target.max(3)).unwrap_or(u32::MAX)]);
    }
    let mut candidates: Vec<(u64, Vec<u32>)> = vec![
        (d as u64 + 1, vec![3; d - 1]),
        (1u64 << d, {
            let mut c = vec![3; d - 1];
            c[0] = 4;
            c
        }),
        (2 * d as u64, {
            let mut c = vec![3; d - 1];
            *c.last_mut().expect("d >= 3") = 4;
            c
        }),
    ];
    if d == 3 {
        candidates.push((20, vec![5, 3]));
        candidates.push((12, vec![3, 5]));
    } else if d == 4 {
        candidates.push((24, vec![3, 4, 3]));
        candidates.push((600, vec![5, 3, 3]));
        candidates.push((120, vec![3, 3, 5]));
    }
    let best = candidates
        .into_iter()
        .min_by_key(|(n, _)| n.abs_diff(n_target))
        .expect("candidate list is nonempty");
    SchlafliSymbol::new(best.1)
}
