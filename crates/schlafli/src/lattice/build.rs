//! Incidence builder: solid in, full face lattice out.
//!
//! Purpose
//! - Ranks 0..=2 (and rank 3 where the solid carries cells) come straight
//!   from the `PolytopeSolid`.
//! - Ranks above 3 exist only for the infinite families and are generated
//!   from their closed combinatorial rules.
//! - Subface resolution is hash-based: every rank keeps a sorted-vertex-tuple
//!   index, and a face's subfaces are produced as vertex sets and looked up.
//!
//! The exceptional 4D solids have no closed subface rule; their cells are
//! merged against rank 2 by subset containment instead (best effort, but
//! exact for convex cells).

use std::collections::HashMap;

use super::types::{FaceLattice, KFace};
use crate::counts::{expected_euler, f_vector, face_count};
use crate::error::Error;
use crate::family::Family;
use crate::geometry::{fixed_bit_bases, signed_axis_faces, PolytopeSolid};
use crate::symbol::SchlafliSymbol;
use crate::util::combinations;

/// Build the complete face lattice of `solid`, checking per-rank counts,
/// per-face subface counts, and the Euler identity before returning.
pub fn build_lattice(solid: &PolytopeSolid) -> Result<FaceLattice, Error> {
    let sym = &solid.symbol;
    let d = sym.dimension();
    let family = Family::classify(sym);
    let n = solid.vertex_count();

    let mut ranks: Vec<Vec<KFace>> = Vec::with_capacity(d);

    // Rank 0: one face per vertex, in vertex order.
    ranks.push(
        (0..n)
            .map(|v| KFace {
                dim: 0,
                index: v,
                vertices: vec![v as u32],
                subfaces: Vec::new(),
            })
            .collect(),
    );

    // Rank 1: the solid's edge order; subfaces are the endpoint vertices.
    ranks.push(
        solid
            .edges
            .iter()
            .enumerate()
            .map(|(i, &(a, b))| KFace {
                dim: 1,
                index: i,
                vertices: vec![a, b],
                subfaces: vec![a as usize, b as usize],
            })
            .collect(),
    );

    // Rank 2: the solid's face order; subfaces resolved from the edge map.
    if d >= 3 {
        let edge_index: HashMap<(u32, u32), usize> = solid
            .edges
            .iter()
            .enumerate()
            .map(|(i, &e)| (e, i))
            .collect();
        let mut faces = Vec::with_capacity(solid.faces2.len());
        for (i, cycle) in solid.faces2.iter().enumerate() {
            let mut subfaces = Vec::with_capacity(cycle.len());
            for k in 0..cycle.len() {
                let a = cycle[k];
                let b = cycle[(k + 1) % cycle.len()];
                let key = (a.min(b), a.max(b));
                let &idx = edge_index
                    .get(&key)
                    .ok_or_else(|| Error::lattice(format!("face cycle uses non-edge {key:?}")))?;
                subfaces.push(idx);
            }
            let mut vertices = cycle.clone();
            vertices.sort_unstable();
            faces.push(KFace {
                dim: 2,
                index: i,
                vertices,
                subfaces,
            });
        }
        ranks.push(faces);
    }

    // Rank 3: the solid's cells, re-sorted by vertex tuple.
    if d >= 4 {
        let mut cells = solid.cells3.clone();
        cells.sort();
        let rank2 = &ranks[2];
        let faces = match family {
            Some(f @ (Family::Simplex | Family::Hypercube | Family::CrossPolytope)) => {
                resolve_by_rule(f, 3, &cells, rank2)?
            }
            _ => resolve_by_containment(3, &cells, rank2)?,
        };
        ranks.push(faces);
    }

    // Ranks 4..d: closed combinatorial rules, infinite families only.
    for k in 4..d {
        let family = family.ok_or_else(|| Error::unsupported(sym))?;
        let mut sets = rank_vertex_sets(family, d, n, k)
            .ok_or_else(|| Error::lattice(format!("no face rule for rank {k} of {sym}")))?;
        sets.sort();
        let faces = resolve_by_rule(family, k, &sets, &ranks[k - 1])?;
        ranks.push(faces);
    }

    let lattice = FaceLattice { ranks };
    check_lattice(sym, &lattice)?;
    Ok(lattice)
}

/// Vertex sets of all rank-k faces per family rule (k >= 4).
fn rank_vertex_sets(family: Family, d: usize, n: usize, k: usize) -> Option<Vec<Vec<u32>>> {
    match family {
        Family::Simplex => Some(
            combinations(n, k + 1)
                .into_iter()
                .map(|c| c.into_iter().map(|v| v as u32).collect())
                .collect(),
        ),
        Family::Hypercube => {
            let mut sets = Vec::new();
            for axes in combinations(d, k) {
                for base in fixed_bit_bases(d, n, &axes) {
                    let face: Vec<u32> = (0..1usize << k)
                        .map(|m| {
                            let mut v = base;
                            for (bit, &axis) in axes.iter().enumerate() {
                                if m >> bit & 1 == 1 {
                                    v |= 1 << axis;
                                }
                            }
                            v as u32
                        })
                        .collect();
                    sets.push(face);
                }
            }
            Some(sets)
        }
        Family::CrossPolytope => Some(signed_axis_faces(d, k + 1)),
        _ => None,
    }
}

/// Subface vertex sets of one face per family rule. Simplex and
/// cross-polytope faces are simplices (drop one vertex); hypercube faces
/// split along each free axis bit.
fn rule_subface_sets(family: Family, face: &[u32]) -> Vec<Vec<u32>> {
    match family {
        Family::Simplex | Family::CrossPolytope => (0..face.len())
            .map(|i| {
                let mut s = face.to_vec();
                s.remove(i);
                s
            })
            .collect(),
        Family::Hypercube => {
            // Free axes are exactly the bits where min and max differ.
            let mask = face[0] ^ face[face.len() - 1];
            let mut out = Vec::new();
            for a in 0..u32::BITS {
                if mask >> a & 1 == 0 {
                    continue;
                }
                for side in [0u32, 1] {
                    out.push(
                        face.iter()
                            .copied()
                            .filter(|v| v >> a & 1 == side)
                            .collect(),
                    );
                }
            }
            out
        }
        _ => Vec::new(),
    }
}

fn tuple_index(rank: &[KFace]) -> HashMap<&[u32], usize> {
    rank.iter()
        .enumerate()
        .map(|(i, f)| (f.vertices.as_slice(), i))
        .collect()
}

/// Resolve subfaces by generating each face's subface vertex sets from the
/// family rule and looking them up in the rank below.
fn resolve_by_rule(
    family: Family,
    dim: usize,
    sets: &[Vec<u32>],
    below: &[KFace],
) -> Result<Vec<KFace>, Error> {
    let index = tuple_index(below);
    let mut out = Vec::with_capacity(sets.len());
    for (i, face) in sets.iter().enumerate() {
        let mut subfaces = Vec::new();
        for sub in rule_subface_sets(family, face) {
            let &idx = index.get(sub.as_slice()).ok_or_else(|| {
                Error::lattice(format!("rank {dim} subface {sub:?} missing below"))
            })?;
            subfaces.push(idx);
        }
        subfaces.sort_unstable();
        out.push(KFace {
            dim,
            index: i,
            vertices: face.clone(),
            subfaces,
        });
    }
    Ok(out)
}

/// Merge path for cells without a closed rule: a rank-2 face is a subface of
/// a cell iff its vertex set is contained in the cell's.
fn resolve_by_containment(
    dim: usize,
    sets: &[Vec<u32>],
    below: &[KFace],
) -> Result<Vec<KFace>, Error> {
    let mut out = Vec::with_capacity(sets.len());
    for (i, cell) in sets.iter().enumerate() {
        let subfaces: Vec<usize> = below
            .iter()
            .enumerate()
            .filter(|(_, f)| {
                f.vertices
                    .iter()
                    .all(|v| cell.binary_search(v).is_ok())
            })
            .map(|(idx, _)| idx)
            .collect();
        if subfaces.is_empty() {
            return Err(Error::lattice(format!("rank {dim} face {i} has no subfaces")));
        }
        out.push(KFace {
            dim,
            index: i,
            vertices: cell.clone(),
            subfaces,
        });
    }
    Ok(out)
}

/// Per-rank counts against the closed-form f-vector, per-face subface counts
/// against the prefix-symbol expectation, and the Euler identity.
fn check_lattice(sym: &SchlafliSymbol, lattice: &FaceLattice) -> Result<(), Error> {
    let d = sym.dimension();
    let expected = f_vector(sym)?;
    let got = lattice.f_vector();
    if got != expected {
        debug_assert_eq!(got, expected, "lattice f-vector mismatch for {sym}");
        return Err(Error::lattice(format!(
            "f-vector mismatch for {sym}: built {got:?}, expected {expected:?}"
        )));
    }

    for k in 2..d {
        // A rank-k face is itself the regular polytope of the symbol prefix;
        // its subface count is that polytope's facet count.
        let prefix = SchlafliSymbol::new(sym.components()[..k - 1].to_vec())?;
        let expected_subs = face_count(&prefix, k - 1)?;
        for face in &lattice.ranks[k] {
            if face.subfaces.len() as u64 != expected_subs {
                debug_assert_eq!(
                    face.subfaces.len() as u64,
                    expected_subs,
                    "subface count mismatch at rank {k} of {sym}"
                );
                return Err(Error::lattice(format!(
                    "rank {k} face {} of {sym} has {} subfaces, expected {expected_subs}",
                    face.index,
                    face.subfaces.len()
                )));
            }
        }
    }

    let chi = lattice.euler_characteristic();
    if chi != expected_euler(d) {
        debug_assert_eq!(chi, expected_euler(d), "Euler identity failed for {sym}");
        return Err(Error::lattice(format!(
            "Euler characteristic {chi} for {sym}, expected {}",
            expected_euler(d)
        )));
    }
    Ok(())
}
