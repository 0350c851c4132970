//! Coordinate tables for the five exceptional solids, all expressible over
//! {1, √5, φ} with φ = (1 + √5) / 2.
//!
//! Only the vertex clouds are tabulated; edges, faces, and cells are
//! recovered by the hull routines, then cross-checked against the
//! closed-form f-vector in debug builds.

use nalgebra::DVector;

use super::hull::{edges_by_min_distance, faces2_from_cells, facets_by_supporting_planes, order_cycle};
use super::solid::PolytopeSolid;
use crate::counts::f_vector;
use crate::error::Error;
use crate::family::{common_name, Exceptional3d, Exceptional4d};
use crate::symbol::SchlafliSymbol;
use crate::util::permutations4;

const PHI: f64 = 1.618_033_988_749_894_8;
const SQRT5: f64 = 2.236_067_977_499_79;

/// Dedup key: coordinates quantized to a fine grid. The tables are exact
/// algebraic values, so distinct vertices differ by far more than the grid.
fn quantize(v: &[f64]) -> Vec<i64> {
    v.iter().map(|&x| (x * 1e9).round() as i64).collect()
}

/// All sign choices over the nonzero entries of `base`.
fn sign_variants(base: &[f64]) -> Vec<Vec<f64>> {
    let nonzero: Vec<usize> = base
        .iter()
        .enumerate()
        .filter(|(_, &x)| x != 0.0)
        .map(|(i, _)| i)
        .collect();
    (0..1u32 << nonzero.len())
        .map(|bits| {
            let mut v = base.to_vec();
            for (b, &i) in nonzero.iter().enumerate() {
                if bits >> b & 1 == 1 {
                    v[i] = -v[i];
                }
            }
            v
        })
        .collect()
}

/// Signed coordinate permutations of a length-4 base, optionally restricted
/// to even permutations, deduplicated.
fn signed_permutations4(base: [f64; 4], even_only: bool, out: &mut Vec<DVector<f64>>) {
    let mut seen: std::collections::HashSet<Vec<i64>> =
        out.iter().map(|v| quantize(v.as_slice())).collect();
    for (perm, even) in permutations4() {
        if even_only && !even {
            continue;
        }
        let permuted: Vec<f64> = perm.iter().map(|&i| base[i]).collect();
        for v in sign_variants(&permuted) {
            if seen.insert(quantize(&v)) {
                out.push(DVector::from_vec(v));
            }
        }
    }
}

/// Signed cyclic permutations of a length-3 base, deduplicated.
fn signed_cyclic3(base: [f64; 3], out: &mut Vec<DVector<f64>>) {
    let mut seen: std::collections::HashSet<Vec<i64>> =
        out.iter().map(|v| quantize(v.as_slice())).collect();
    let cycles = [
        [base[0], base[1], base[2]],
        [base[2], base[0], base[1]],
        [base[1], base[2], base[0]],
    ];
    for cyc in cycles {
        for v in sign_variants(&cyc) {
            if seen.insert(quantize(&v)) {
                out.push(DVector::from_vec(v));
            }
        }
    }
}

fn dodecahedron_vertices() -> Vec<DVector<f64>> {
    let mut out = Vec::with_capacity(20);
    signed_cyclic3([1.0, 1.0, 1.0], &mut out);
    signed_cyclic3([0.0, 1.0 / PHI, PHI], &mut out);
    out
}

fn icosahedron_vertices() -> Vec<DVector<f64>> {
    let mut out = Vec::with_capacity(12);
    signed_cyclic3([0.0, 1.0, PHI], &mut out);
    out
}

fn twenty_four_cell_vertices() -> Vec<DVector<f64>> {
    let mut out = Vec::with_capacity(24);
    signed_permutations4([1.0, 1.0, 0.0, 0.0], false, &mut out);
    out
}

fn six_hundred_cell_vertices() -> Vec<DVector<f64>> {
    let mut out = Vec::with_capacity(120);
    signed_permutations4([0.5, 0.5, 0.5, 0.5], false, &mut out);
    signed_permutations4([1.0, 0.0, 0.0, 0.0], false, &mut out);
    signed_permutations4([PHI / 2.0, 0.5, 1.0 / (2.0 * PHI), 0.0], true, &mut out);
    out
}

fn hundred_twenty_cell_vertices() -> Vec<DVector<f64>> {
    let p2 = PHI * PHI;
    let pm1 = 1.0 / PHI;
    let pm2 = 1.0 / p2;
    let mut out = Vec::with_capacity(600);
    signed_permutations4([0.0, 0.0, 2.0, 2.0], false, &mut out);
    signed_permutations4([1.0, 1.0, 1.0, SQRT5], false, &mut out);
    signed_permutations4([pm2, PHI, PHI, PHI], false, &mut out);
    signed_permutations4([pm1, pm1, pm1, p2], false, &mut out);
    signed_permutations4([0.0, pm2, 1.0, p2], true, &mut out);
    signed_permutations4([0.0, pm1, PHI, SQRT5], true, &mut out);
    signed_permutations4([pm1, 1.0, PHI, 2.0], true, &mut out);
    out
}

/// Build one of the two exceptional 3D solids.
pub(super) fn solid_3d(which: Exceptional3d) -> Result<PolytopeSolid, Error> {
    let (components, vertices) = match which {
        Exceptional3d::Dodecahedron => (vec![5, 3], dodecahedron_vertices()),
        Exceptional3d::Icosahedron => (vec![3, 5], icosahedron_vertices()),
    };
    let symbol = SchlafliSymbol::new(components)?;
    let edges = edges_by_min_distance(&vertices);
    let faces2: Vec<Vec<u32>> = facets_by_supporting_planes(&vertices, &edges)
        .into_iter()
        .map(|f| order_cycle(&vertices, &f))
        .collect();

    debug_assert_eq!(
        [vertices.len() as u64, edges.len() as u64, faces2.len() as u64],
        <[u64; 3]>::try_from(f_vector(&symbol)?).expect("3D f-vector"),
        "incidence recovery disagrees with the f-vector for {symbol}"
    );

    Ok(PolytopeSolid {
        name: common_name(&symbol),
        symbol,
        vertices,
        edges,
        faces2,
        cells3: Vec::new(),
    })
}

/// Build one of the three exceptional 4D solids.
pub(super) fn solid_4d(which: Exceptional4d) -> Result<PolytopeSolid, Error> {
    let (components, vertices) = match which {
        Exceptional4d::TwentyFourCell => (vec![3, 4, 3], twenty_four_cell_vertices()),
        Exceptional4d::HundredTwentyCell => (vec![5, 3, 3], hundred_twenty_cell_vertices()),
        Exceptional4d::SixHundredCell => (vec![3, 3, 5], six_hundred_cell_vertices()),
    };
    let symbol = SchlafliSymbol::new(components)?;
    let edges = edges_by_min_distance(&vertices);
    let cells3 = facets_by_supporting_planes(&vertices, &edges);
    let faces2 = faces2_from_cells(&vertices, &cells3);

    debug_assert_eq!(
        [
            vertices.len() as u64,
            edges.len() as u64,
            faces2.len() as u64,
            cells3.len() as u64,
        ],
        <[u64; 4]>::try_from(f_vector(&symbol)?).expect("4D f-vector"),
        "incidence recovery disagrees with the f-vector for {symbol}"
    );

    Ok(PolytopeSolid {
        name: common_name(&symbol),
        symbol,
        vertices,
        edges,
        faces2,
        cells3,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_cloud_sizes() {
        assert_eq!(dodecahedron_vertices().len(), 20);
        assert_eq!(icosahedron_vertices().len(), 12);
        assert_eq!(twenty_four_cell_vertices().len(), 24);
        assert_eq!(six_hundred_cell_vertices().len(), 120);
        assert_eq!(hundred_twenty_cell_vertices().len(), 600);
    }

    #[test]
    fn clouds_are_centered_and_equidistant() {
        for vertices in [
            dodecahedron_vertices(),
            icosahedron_vertices(),
            twenty_four_cell_vertices(),
            six_hundred_cell_vertices(),
            hundred_twenty_cell_vertices(),
        ] {
            let dim = vertices[0].len();
            let centroid = vertices
                .iter()
                .fold(DVector::zeros(dim), |acc, v| acc + v)
                / vertices.len() as f64;
            assert!(centroid.norm() < 1e-9);
            let r0 = vertices[0].norm();
            for v in &vertices {
                assert!((v.norm() - r0).abs() < 1e-9, "vertex off the sphere");
            }
        }
    }
}
