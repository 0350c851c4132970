//! Constructors for the three infinite families (and the 2D polygon).
//!
//! Vertex index conventions (the lattice builder depends on these):
//! - simplex(d): vertex i is the i-th basis vector of R^(d+1) minus the
//!   centroid; indices 0..=d.
//! - hypercube(d): vertex index is the bit pattern of its {-1,+1} signs,
//!   bit j giving coordinate j (+1 for a set bit).
//! - cross_polytope(d): vertex 2j is +e_j, vertex 2j+1 is -e_j.

use nalgebra::DVector;

use super::cfg::{MAX_HYPERCUBE_DIM, MAX_SIMPLEX_DIM};
use super::solid::PolytopeSolid;
use crate::error::Error;
use crate::family::common_name;
use crate::symbol::SchlafliSymbol;
use crate::util::combinations;

/// Regular p-gon on the unit circle: the degenerate 2D case.
pub fn polygon(p: u32) -> Result<PolytopeSolid, Error> {
    let symbol = SchlafliSymbol::new(vec![p])?;
    if p < 3 {
        return Err(Error::unsupported(&symbol));
    }
    let n = p as usize;
    let vertices = (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            DVector::from_vec(vec![theta.cos(), theta.sin()])
        })
        .collect();
    let edges = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            (i.min(j) as u32, i.max(j) as u32)
        })
        .collect();
    Ok(PolytopeSolid {
        name: common_name(&symbol),
        symbol,
        vertices,
        edges,
        faces2: Vec::new(),
        cells3: Vec::new(),
    })
}

/// d-simplex: d+1 vertices, complete edge graph, k-faces over every
/// (k+1)-subset.
pub fn simplex(d: usize) -> Result<PolytopeSolid, Error> {
    if d < 2 {
        return Err(Error::BadDimension { dimension: d });
    }
    if d > MAX_SIMPLEX_DIM {
        return Err(Error::too_large(
            "simplex dimension",
            d as u64,
            MAX_SIMPLEX_DIM as u64,
        ));
    }
    let symbol = SchlafliSymbol::new(vec![3; d - 1])?;
    let n = d + 1;
    // Symmetric embedding: basis vectors of R^(d+1) recentred on the
    // hyperplane through their centroid.
    let shift = 1.0 / n as f64;
    let vertices: Vec<DVector<f64>> = (0..n)
        .map(|i| DVector::from_fn(n, |j, _| if i == j { 1.0 - shift } else { -shift }))
        .collect();
    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            edges.push((i as u32, j as u32));
        }
    }
    let faces2 = if d >= 3 {
        combinations(n, 3)
            .into_iter()
            .map(|c| c.into_iter().map(|v| v as u32).collect())
            .collect()
    } else {
        Vec::new()
    };
    let cells3 = if d >= 4 {
        combinations(n, 4)
            .into_iter()
            .map(|c| c.into_iter().map(|v| v as u32).collect())
            .collect()
    } else {
        Vec::new()
    };
    Ok(PolytopeSolid {
        name: common_name(&symbol),
        symbol,
        vertices,
        edges,
        faces2,
        cells3,
    })
}

/// d-hypercube on {-1,+1}^d; edges at Hamming distance one, square faces per
/// axis pair, cubic cells per axis triple.
pub fn hypercube(d: usize) -> Result<PolytopeSolid, Error> {
    if d < 2 {
        return Err(Error::BadDimension { dimension: d });
    }
    if d > MAX_HYPERCUBE_DIM {
        return Err(Error::too_large(
            "hypercube dimension",
            d as u64,
            MAX_HYPERCUBE_DIM as u64,
        ));
    }
    let mut components = vec![3; d - 1];
    components[0] = 4;
    let symbol = SchlafliSymbol::new(components)?;
    let n = 1usize << d;
    let vertices: Vec<DVector<f64>> = (0..n)
        .map(|i| DVector::from_fn(d, |j, _| if i >> j & 1 == 1 { 1.0 } else { -1.0 }))
        .collect();
    let mut edges = Vec::with_capacity(d * n / 2);
    for i in 0..n {
        for j in 0..d {
            let other = i ^ (1 << j);
            if i < other {
                edges.push((i as u32, other as u32));
            }
        }
    }
    let faces2 = if d >= 3 {
        axis_subface_cycles(d, n)
    } else {
        Vec::new()
    };
    let cells3 = if d >= 4 { axis_cells(d, n) } else { Vec::new() };
    Ok(PolytopeSolid {
        name: common_name(&symbol),
        symbol,
        vertices,
        edges,
        faces2,
        cells3,
    })
}

/// Square 2-faces: one per axis pair (a, b) and fixing of the other bits,
/// ordered as a 4-cycle.
fn axis_subface_cycles(d: usize, n: usize) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    for a in 0..d {
        for b in a + 1..d {
            for base in fixed_bit_bases(d, n, &[a, b]) {
                let va = base | 1 << a;
                let vb = base | 1 << b;
                let vab = va | 1 << b;
                out.push(vec![base as u32, va as u32, vab as u32, vb as u32]);
            }
        }
    }
    out
}

/// Cubic 3-faces: one per axis triple and fixing of the other bits; vertex
/// sets sorted.
fn axis_cells(d: usize, n: usize) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    for axes in combinations(d, 3) {
        for base in fixed_bit_bases(d, n, &axes) {
            let mut cell: Vec<u32> = (0..8u32)
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
            cell.sort_unstable();
            out.push(cell);
        }
    }
    out
}

/// Every assignment of the bits outside `free_axes`, as vertex-index bases.
pub(crate) fn fixed_bit_bases(d: usize, n: usize, free_axes: &[usize]) -> Vec<usize> {
    let fixed: Vec<usize> = (0..d).filter(|a| !free_axes.contains(a)).collect();
    let m = 1usize << fixed.len();
    debug_assert_eq!(m << free_axes.len(), n);
    (0..m)
        .map(|bits| {
            let mut base = 0usize;
            for (i, &axis) in fixed.iter().enumerate() {
                if bits >> i & 1 == 1 {
                    base |= 1 << axis;
                }
            }
            base
        })
        .collect()
}

/// d-cross-polytope on {±e_j}; edges between all vertex pairs off a common
/// axis, simplicial k-faces per axis subset and sign choice.
pub fn cross_polytope(d: usize) -> Result<PolytopeSolid, Error> {
    if d < 2 {
        return Err(Error::BadDimension { dimension: d });
    }
    let mut components = vec![3; d - 1];
    *components.last_mut().expect("d >= 2") = 4;
    let symbol = SchlafliSymbol::new(components)?;
    let n = 2 * d;
    let vertices: Vec<DVector<f64>> = (0..n)
        .map(|i| {
            let axis = i / 2;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            DVector::from_fn(d, |j, _| if j == axis { sign } else { 0.0 })
        })
        .collect();
    let mut edges = Vec::with_capacity(2 * d * (d - 1));
    for i in 0..n {
        for j in i + 1..n {
            if i / 2 != j / 2 {
                edges.push((i as u32, j as u32));
            }
        }
    }
    let faces2 = if d >= 3 {
        signed_axis_faces(d, 3)
    } else {
        Vec::new()
    };
    let cells3 = if d >= 4 {
        signed_axis_faces(d, 4)
    } else {
        Vec::new()
    };
    Ok(PolytopeSolid {
        name: common_name(&symbol),
        symbol,
        vertices,
        edges,
        faces2,
        cells3,
    })
}

/// Cross-polytope k-faces as (k+1) chosen axes with one sign each; vertex
/// ids ascend because axes are enumerated in order.
pub(crate) fn signed_axis_faces(d: usize, arity: usize) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    for axes in combinations(d, arity) {
        for signs in 0..1u32 << arity {
            let face: Vec<u32> = axes
                .iter()
                .enumerate()
                .map(|(i, &axis)| (2 * axis) as u32 + (signs >> i & 1))
                .collect();
            out.push(face);
        }
    }
    out
}
