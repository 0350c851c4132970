//! Closed-form face counts, f-vectors, and the Euler identity.
//!
//! Counts per family
//! - simplex: `f_k = C(d+1, k+1)`
//! - hypercube: `f_k = C(d, k) * 2^(d-k)`
//! - cross-polytope: `f_k = C(d, k+1) * 2^(k+1)` (the facet case `k = d-1`
//!   coincides with `2^d`)
//! - 3D/4D exceptionals: fixed tables. The table is the definition for those
//!   cases; it matches the hand-curated symmetry counts.
//!
//! All arithmetic is 64-bit; binomials go through `u128` intermediates.
//! Counting is capped at `MAX_COUNT_DIM`, above which the hypercube and
//! cross-polytope formulas would overflow `u64`; symbols beyond the cap get
//! `TooLarge` instead of a wrong or panicking computation.

use crate::error::Error;
use crate::family::{Exceptional3d, Exceptional4d, Family};
use crate::symbol::SchlafliSymbol;

/// Largest dimension the counting routines accept. Every f-vector entry of
/// the three families fits in `u64` up to here; the hypercube's middle
/// ranks are the first to outgrow it.
pub const MAX_COUNT_DIM: usize = 40;

/// `C(n, k)` with `u128` accumulation. Saturates rather than wraps if the
/// result leaves `u64`, which cannot happen below `MAX_COUNT_DIM`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
    }
    u64::try_from(acc).unwrap_or(u64::MAX)
}

/// f-vector table for the five exceptional solids.
fn exceptional_f_vector(family: Family) -> Option<&'static [u64]> {
    match family {
        Family::Exceptional3d(Exceptional3d::Dodecahedron) => Some(&[20, 30, 12]),
        Family::Exceptional3d(Exceptional3d::Icosahedron) => Some(&[12, 30, 20]),
        Family::Exceptional4d(Exceptional4d::TwentyFourCell) => Some(&[24, 96, 96, 24]),
        Family::Exceptional4d(Exceptional4d::HundredTwentyCell) => Some(&[600, 1200, 720, 120]),
        Family::Exceptional4d(Exceptional4d::SixHundredCell) => Some(&[120, 720, 1200, 600]),
        _ => None,
    }
}

/// Number of k-faces of the polytope denoted by `sym`.
pub fn face_count(sym: &SchlafliSymbol, k: usize) -> Result<u64, Error> {
    let d = sym.dimension();
    if k >= d {
        return Err(Error::too_large("face rank", k as u64, (d - 1) as u64));
    }
    // Degenerate 2D case: the polygon {p} has p vertices and p edges.
    if let [p] = sym.components() {
        if *p < 3 {
            return Err(Error::unsupported(sym));
        }
        return Ok(u64::from(*p));
    }
    if d > MAX_COUNT_DIM {
        return Err(Error::too_large("dimension", d as u64, MAX_COUNT_DIM as u64));
    }
    let d = d as u64;
    let k64 = k as u64;
    match Family::classify(sym).ok_or_else(|| Error::unsupported(sym))? {
        Family::Simplex => Ok(binomial(d + 1, k64 + 1)),
        Family::Hypercube => Ok(binomial(d, k64) << (d - k64)),
        Family::CrossPolytope => Ok(binomial(d, k64 + 1) << (k64 + 1)),
        family => Ok(exceptional_f_vector(family).expect("table covers variant")[k]),
    }
}

/// Full f-vector `(f_0, ..., f_{d-1})`.
///
/// Every call re-checks Euler's identity; a violation is a table bug and
/// aborts debug builds.
pub fn f_vector(sym: &SchlafliSymbol) -> Result<Vec<u64>, Error> {
    let d = sym.dimension();
    let f: Vec<u64> = (0..d)
        .map(|k| face_count(sym, k))
        .collect::<Result<_, _>>()?;
    debug_assert_eq!(
        euler_characteristic(&f),
        expected_euler(d),
        "Euler identity failed for {sym}"
    );
    Ok(f)
}

/// Alternating sum `sum_k (-1)^k f_k`.
pub fn euler_characteristic(f: &[u64]) -> i64 {
    f.iter()
        .enumerate()
        .map(|(k, &fk)| {
            let v = fk as i64;
            if k % 2 == 0 {
                v
            } else {
                -v
            }
        })
        .sum()
}

/// Expected alternating sum over proper faces: 2 for odd d, 0 for even d
/// (the boundary of a d-polytope is a (d-1)-sphere).
#[inline]
pub fn expected_euler(dimension: usize) -> i64 {
    if dimension % 2 == 0 {
        0
    } else {
        2
    }
}

/// Circumradius at unit edge length for the 3D/4D classics (table).
pub fn circumradius(sym: &SchlafliSymbol) -> Option<f64> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    match sym.components() {
        [3, 3] => Some((3.0_f64 / 8.0).sqrt()),
        [4, 3] => Some(3.0_f64.sqrt() / 2.0),
        [3, 4] => Some(1.0 / 2.0_f64.sqrt()),
        [5, 3] => Some((phi * 5.0_f64.sqrt()).sqrt()),
        [3, 5] => Some(phi / 3.0_f64.sqrt()),
        [3, 3, 3] => Some((5.0_f64 / 8.0).sqrt()),
        [4, 3, 3] => Some(2.0_f64.sqrt()),
        [3, 3, 4] => Some(1.0),
        [3, 4, 3] => Some(2.0_f64.sqrt()),
        [5, 3, 3] => Some((phi * phi + 1.0).sqrt()),
        [3, 3, 5] => Some(phi),
        _ => None,
    }
}

/// Dihedral angle in radians for the 3D/4D classics (table).
pub fn dihedral_angle(sym: &SchlafliSymbol) -> Option<f64> {
    use std::f64::consts::FRAC_PI_2;
    let sqrt5 = 5.0_f64.sqrt();
    match sym.components() {
        [3, 3] => Some((1.0_f64 / 3.0).acos()),
        [4, 3] => Some(FRAC_PI_2),
        [3, 4] => Some((-1.0_f64 / 3.0).acos()),
        [5, 3] => Some((-1.0 / sqrt5).acos()),
        [3, 5] => Some((-sqrt5 / 3.0).acos()),
        [3, 3, 3] => Some((1.0_f64 / 4.0).acos()),
        [4, 3, 3] => Some(FRAC_PI_2),
        [3, 3, 4] => Some((-1.0_f64 / 3.0).acos()),
        [3, 4, 3] => Some(FRAC_PI_2),
        [5, 3, 3] => Some((-1.0 / sqrt5).acos()),
        [3, 3, 5] => Some((-sqrt5 / 3.0).acos()),
        _ => None,
    }
}
