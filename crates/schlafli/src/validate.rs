//! Regularity predicate for Schläfli symbols.
//!
//! Accepts exactly the finite classical set: five Platonic solids in 3D, six
//! regular polychora in 4D, and the three infinite families in dimension 5
//! and above, up to the dimension cap of the counting routines. Tilings such
//! as {4,4} or {6,3} satisfy neither the angle bound nor the 4D table and
//! are rejected. The predicate fails closed: any inconsistency yields
//! `false`, never a panic.

use crate::counts::{euler_characteristic, expected_euler, f_vector};
use crate::family::Family;
use crate::symbol::SchlafliSymbol;

/// True iff `sym` denotes a finite regular polytope of dimension >= 3.
pub fn is_regular_polytope(sym: &SchlafliSymbol) -> bool {
    let c = sym.components();
    if c.len() < 2 || c.iter().any(|&p| p < 3) {
        return false;
    }
    let pattern_ok = match c {
        // Spherical vertex figure: q faces of p sides around a vertex fit
        // iff (p-2)(q-2) < 4. Equality is the planar tilings.
        &[p, q] => (p - 2) * (q - 2) < 4,
        // 4D: only the six known polychora.
        &[p, q, r] => matches!(
            (p, q, r),
            (3, 3, 3) | (4, 3, 3) | (3, 3, 4) | (3, 4, 3) | (5, 3, 3) | (3, 3, 5)
        ),
        // 5D+: only the three infinite families survive.
        _ => matches!(
            Family::classify(sym),
            Some(Family::Simplex | Family::Hypercube | Family::CrossPolytope)
        ),
    };
    if !pattern_ok {
        return false;
    }
    // Cross-check the closed-form counts against Euler's identity.
    match f_vector(sym) {
        Ok(f) => euler_characteristic(&f) == expected_euler(sym.dimension()),
        Err(_) => false,
    }
}
