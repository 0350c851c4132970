//! Family classification of Schläfli symbols.
//!
//! The tuple pattern is resolved once into a tagged `Family`; every later
//! stage (counts, geometry, lattice, discovery) dispatches on the variant
//! instead of re-matching components.

use crate::symbol::SchlafliSymbol;

/// The two 3D solids outside the infinite families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exceptional3d {
    Dodecahedron,
    Icosahedron,
}

/// The three 4D polychora outside the infinite families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exceptional4d {
    TwentyFourCell,
    HundredTwentyCell,
    SixHundredCell,
}

/// Family of a regular polytope symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Simplex,
    Hypercube,
    CrossPolytope,
    Exceptional3d(Exceptional3d),
    Exceptional4d(Exceptional4d),
}

impl Family {
    /// Resolve the component pattern, or `None` when the tuple matches no
    /// supported family (tilings, hyperbolic symbols, junk).
    pub fn classify(sym: &SchlafliSymbol) -> Option<Family> {
        let c = sym.components();
        if c.len() < 2 || c.iter().any(|&p| p < 3) {
            return None;
        }
        if c.iter().all(|&p| p == 3) {
            return Some(Family::Simplex);
        }
        if c[0] == 4 && c[1..].iter().all(|&p| p == 3) {
            return Some(Family::Hypercube);
        }
        let last = c.len() - 1;
        if c[last] == 4 && c[..last].iter().all(|&p| p == 3) {
            return Some(Family::CrossPolytope);
        }
        match c {
            [5, 3] => Some(Family::Exceptional3d(Exceptional3d::Dodecahedron)),
            [3, 5] => Some(Family::Exceptional3d(Exceptional3d::Icosahedron)),
            [3, 4, 3] => Some(Family::Exceptional4d(Exceptional4d::TwentyFourCell)),
            [5, 3, 3] => Some(Family::Exceptional4d(Exceptional4d::HundredTwentyCell)),
            [3, 3, 5] => Some(Family::Exceptional4d(Exceptional4d::SixHundredCell)),
            _ => None,
        }
    }
}

/// Conventional name of the polytope denoted by `sym`.
///
/// The eleven 3D/4D classics get their proper names; higher-dimensional
/// family members get a generated `"<d>D-<family>"` name.
pub fn common_name(sym: &SchlafliSymbol) -> String {
    match sym.components() {
        [3, 3] => return "Tetrahedron".to_string(),
        [4, 3] => return "Cube".to_string(),
        [3, 4] => return "Octahedron".to_string(),
        [5, 3] => return "Dodecahedron".to_string(),
        [3, 5] => return "Icosahedron".to_string(),
        [3, 3, 3] => return "5-cell".to_string(),
        [4, 3, 3] => return "Tesseract".to_string(),
        [3, 3, 4] => return "16-cell".to_string(),
        [3, 4, 3] => return "24-cell".to_string(),
        [5, 3, 3] => return "120-cell".to_string(),
        [3, 3, 5] => return "600-cell".to_string(),
        _ => {}
    }
    let d = sym.dimension();
    match Family::classify(sym) {
        Some(Family::Simplex) => format!("{d}D-simplex"),
        Some(Family::Hypercube) => format!("{d}D-hypercube"),
        Some(Family::CrossPolytope) => format!("{d}D-cross-polytope"),
        _ => "Unknown polytope".to_string(),
    }
}

/// Self-duality: the dual symbol equals the symbol itself.
///
/// Simplices are all-3 palindromes, so the palindrome test covers them too.
pub fn is_self_dual(sym: &SchlafliSymbol) -> bool {
    sym.is_palindrome()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(c: &[u32]) -> SchlafliSymbol {
        SchlafliSymbol::new(c.to_vec()).unwrap()
    }

    #[test]
    fn classify_families() {
        assert_eq!(Family::classify(&sym(&[3, 3])), Some(Family::Simplex));
        assert_eq!(Family::classify(&sym(&[3, 3, 3, 3])), Some(Family::Simplex));
        assert_eq!(Family::classify(&sym(&[4, 3, 3])), Some(Family::Hypercube));
        assert_eq!(
            Family::classify(&sym(&[3, 3, 3, 4])),
            Some(Family::CrossPolytope)
        );
        assert_eq!(
            Family::classify(&sym(&[5, 3])),
            Some(Family::Exceptional3d(Exceptional3d::Dodecahedron))
        );
        assert_eq!(
            Family::classify(&sym(&[3, 4, 3])),
            Some(Family::Exceptional4d(Exceptional4d::TwentyFourCell))
        );
    }

    #[test]
    fn classify_rejects_outsiders() {
        for c in [
            vec![6, 3],
            vec![4, 4],
            vec![5, 5],
            vec![5, 3, 4],
            vec![4, 3, 4],
            vec![2, 3],
            vec![3],
        ] {
            assert_eq!(Family::classify(&sym(&c)), None, "classified {c:?}");
        }
    }

    #[test]
    fn names() {
        assert_eq!(common_name(&sym(&[3, 3])), "Tetrahedron");
        assert_eq!(common_name(&sym(&[3, 4, 3])), "24-cell");
        assert_eq!(common_name(&sym(&[3, 3, 3, 3])), "5D-simplex");
        assert_eq!(common_name(&sym(&[4, 3, 3, 3, 3])), "6D-hypercube");
        assert_eq!(common_name(&sym(&[3, 3, 3, 3, 4])), "6D-cross-polytope");
    }

    #[test]
    fn self_duality() {
        assert!(is_self_dual(&sym(&[3, 3, 3])));
        assert!(is_self_dual(&sym(&[3, 4, 3])));
        assert!(!is_self_dual(&sym(&[4, 3, 3])));
        assert!(!is_self_dual(&sym(&[5, 3])));
    }
}
