use super::*;
use crate::counts::f_vector;
use crate::family::{Exceptional3d, Exceptional4d};
use proptest::prelude::*;

fn solid(components: &[u32]) -> PolytopeSolid {
    let sym = SchlafliSymbol::new(components.to_vec()).unwrap();
    build_solid(&sym).unwrap()
}

fn counts(s: &PolytopeSolid) -> (usize, usize, usize, usize) {
    (
        s.vertices.len(),
        s.edges.len(),
        s.faces2.len(),
        s.cells3.len(),
    )
}

/// Every consecutive pair of a face cycle (with wrap-around) must be an edge.
fn assert_faces_are_edge_cycles(s: &PolytopeSolid) {
    let edge_set: std::collections::HashSet<(u32, u32)> = s.edges.iter().copied().collect();
    for face in &s.faces2 {
        assert!(face.len() >= 3);
        for i in 0..face.len() {
            let a = face[i];
            let b = face[(i + 1) % face.len()];
            assert!(
                edge_set.contains(&(a.min(b), a.max(b))),
                "face cycle {:?} uses non-edge ({a}, {b})",
                face
            );
        }
    }
}

#[test]
fn cube_solid() {
    // {4,3} has 8 vertices at (±1,±1,±1), 12 edges of length 2, 6 squares.
    let s = solid(&[4, 3]);
    assert_eq!(counts(&s), (8, 12, 6, 0));
    assert_eq!(s.name, "Cube");
    for &(a, b) in &s.edges {
        let len = (&s.vertices[a as usize] - &s.vertices[b as usize]).norm();
        assert!((len - 2.0).abs() < 1e-12);
    }
    for face in &s.faces2 {
        assert_eq!(face.len(), 4);
    }
    assert_faces_are_edge_cycles(&s);
    assert!(s.has_uniform_edge_degree());
    assert_eq!(s.edge_degrees()[0], 3);
}

#[test]
fn five_cell_solid() {
    // {3,3,3} is the complete graph on 5 symmetric vertices.
    let s = solid(&[3, 3, 3]);
    assert_eq!(counts(&s), (5, 10, 10, 5));
    assert_eq!(s.ambient_dim(), 5);
    let len0 = (&s.vertices[0] - &s.vertices[1]).norm();
    for &(a, b) in &s.edges {
        let len = (&s.vertices[a as usize] - &s.vertices[b as usize]).norm();
        assert!((len - len0).abs() < 1e-12, "simplex edges must be congruent");
    }
    assert_faces_are_edge_cycles(&s);
}

#[test]
fn ten_cube_scales() {
    // d = 10 stays well inside the supported range.
    let s = hypercube(10).unwrap();
    assert_eq!(s.vertex_count(), 1024);
    assert_eq!(s.edges.len(), 5120);
    assert!(s.has_uniform_edge_degree());
    assert_eq!(s.edge_degrees()[0], 10);
    assert!(hypercube(21).is_err());
    assert!(simplex(31).is_err());
}

#[test]
fn cross_polytope_4d() {
    let s = cross_polytope(4).unwrap();
    assert_eq!(counts(&s), (8, 24, 32, 16));
    // Antipodal vertices share no edge.
    for &(a, b) in &s.edges {
        assert_ne!(a / 2, b / 2);
    }
    assert_faces_are_edge_cycles(&s);
}

#[test]
fn neighbors_queries() {
    let s = solid(&[3, 4]);
    // Octahedron: every vertex has 4 neighbors, none of them antipodal.
    for v in 0..6u32 {
        let nbrs = s.neighbors(v);
        assert_eq!(nbrs.len(), 4);
        assert!(!nbrs.contains(&(v ^ 1)));
    }
}

#[test]
fn dodecahedron_recovered_incidence() {
    let s = exceptional_3d(Exceptional3d::Dodecahedron).unwrap();
    assert_eq!(counts(&s), (20, 30, 12, 0));
    for face in &s.faces2 {
        assert_eq!(face.len(), 5, "dodecahedron faces are pentagons");
    }
    assert_faces_are_edge_cycles(&s);
    assert!(s.has_uniform_edge_degree());
    assert_eq!(s.edge_degrees()[0], 3);
}

#[test]
fn icosahedron_recovered_incidence() {
    let s = exceptional_3d(Exceptional3d::Icosahedron).unwrap();
    assert_eq!(counts(&s), (12, 30, 20, 0));
    for face in &s.faces2 {
        assert_eq!(face.len(), 3);
    }
    assert_faces_are_edge_cycles(&s);
    assert_eq!(s.edge_degrees()[0], 5);
}

#[test]
fn twenty_four_cell_recovered_incidence() {
    let s = exceptional_4d(Exceptional4d::TwentyFourCell).unwrap();
    assert_eq!(counts(&s), (24, 96, 96, 24));
    for cell in &s.cells3 {
        assert_eq!(cell.len(), 6, "24-cell cells are octahedra");
    }
    for face in &s.faces2 {
        assert_eq!(face.len(), 3);
    }
    assert_faces_are_edge_cycles(&s);
    assert_eq!(s.edge_degrees()[0], 8);
}

#[test]
fn six_hundred_cell_recovered_incidence() {
    let s = exceptional_4d(Exceptional4d::SixHundredCell).unwrap();
    assert_eq!(counts(&s), (120, 720, 1200, 600));
    for cell in &s.cells3 {
        assert_eq!(cell.len(), 4, "600-cell cells are tetrahedra");
    }
    assert_faces_are_edge_cycles(&s);
    assert_eq!(s.edge_degrees()[0], 12);
}

#[test]
fn hundred_twenty_cell_recovered_incidence() {
    let s = exceptional_4d(Exceptional4d::HundredTwentyCell).unwrap();
    assert_eq!(counts(&s), (600, 1200, 720, 120));
    for cell in &s.cells3 {
        assert_eq!(cell.len(), 20, "120-cell cells are dodecahedra");
    }
    for face in &s.faces2 {
        assert_eq!(face.len(), 5);
    }
    assert_faces_are_edge_cycles(&s);
    assert_eq!(s.edge_degrees()[0], 4);
}

#[test]
fn edge_figure_multiplicity() {
    // 3D: every edge lies in exactly 2 faces.
    for s in [solid(&[4, 3]), solid(&[5, 3]), solid(&[3, 5])] {
        for &(a, b) in &s.edges {
            let count = s
                .faces2
                .iter()
                .filter(|f| f.contains(&a) && f.contains(&b))
                .count();
            assert_eq!(count, 2, "{}: edge ({a}, {b})", s.name);
        }
    }
    // 4D: every edge lies in exactly r cells for {p,q,r}.
    for s in [solid(&[3, 3, 4]), solid(&[3, 4, 3])] {
        let r = *s.symbol.components().last().unwrap() as usize;
        for &(a, b) in &s.edges {
            let count = s
                .cells3
                .iter()
                .filter(|c| c.binary_search(&a).is_ok() && c.binary_search(&b).is_ok())
                .count();
            assert_eq!(count, r, "{}: edge ({a}, {b})", s.name);
        }
    }
}

#[test]
fn polygon_degenerate() {
    let s = polygon(7).unwrap();
    assert_eq!(counts(&s), (7, 7, 0, 0));
    assert!(s.has_uniform_edge_degree());
    assert!(polygon(2).is_err());
}

#[test]
fn build_solid_dispatch() {
    assert!(build_solid(&SchlafliSymbol::parse("{6,3}").unwrap()).is_err());
    let s = build_solid(&SchlafliSymbol::parse("{3,3,3,3}").unwrap()).unwrap();
    assert_eq!(s.vertex_count(), 6);
}

#[test]
fn nearest_by_vertex_count() {
    // d = 3 candidates: 4, 8, 6, 20, 12 vertices.
    let pick = |n| by_vertex_count(3, n).unwrap().to_string();
    assert_eq!(pick(4), "{3,3}");
    assert_eq!(pick(19), "{5,3}");
    assert_eq!(pick(11), "{3,5}");
    // Tie at distance 1 from 5: simplex (4) precedes octahedron (6).
    assert_eq!(pick(5), "{3,3}");
    // d = 4: the 120-cell has 600 vertices.
    assert_eq!(by_vertex_count(4, 500).unwrap().to_string(), "{5,3,3}");
    assert!(by_vertex_count(1, 10).is_err());
}

proptest! {
    /// Solid-level counts agree with the closed-form f-vector for the
    /// infinite families across dimensions.
    #[test]
    fn family_counts_match_f_vector(d in 2usize..8) {
        for s in [simplex(d).unwrap(), hypercube(d).unwrap(), cross_polytope(d).unwrap()] {
            let f = f_vector(&s.symbol).unwrap();
            prop_assert_eq!(s.vertices.len() as u64, f[0]);
            prop_assert_eq!(s.edges.len() as u64, f[1]);
            if d >= 3 {
                prop_assert_eq!(s.faces2.len() as u64, f[2]);
            }
            if d >= 4 {
                prop_assert_eq!(s.cells3.len() as u64, f[3]);
            }
            prop_assert!(s.has_uniform_edge_degree());
        }
    }

    /// Edges always come back normalized: distinct endpoints, low index
    /// first, no duplicates.
    #[test]
    fn edges_are_normalized(d in 2usize..8) {
        for s in [simplex(d).unwrap(), cross_polytope(d).unwrap()] {
            let mut seen = std::collections::HashSet::new();
            for &(a, b) in &s.edges {
                prop_assert!(a < b);
                prop_assert!(seen.insert((a, b)));
            }
        }
    }
}
