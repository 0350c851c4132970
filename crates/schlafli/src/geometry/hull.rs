//! Incidence recovery from raw coordinates.
//!
//! Purpose
//! - The exceptional solids start as bare vertex clouds; edges, faces, and
//!   cells are recovered geometrically rather than tabulated.
//! - Edges: all pairs realizing the minimal pairwise distance.
//! - Facets: supporting hyperplanes spanned by a vertex and d-1 of its edge
//!   neighbors; a candidate plane is kept only when the whole cloud lies on
//!   one side of it.
//!
//! Assumptions
//! - vertices are in convex position and vertex-transitive, so the minimal
//!   distance IS the edge length and every facet touches every one of its
//!   vertices' local neighbor spans.

use nalgebra::{DVector, Matrix3, Vector3};

use super::cfg::{DEGEN_EPS, EDGE_EPS, TIGHT_EPS};

/// Edges of a vertex-transitive cloud: all pairs at the minimal pairwise
/// distance, up to a relative tolerance.
pub(super) fn edges_by_min_distance(vertices: &[DVector<f64>]) -> Vec<(u32, u32)> {
    let n = vertices.len();
    let scale = vertices
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0_f64, |acc, &x| acc.max(x.abs()))
        .max(1.0);
    let mut min_sq = f64::INFINITY;
    for i in 0..n {
        for j in i + 1..n {
            let sq = (&vertices[i] - &vertices[j]).norm_squared();
            if sq > DEGEN_EPS && sq < min_sq {
                min_sq = sq;
            }
        }
    }
    let tol = EDGE_EPS * scale;
    let cutoff = (min_sq.sqrt() + tol).powi(2);
    let mut edges = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            if (&vertices[i] - &vertices[j]).norm_squared() <= cutoff {
                edges.push((i as u32, j as u32));
            }
        }
    }
    edges
}

/// Facet detection shared by the 3D and 4D paths: for every vertex and every
/// (d-1)-subset of its neighbors, form the spanned hyperplane's normal and
/// keep the vertex set of each supporting plane. Facets come back as sorted,
/// deduplicated vertex index sets.
pub(super) fn facets_by_supporting_planes(
    vertices: &[DVector<f64>],
    edges: &[(u32, u32)],
) -> Vec<Vec<u32>> {
    let d = vertices.first().map_or(0, |v| v.len());
    debug_assert!(d == 3 || d == 4);
    let n = vertices.len();
    let mut adjacency = vec![Vec::new(); n];
    for &(a, b) in edges {
        adjacency[a as usize].push(b as usize);
        adjacency[b as usize].push(a as usize);
    }

    let mut seen = std::collections::HashSet::new();
    let mut facets = Vec::new();
    for v in 0..n {
        let nbrs = &adjacency[v];
        for subset in crate::util::combinations(nbrs.len(), d - 1) {
            let spans: Vec<DVector<f64>> = subset
                .iter()
                .map(|&i| &vertices[nbrs[i]] - &vertices[v])
                .collect();
            let Some(normal) = hyperplane_normal(&spans) else {
                continue;
            };
            if let Some(facet) = supported_vertex_set(vertices, &vertices[v], &normal) {
                if seen.insert(facet.clone()) {
                    facets.push(facet);
                }
            }
        }
    }
    facets.sort();
    facets
}

/// Normal of the hyperplane spanned by d-1 vectors in R^d, unit length.
/// `None` when the span is degenerate.
fn hyperplane_normal(spans: &[DVector<f64>]) -> Option<DVector<f64>> {
    let normal = match spans {
        [x, y] => {
            let a = Vector3::new(x[0], x[1], x[2]);
            let b = Vector3::new(y[0], y[1], y[2]);
            let c = a.cross(&b);
            DVector::from_vec(vec![c[0], c[1], c[2]])
        }
        [x, y, z] => cofactor_normal4(x, y, z),
        _ => return None,
    };
    let len = normal.norm();
    if len < DEGEN_EPS {
        return None;
    }
    Some(normal / len)
}

/// 4D normal by cofactor expansion: component i is the signed 3x3 minor of
/// the span matrix with column i struck out.
fn cofactor_normal4(x: &DVector<f64>, y: &DVector<f64>, z: &DVector<f64>) -> DVector<f64> {
    let mut normal = DVector::zeros(4);
    for i in 0..4 {
        let cols: Vec<usize> = (0..4).filter(|&c| c != i).collect();
        let m = Matrix3::from_fn(|r, c| [x, y, z][r][cols[c]]);
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        normal[i] = sign * m.determinant();
    }
    normal
}

/// Vertices on the supporting plane through `anchor` with the given unit
/// normal, or `None` when the cloud straddles the plane (either orientation
/// may support, so both are tried).
fn supported_vertex_set(
    vertices: &[DVector<f64>],
    anchor: &DVector<f64>,
    normal: &DVector<f64>,
) -> Option<Vec<u32>> {
    for orient in [1.0, -1.0] {
        let h = orient * normal.dot(anchor);
        let mut on_plane = Vec::new();
        let mut supports = true;
        for (i, v) in vertices.iter().enumerate() {
            let s = orient * normal.dot(v);
            if s > h + TIGHT_EPS {
                supports = false;
                break;
            }
            if s > h - TIGHT_EPS {
                on_plane.push(i as u32);
            }
        }
        if supports && on_plane.len() >= 3 {
            return Some(on_plane);
        }
    }
    None
}

/// 2-faces of a 4D solid: intersections of cell pairs with at least three
/// common vertices, cyclically ordered.
pub(super) fn faces2_from_cells(vertices: &[DVector<f64>], cells: &[Vec<u32>]) -> Vec<Vec<u32>> {
    let mut seen = std::collections::HashSet::new();
    let mut faces = Vec::new();
    for i in 0..cells.len() {
        for j in i + 1..cells.len() {
            // Both cells are sorted, so a merge-style intersection works.
            let common: Vec<u32> = cells[i]
                .iter()
                .copied()
                .filter(|v| cells[j].binary_search(v).is_ok())
                .collect();
            if common.len() < 3 {
                continue;
            }
            if seen.insert(common.clone()) {
                faces.push(order_cycle(vertices, &common));
            }
        }
    }
    faces.sort();
    faces
}

/// Arrange a coplanar vertex set into its boundary cycle, canonicalized:
/// the smallest index comes first and the cycle runs toward the smaller of
/// its two neighbors.
pub(super) fn order_cycle(vertices: &[DVector<f64>], face: &[u32]) -> Vec<u32> {
    debug_assert!(face.len() >= 3);
    let dim = vertices[0].len();
    let centroid = face
        .iter()
        .fold(DVector::zeros(dim), |acc, &v| acc + &vertices[v as usize])
        / face.len() as f64;

    // Orthonormal basis of the face plane via Gram-Schmidt on two offsets.
    let u = (&vertices[face[0] as usize] - &centroid).normalize();
    let mut w = DVector::zeros(dim);
    for &v in &face[1..] {
        let off = &vertices[v as usize] - &centroid;
        let rej = &off - &u * u.dot(&off);
        if rej.norm() > DEGEN_EPS {
            w = rej.normalize();
            break;
        }
    }

    let mut angled: Vec<(f64, u32)> = face
        .iter()
        .map(|&v| {
            let off = &vertices[v as usize] - &centroid;
            (off.dot(&w).atan2(off.dot(&u)), v)
        })
        .collect();
    angled.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut cycle: Vec<u32> = angled.into_iter().map(|(_, v)| v).collect();

    // Canonical start and direction.
    let start = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, &v)| v)
        .map(|(i, _)| i)
        .unwrap_or(0);
    cycle.rotate_left(start);
    if cycle.len() >= 3 && cycle[1] > cycle[cycle.len() - 1] {
        cycle[1..].reverse();
    }
    cycle
}
