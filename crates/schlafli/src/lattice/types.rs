//! Arena representation of the face lattice.

/// One face of rank `dim`. `subfaces` indexes into the rank below; rank 0
/// faces have none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KFace {
    pub dim: usize,
    /// Position within its rank.
    pub index: usize,
    /// Sorted vertex indices of the face.
    pub vertices: Vec<u32>,
    /// Indices into `ranks[dim - 1]`.
    pub subfaces: Vec<usize>,
}

/// The full incidence structure of proper faces, one arena per rank.
///
/// `ranks[0]` are vertices, `ranks[1]` edges, up to `ranks[d - 1]` facets.
/// Ordering is deterministic: rank 0 by vertex index, rank 1 by the solid's
/// edge order, rank 2 by the solid's face order, ranks 3 and above by sorted
/// vertex tuple.
#[derive(Clone, Debug)]
pub struct FaceLattice {
    pub ranks: Vec<Vec<KFace>>,
}

impl FaceLattice {
    /// Polytope dimension d (number of proper ranks).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.ranks.len()
    }

    /// Faces of rank `k`, empty above the top rank.
    pub fn rank(&self, k: usize) -> &[KFace] {
        self.ranks.get(k).map_or(&[], Vec::as_slice)
    }

    /// Face counts per rank.
    pub fn f_vector(&self) -> Vec<u64> {
        self.ranks.iter().map(|r| r.len() as u64).collect()
    }

    /// Alternating sum of the per-rank counts.
    pub fn euler_characteristic(&self) -> i64 {
        crate::counts::euler_characteristic(&self.f_vector())
    }
}
