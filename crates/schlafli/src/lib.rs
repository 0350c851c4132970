//! Regular polytope engine: Schläfli symbols, closed-form face counts,
//! coordinate realizations, face lattices, and bounded discovery.
//!
//! Pipeline
//! - `symbol` parses and manipulates `{p1,...,pL}` tuples.
//! - `validate` decides finite regularity (angle bound, 4D table, families).
//! - `family` resolves the tuple into a tagged family once.
//! - `counts` gives exact f-vectors without any geometry.
//! - `geometry` realizes solids as coordinates plus incidence.
//! - `lattice` promotes a solid to the full ranked face lattice.
//! - `discover` sweeps a bounded symbol box and reports the survivors.

pub mod counts;
pub mod discover;
pub mod error;
pub mod family;
pub mod geometry;
pub mod lattice;
pub mod symbol;
pub mod validate;

mod util;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;
pub use symbol::SchlafliSymbol;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::counts::{euler_characteristic, f_vector, face_count};
    pub use crate::discover::{discover, DiscoveryConfig, DiscoveryResult};
    pub use crate::error::Error;
    pub use crate::family::{common_name, is_self_dual, Family};
    pub use crate::geometry::{build_solid, PolytopeSolid};
    pub use crate::lattice::{build_lattice, FaceLattice};
    pub use crate::symbol::SchlafliSymbol;
    pub use crate::validate::is_regular_polytope;
}
