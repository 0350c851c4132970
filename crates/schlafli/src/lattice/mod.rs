//! Full face lattice of a constructed solid.
//!
//! Purpose
//! - Promote the flat vertex/edge/face/cell data of a `PolytopeSolid` into a
//!   ranked incidence structure with resolved subface links.
//! - Every build is validated against the closed-form f-vector and the Euler
//!   identity before it is handed out.

mod build;
mod types;


pub use build::build_lattice;
pub use types::{FaceLattice, KFace};
