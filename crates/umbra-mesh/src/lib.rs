//! Unit sphere tessellation by recursive subdivision of a regular tetrahedron.
//!
//! Each subdivision pass splits every triangle into four, welding the midpoint
//! of every shared edge so the mesh stays watertight at every level.

mod error;
mod lod;
mod sphere;
mod subdivide;
mod tetrahedron;
mod vertex;

pub use error::MeshError;
pub use lod::{DEFAULT_MAX_LEVEL, LevelOfDetail};
pub use sphere::{SphereMesh, expected_counts, tessellate_sphere};
pub use subdivide::{EdgeKey, MidpointCache, subdivide};
pub use tetrahedron::tetrahedron;
pub use vertex::{
    SPHERE_VERTEX_ATTRIBUTES, SPHERE_VERTEX_STRIDE, SphereVertex, VertexAttributeDesc,
    VertexFormat,
};
