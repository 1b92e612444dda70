//! Shadow projection math: planar contact shadows, light-space matrices for
//! shadow mapping, mirror reflection, and the per-frame uniform block.

mod clip;
mod error;
mod light_space;
mod orbit;
mod planar;
mod reflect;
mod uniform;

pub use clip::{DEPTH_REMAP, gl_to_zero_one};
pub use error::ShadowError;
pub use light_space::{LightProjection, light_view_projection};
pub use orbit::LightOrbit;
pub use planar::{
    DEFAULT_SHADOW_EPSILON, GroundPlane, PlanarShadow, ShadowBias, planar_shadow_matrix,
    project_point, row_major,
};
pub use reflect::reflection_about_y;
pub use uniform::{PhongParams, SceneMatrices, ShadowUniform};
