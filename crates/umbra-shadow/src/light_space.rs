//! Light-space view-projection for depth-map shadows.
//!
//! The scene is rendered from the light into an offscreen depth target with
//! `lightPV`; the shading pass re-projects fragments with the same matrix and
//! compares against the stored depth. Only the matrix is built here.

use glam::{Mat4, Vec3};

use crate::error::ShadowError;

/// Minimum light-to-target distance and up/forward separation.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Perspective light camera aimed at a fixed scene point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightProjection {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Point the light looks at.
    pub target: Vec3,
    /// World up vector.
    pub up: Vec3,
}

impl Default for LightProjection {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 20.0,
            target: Vec3::new(0.0, -1.0, -3.0),
            up: Vec3::Y,
        }
    }
}

impl LightProjection {
    /// `lightPV` for a light at `light`.
    pub fn view_projection(&self, light: Vec3) -> Result<Mat4, ShadowError> {
        light_view_projection(
            light,
            self.target,
            self.up,
            self.fov_y_degrees,
            self.near,
            self.far,
        )
    }
}

/// Build `perspective(fov, 1, near, far) * look_at(light, target, up)`.
///
/// Right-handed, square aspect, clip depth in `[0, 1]`. A light placed at the
/// target, an up vector parallel to the view direction, non-finite inputs and
/// invalid clip ranges are all rejected rather than patched up.
pub fn light_view_projection(
    light: Vec3,
    target: Vec3,
    up: Vec3,
    fov_y_degrees: f32,
    near: f32,
    far: f32,
) -> Result<Mat4, ShadowError> {
    if !(light.is_finite() && target.is_finite() && up.is_finite()) {
        return Err(ShadowError::invalid("light, target or up is not finite"));
    }
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return Err(ShadowError::invalid("field of view must be in (0, 180) degrees"));
    }
    if !(near > 0.0 && far > near && far.is_finite()) {
        return Err(ShadowError::invalid("clip range must satisfy 0 < near < far"));
    }

    let forward = target - light;
    let distance = forward.length();
    if distance < DEGENERATE_EPSILON {
        return Err(ShadowError::invalid("light position equals target"));
    }
    if up.length_squared() < DEGENERATE_EPSILON
        || (forward / distance).cross(up.normalize()).length() < DEGENERATE_EPSILON
    {
        return Err(ShadowError::invalid("up vector is parallel to the light direction"));
    }

    let view = Mat4::look_at_rh(light, target, up);
    let proj = Mat4::perspective_rh(fov_y_degrees.to_radians(), 1.0, near, far);
    Ok(proj * view)
}
