//! Planar mirror reflection.

use glam::{Mat4, Vec3};

/// Reflection across the horizontal plane `y = y0`:
/// `T(0, y0, 0) · S(1, -1, 1) · T(0, -y0, 0)`.
///
/// Applied before the model matrix to draw a mirrored copy of an object
/// below a reflective floor. The result flips triangle winding.
pub fn reflection_about_y(y0: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, y0, 0.0))
        * Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0))
        * Mat4::from_translation(Vec3::new(0.0, -y0, 0.0))
}
