//! Clip-space depth convention conversion.

use glam::Mat4;

/// Maps OpenGL clip depth `[-1, 1]` to the `[0, 1]` range used by WebGPU,
/// Vulkan and Direct3D: `z' = 0.5 * z + 0.5 * w`.
///
/// Rows:
///
/// ```text
/// | 1  0  0    0   |
/// | 0  1  0    0   |
/// | 0  0  0.5  0.5 |
/// | 0  0  0    1   |
/// ```
pub const DEPTH_REMAP: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.5, 0.0, //
    0.0, 0.0, 0.5, 1.0,
]);

/// Convert a projection built for `[-1, 1]` depth to `[0, 1]` depth.
pub fn gl_to_zero_one(projection: Mat4) -> Mat4 {
    DEPTH_REMAP * projection
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_remap_matches_zero_to_one_perspective() {
        let fov = 45.0_f32.to_radians();
        let gl = Mat4::perspective_rh_gl(fov, 1.5, 0.1, 100.0);
        let zo = Mat4::perspective_rh(fov, 1.5, 0.1, 100.0);
        let remapped = gl_to_zero_one(gl);
        assert!(
            remapped.abs_diff_eq(zo, 1e-5),
            "remapped {remapped} != {zo}"
        );
    }

    #[test]
    fn test_remap_endpoints() {
        let near = DEPTH_REMAP * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = DEPTH_REMAP * Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(near.z / near.w, 0.0);
        assert_eq!(far.z / far.w, 1.0);
    }

    #[test]
    fn test_xy_untouched() {
        let v = DEPTH_REMAP * Vec4::new(0.3, -0.7, 0.2, 1.0);
        assert_eq!((v.x, v.y, v.w), (0.3, -0.7, 1.0));
    }
}
