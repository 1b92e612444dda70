//! Planar projected shadows.
//!
//! A point light flattens geometry onto a ground plane: every point `P` maps to
//! the intersection of the ray from the light through `P` with the plane. The
//! flattened silhouette is then drawn through the normal camera transform,
//! usually stencil-masked and alpha-blended over the ground.

use glam::{Mat4, Vec3};

use crate::error::ShadowError;

/// Default offset nudge keeping the light off the plane.
pub const DEFAULT_SHADOW_EPSILON: f32 = 1e-4;

/// Below this `|a|` an unbiased shadow matrix collapses to rank one.
const SINGULAR_THRESHOLD: f32 = 1e-6;

/// Direction in which the plane offset is nudged by the epsilon.
///
/// Both signs are in use depending on the receiving surface orientation; the
/// caller picks one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadowBias {
    /// `d = offset + epsilon`.
    #[default]
    Positive,
    /// `d = offset - epsilon`.
    Negative,
    /// `d = offset`; a light lying on the plane is reported as an error.
    Disabled,
}

impl ShadowBias {
    /// Effective plane offset after applying the bias.
    pub fn apply(self, offset: f32, epsilon: f32) -> f32 {
        match self {
            Self::Positive => offset + epsilon,
            Self::Negative => offset - epsilon,
            Self::Disabled => offset,
        }
    }
}

/// Plane `dot(normal, x) + offset = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    /// Plane normal, expected to be unit length.
    pub normal: Vec3,
    /// Signed offset along the normal.
    pub offset: f32,
}

impl Default for GroundPlane {
    /// The floor `y = -1`.
    fn default() -> Self {
        Self {
            normal: Vec3::Y,
            offset: 1.0,
        }
    }
}

impl GroundPlane {
    /// Horizontal plane at height `y`.
    pub fn horizontal(y: f32) -> Self {
        Self {
            normal: Vec3::Y,
            offset: -y,
        }
    }

    /// Signed distance of `p` from the plane (scaled by the normal length).
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.offset
    }
}

/// Planar shadow settings: target plane, bias direction and bias size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarShadow {
    /// Plane receiving the shadow.
    pub plane: GroundPlane,
    /// Bias direction.
    pub bias: ShadowBias,
    /// Bias magnitude.
    pub epsilon: f32,
}

impl Default for PlanarShadow {
    fn default() -> Self {
        Self {
            plane: GroundPlane::default(),
            bias: ShadowBias::Positive,
            epsilon: DEFAULT_SHADOW_EPSILON,
        }
    }
}

impl PlanarShadow {
    /// Build the shadow matrix for a light at `light`.
    ///
    /// With `d` the biased offset, `n` the plane normal and `a = d + dot(n, L)`
    /// the matrix rows are:
    ///
    /// ```text
    /// | a - Lx*nx  -Lx*ny     -Lx*nz     -Lx*d |
    /// | -Ly*nx     a - Ly*ny  -Ly*nz     -Ly*d |
    /// | -Lz*nx     -Lz*ny     a - Lz*nz  -Lz*d |
    /// | -nx        -ny        -nz        a - d |
    /// ```
    ///
    /// The matrix is applied after the model transform and before view and
    /// projection. When a bias is enabled, a light close to the plane is not
    /// detected and simply yields an ill-conditioned matrix.
    pub fn matrix(&self, light: Vec3) -> Result<Mat4, ShadowError> {
        if !light.is_finite() {
            return Err(ShadowError::invalid("light position is not finite"));
        }
        let n = self.plane.normal;
        if !n.is_finite() || n.length_squared() < SINGULAR_THRESHOLD {
            return Err(ShadowError::invalid("plane normal is zero or not finite"));
        }
        if !self.plane.offset.is_finite() || !self.epsilon.is_finite() {
            return Err(ShadowError::invalid("plane offset is not finite"));
        }

        let d = self.bias.apply(self.plane.offset, self.epsilon);
        let a = d + n.dot(light);
        if self.bias == ShadowBias::Disabled && a.abs() < SINGULAR_THRESHOLD {
            return Err(ShadowError::invalid("light lies on the shadow plane"));
        }

        let l = light;
        let rows = [
            [a - l.x * n.x, -l.x * n.y, -l.x * n.z, -l.x * d],
            [-l.y * n.x, a - l.y * n.y, -l.y * n.z, -l.y * d],
            [-l.z * n.x, -l.z * n.y, a - l.z * n.z, -l.z * d],
            [-n.x, -n.y, -n.z, a - d],
        ];
        Ok(Mat4::from_cols_array_2d(&rows).transpose())
    }
}

/// Shadow matrix for `light` onto `plane` with the default epsilon.
pub fn planar_shadow_matrix(
    light: Vec3,
    plane: &GroundPlane,
    bias: ShadowBias,
) -> Result<Mat4, ShadowError> {
    PlanarShadow {
        plane: *plane,
        bias,
        epsilon: DEFAULT_SHADOW_EPSILON,
    }
    .matrix(light)
}

/// Transform `p` as a point and divide by `w`.
///
/// Returns `None` when `w` vanishes (the point maps to infinity).
pub fn project_point(m: &Mat4, p: Vec3) -> Option<Vec3> {
    let h = *m * p.extend(1.0);
    if h.w.abs() <= f32::EPSILON * h.truncate().abs().max_element().max(1.0) {
        return None;
    }
    Some(h.truncate() / h.w)
}

/// Rows of `m`, top to bottom.
pub fn row_major(m: &Mat4) -> [[f32; 4]; 4] {
    m.transpose().to_cols_array_2d()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3, tol: f32) {
        assert!((a - b).length() < tol, "{a} is not within {tol} of {b}");
    }

    #[test]
    fn test_bias_offsets() {
        assert_eq!(ShadowBias::Positive.apply(1.0, 0.25), 1.25);
        assert_eq!(ShadowBias::Negative.apply(1.0, 0.25), 0.75);
        assert_eq!(ShadowBias::Disabled.apply(1.0, 0.25), 1.0);
    }

    #[test]
    fn test_matrix_rows_match_layout() {
        let light = Vec3::new(1.0, 3.0, -2.0);
        let m =
            planar_shadow_matrix(light, &GroundPlane::default(), ShadowBias::Disabled).unwrap();
        // d = 1, n = +Y, a = 1 + 3 = 4.
        let expected = [
            [4.0, -1.0, 0.0, -1.0],
            [0.0, 1.0, 0.0, -3.0],
            [0.0, 2.0, 4.0, 2.0],
            [0.0, -1.0, 0.0, 3.0],
        ];
        assert_eq!(row_major(&m), expected);
    }

    #[test]
    fn test_point_projects_onto_plane_along_light_ray() {
        let light = Vec3::new(0.0, 2.0, -2.0);
        let p = Vec3::new(0.0, 0.0, -3.0);
        let m =
            planar_shadow_matrix(light, &GroundPlane::default(), ShadowBias::Positive).unwrap();
        let q = project_point(&m, p).unwrap();

        assert!((q.y + 1.0).abs() < 1e-3, "projected y = {}", q.y);
        // Collinear with the light and the input point.
        let cross = (p - light).cross(q - light);
        assert!(cross.length() < 1e-3, "not collinear: |cross| = {}", cross.length());
        assert_close(q, Vec3::new(0.0, -1.0, -3.5), 1e-3);
    }

    #[test]
    fn test_points_on_plane_are_fixed() {
        let light = Vec3::new(1.5, 2.0, -0.5);
        let shadow = PlanarShadow::default();
        let m = shadow.matrix(light).unwrap();
        let y = -ShadowBias::Positive.apply(1.0, DEFAULT_SHADOW_EPSILON);
        for p in [
            Vec3::new(0.0, y, 0.0),
            Vec3::new(0.3, y, 2.0),
            Vec3::new(-4.0, y, -7.5),
        ] {
            let q = project_point(&m, p).unwrap();
            assert_close(q, p, 1e-4);
        }
    }

    #[test]
    fn test_every_projection_lands_on_plane() {
        let light = Vec3::new(-1.0, 4.0, 0.5);
        let shadow = PlanarShadow {
            bias: ShadowBias::Negative,
            ..PlanarShadow::default()
        };
        let d = ShadowBias::Negative.apply(1.0, DEFAULT_SHADOW_EPSILON);
        let m = shadow.matrix(light).unwrap();
        for p in [
            Vec3::new(0.2, 0.5, -3.0),
            Vec3::new(1.0, -0.5, 1.0),
            Vec3::new(-2.0, 1.0, 0.0),
        ] {
            let q = project_point(&m, p).unwrap();
            assert!((q.y + d).abs() < 1e-4, "projected y = {}", q.y);
        }
    }

    #[test]
    fn test_tilted_plane() {
        let plane = GroundPlane {
            normal: Vec3::new(1.0, 1.0, 0.0).normalize(),
            offset: 0.5,
        };
        let light = Vec3::new(2.0, 3.0, 1.0);
        let m = planar_shadow_matrix(light, &plane, ShadowBias::Disabled).unwrap();
        let p = Vec3::new(0.5, 0.5, 0.0);
        let q = project_point(&m, p).unwrap();
        assert!(plane.signed_distance(q).abs() < 1e-4);
        assert!((p - light).cross(q - light).length() < 1e-3);
    }

    #[test]
    fn test_horizontal_plane_helper() {
        let plane = GroundPlane::horizontal(-1.0);
        assert_eq!(plane, GroundPlane::default());
        assert_eq!(plane.signed_distance(Vec3::new(3.0, -1.0, 9.0)), 0.0);
    }

    #[test]
    fn test_light_on_plane_rejected_without_bias() {
        let light = Vec3::new(0.0, -1.0, 0.0);
        let err = planar_shadow_matrix(light, &GroundPlane::default(), ShadowBias::Disabled);
        assert!(matches!(err, Err(ShadowError::InvalidArgument { .. })));
    }

    #[test]
    fn test_light_on_plane_accepted_with_bias() {
        let light = Vec3::new(0.0, -1.0, 0.0);
        let m = planar_shadow_matrix(light, &GroundPlane::default(), ShadowBias::Positive);
        assert!(m.is_ok());
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let plane = GroundPlane::default();
        let nan_light = Vec3::new(f32::NAN, 1.0, 0.0);
        assert!(planar_shadow_matrix(nan_light, &plane, ShadowBias::Positive).is_err());
        let inf_light = Vec3::new(0.0, f32::INFINITY, 0.0);
        assert!(planar_shadow_matrix(inf_light, &plane, ShadowBias::Negative).is_err());
        let zero = GroundPlane {
            normal: Vec3::ZERO,
            offset: 1.0,
        };
        assert!(planar_shadow_matrix(Vec3::Y * 3.0, &zero, ShadowBias::Positive).is_err());
    }

    #[test]
    fn test_point_level_with_light_has_no_projection() {
        // A point at the light's height never reaches the floor.
        let light = Vec3::new(0.0, 2.0, 0.0);
        let m =
            planar_shadow_matrix(light, &GroundPlane::default(), ShadowBias::Disabled).unwrap();
        assert!(project_point(&m, Vec3::new(1.0, 2.0, 0.0)).is_none());
    }
}
