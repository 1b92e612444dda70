//! GPU-side uniform block shared by the main, ground and depth passes.
//!
//! Layout (68 × f32 = 272 bytes), matrices column-major:
//!
//! | Offset (f32) | Field        | Contents                          |
//! |--------------|--------------|-----------------------------------|
//! | 0            | `mvp`        | projection · view · model         |
//! | 16           | `eye`        | camera position, w = 1            |
//! | 20           | `phong`      | Le, La, kd, ks                    |
//! | 24           | `params`     | shininess, shadows on/off, 0, 0   |
//! | 28           | `light_pos`  | light position, w = 1             |
//! | 32           | `model`      | model matrix                      |
//! | 48           | `light_pv`   | light view-projection             |
//! | 64           | `shadow_map` | shadow map width, height, 0, 0    |

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Phong lighting coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongParams {
    /// Emitted light radiance.
    pub le: f32,
    /// Ambient radiance.
    pub la: f32,
    /// Diffuse coefficient.
    pub kd: f32,
    /// Specular coefficient.
    pub ks: f32,
    /// Specular exponent.
    pub shininess: f32,
}

impl Default for PhongParams {
    fn default() -> Self {
        Self {
            le: 1.0,
            la: 0.15,
            kd: 0.9,
            ks: 0.6,
            shininess: 64.0,
        }
    }
}

/// Per-object matrices written into a [`ShadowUniform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneMatrices {
    /// Full model-view-projection.
    pub mvp: Mat4,
    /// Model matrix, used to re-project fragments into light space.
    pub model: Mat4,
    /// Light view-projection.
    pub light_pv: Mat4,
}

/// Uniform block written once per object per frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShadowUniform {
    /// Model-view-projection matrix.
    pub mvp: [f32; 16],
    /// Camera position (w = 1).
    pub eye: [f32; 4],
    /// Le, La, kd, ks.
    pub phong: [f32; 4],
    /// Shininess, shadow flag, padding.
    pub params: [f32; 4],
    /// Light position (w = 1).
    pub light_pos: [f32; 4],
    /// Model matrix.
    pub model: [f32; 16],
    /// Light view-projection matrix.
    pub light_pv: [f32; 16],
    /// Shadow map resolution, padding.
    pub shadow_map: [f32; 4],
}

static_assertions::assert_eq_size!(ShadowUniform, [f32; 68]);

impl ShadowUniform {
    /// Pack a uniform block with shadow sampling enabled.
    pub fn new(
        matrices: &SceneMatrices,
        eye: Vec3,
        light_pos: Vec3,
        phong: &PhongParams,
        shadow_map_size: u32,
    ) -> Self {
        let size = shadow_map_size as f32;
        Self {
            mvp: matrices.mvp.to_cols_array(),
            eye: eye.extend(1.0).to_array(),
            phong: [phong.le, phong.la, phong.kd, phong.ks],
            params: [phong.shininess, 1.0, 0.0, 0.0],
            light_pos: light_pos.extend(1.0).to_array(),
            model: matrices.model.to_cols_array(),
            light_pv: matrices.light_pv.to_cols_array(),
            shadow_map: [size, size, 0.0, 0.0],
        }
    }

    /// Toggle shadow-map sampling in the shading pass.
    pub fn with_shadows(mut self, enabled: bool) -> Self {
        self.params[1] = if enabled { 1.0 } else { 0.0 };
        self
    }

    /// Whether shadow-map sampling is enabled.
    pub fn shadows_enabled(&self) -> bool {
        self.params[1] != 0.0
    }
}
