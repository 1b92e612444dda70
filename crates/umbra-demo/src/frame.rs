//! Per-frame scene update.
//!
//! All animated values live in [`FrameState`] and are advanced by
//! [`FrameState::update`]; the matrices of a frame are a pure function of that
//! state.

use glam::{Mat4, Vec3};
use umbra_config::{BiasSign, Config};
use umbra_shadow::{
    GroundPlane, LightOrbit, LightProjection, PhongParams, PlanarShadow, SceneMatrices,
    ShadowBias, ShadowError, ShadowUniform, gl_to_zero_one, reflection_about_y,
};

/// Vertical bounce of the shadow caster between two heights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    /// Current phase in radians.
    pub phase: f32,
    /// Phase advanced per step.
    pub speed: f32,
    /// Lowest height.
    pub y_min: f32,
    /// Highest height.
    pub y_max: f32,
}

impl Default for Bounce {
    fn default() -> Self {
        Self {
            phase: 0.0,
            speed: 0.1,
            y_min: -1.0,
            y_max: 0.0,
        }
    }
}

impl Bounce {
    /// Height at the current phase.
    pub fn height(&self) -> f32 {
        let center = (self.y_min + self.y_max) * 0.5;
        let amplitude = (self.y_max - self.y_min) * 0.5;
        center + amplitude * self.phase.sin()
    }

    fn advance(&mut self, steps: f32) {
        self.phase = (self.phase + self.speed * steps).rem_euclid(std::f32::consts::TAU);
    }
}

/// Fixed viewer camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Eye position.
    pub eye: Vec3,
    /// Look-at point.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Width over height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::new(0.0, 0.0, -3.0),
            fov_y_degrees: 65.0,
            aspect: 1.0,
            near: 0.1,
            far: 50.0,
        }
    }
}

impl Camera {
    /// Projection · view with `[0, 1]` clip depth.
    pub fn view_projection(&self) -> Mat4 {
        let projection = gl_to_zero_one(Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        ));
        projection * Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameOutput {
    /// Light position this frame.
    pub light: Vec3,
    /// Model matrix of the shadow caster.
    pub model: Mat4,
    /// Camera MVP of the caster.
    pub mvp: Mat4,
    /// Camera MVP of the caster flattened onto the ground.
    pub planar_shadow_mvp: Mat4,
    /// Camera MVP of the caster mirrored below the ground.
    pub reflection_mvp: Mat4,
    /// Light view-projection for the depth pass.
    pub light_pv: Mat4,
    /// Uniform block for the caster.
    pub uniform: ShadowUniform,
}

/// Animated scene state threaded through the frame loop.
#[derive(Clone, Debug)]
pub struct FrameState {
    /// Light animation.
    pub orbit: LightOrbit,
    /// Caster animation.
    pub bounce: Bounce,
    /// Ground plane and bias for the flattened shadow.
    pub shadow: PlanarShadow,
    /// Shadow-map camera.
    pub light_projection: LightProjection,
    pub camera: Camera,
    pub phong: PhongParams,
    /// Shadow map resolution in texels.
    pub shadow_map_size: u32,
}

impl FrameState {
    /// Build the initial state from configuration.
    pub fn from_config(config: &Config) -> Self {
        let light = &config.light;
        let bias = match config.shadow.bias {
            BiasSign::Positive => ShadowBias::Positive,
            BiasSign::Negative => ShadowBias::Negative,
            BiasSign::Disabled => ShadowBias::Disabled,
        };
        Self {
            orbit: LightOrbit {
                center: Vec3::from_array(light.center),
                radius: light.radius,
                angle: 0.0,
                angular_speed: light.angular_speed,
            },
            bounce: Bounce::default(),
            shadow: PlanarShadow {
                plane: GroundPlane {
                    normal: Vec3::Y,
                    offset: config.shadow.plane_offset,
                },
                bias,
                epsilon: config.shadow.epsilon,
            },
            light_projection: LightProjection {
                fov_y_degrees: light.fov_y_degrees,
                near: light.near,
                far: light.far,
                target: Vec3::from_array(light.target),
                up: Vec3::Y,
            },
            camera: Camera::default(),
            phong: PhongParams::default(),
            shadow_map_size: config.shadow.shadow_map_size,
        }
    }

    /// Advance animation by `steps` and compute the frame's matrices.
    pub fn update(&mut self, steps: f32) -> Result<FrameOutput, ShadowError> {
        self.orbit.advance(steps);
        self.bounce.advance(steps);
        self.compute()
    }

    /// Matrices for the current state without advancing it.
    pub fn compute(&self) -> Result<FrameOutput, ShadowError> {
        let light = self.orbit.position();
        let model = Mat4::from_translation(Vec3::new(0.0, self.bounce.height(), -3.0))
            * Mat4::from_scale(Vec3::splat(0.25));
        let pv = self.camera.view_projection();

        let shadow = self.shadow.matrix(light)?;
        let light_pv = self.light_projection.view_projection(light)?;
        let mirror = reflection_about_y(-self.shadow.plane.offset);

        let matrices = SceneMatrices {
            mvp: pv * model,
            model,
            light_pv,
        };
        let uniform = ShadowUniform::new(
            &matrices,
            self.camera.eye,
            light,
            &self.phong,
            self.shadow_map_size,
        );

        Ok(FrameOutput {
            light,
            model,
            mvp: matrices.mvp,
            planar_shadow_mvp: pv * shadow * model,
            reflection_mvp: pv * mirror * model,
            light_pv,
            uniform,
        })
    }
}
