//! Circular light animation driven by explicit state.

use std::f32::consts::TAU;

use glam::Vec3;

/// A point light circling horizontally around `center`.
///
/// The angle is owned by the caller's frame loop and advanced explicitly;
/// the light position is a pure function of the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightOrbit {
    /// Orbit center.
    pub center: Vec3,
    /// Orbit radius.
    pub radius: f32,
    /// Current angle in radians, kept in `[0, TAU)`.
    pub angle: f32,
    /// Radians advanced per step.
    pub angular_speed: f32,
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, 2.0, -2.0),
            radius: 2.0,
            angle: 0.0,
            angular_speed: 0.01,
        }
    }
}

impl LightOrbit {
    /// Light position at the current angle.
    pub fn position(&self) -> Vec3 {
        self.center
            + Vec3::new(
                self.radius * self.angle.cos(),
                0.0,
                self.radius * self.angle.sin(),
            )
    }

    /// Advance the angle by `steps` animation steps (fractional steps allowed).
    pub fn advance(&mut self, steps: f32) {
        self.angle = (self.angle + self.angular_speed * steps).rem_euclid(TAU);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let orbit = LightOrbit::default();
        assert_eq!(orbit.position(), Vec3::new(2.0, 2.0, -2.0));
    }

    #[test]
    fn test_radius_and_height_preserved() {
        let mut orbit = LightOrbit::default();
        for _ in 0..500 {
            orbit.advance(1.0);
            let p = orbit.position();
            let r = (p - orbit.center).length();
            assert!((r - orbit.radius).abs() < 1e-5);
            assert_eq!(p.y, orbit.center.y);
        }
    }

    #[test]
    fn test_angle_wraps() {
        let mut orbit = LightOrbit {
            angular_speed: 1.0,
            ..LightOrbit::default()
        };
        orbit.advance(10.0);
        assert!(orbit.angle >= 0.0 && orbit.angle < TAU);
        assert!((orbit.angle - (10.0 - TAU)).abs() < 1e-5);
    }

    #[test]
    fn test_quarter_turn() {
        let mut orbit = LightOrbit {
            angular_speed: std::f32::consts::FRAC_PI_2,
            ..LightOrbit::default()
        };
        orbit.advance(1.0);
        let p = orbit.position();
        assert!((p - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }
}
