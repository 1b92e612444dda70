//! Level-0 base mesh: a regular tetrahedron inscribed in the unit sphere.

use glam::Vec3;

use crate::sphere::SphereMesh;

/// Triangle list of the base tetrahedron, counter-clockwise seen from outside.
const TETRAHEDRON_INDICES: [u32; 12] = [
    0, 1, 2, //
    0, 3, 1, //
    1, 3, 2, //
    0, 2, 3,
];

/// Build the level-0 mesh.
///
/// Corner positions are evaluated in `f64` and narrowed once, so every level
/// starts from the same four bit patterns:
///
/// ```text
/// v0 = (0, 0, 1)
/// v1 = (0, 2*sqrt(2)/3, -1/3)
/// v2 = (-sqrt(6)/3, -sqrt(2)/3, -1/3)
/// v3 = ( sqrt(6)/3, -sqrt(2)/3, -1/3)
/// ```
pub fn tetrahedron() -> SphereMesh {
    let s2 = std::f64::consts::SQRT_2;
    let s6 = 6.0_f64.sqrt();
    let third = -1.0 / 3.0;

    let vertices = vec![
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, (2.0 * s2 / 3.0) as f32, third as f32),
        Vec3::new((-s6 / 3.0) as f32, (-s2 / 3.0) as f32, third as f32),
        Vec3::new((s6 / 3.0) as f32, (-s2 / 3.0) as f32, third as f32),
    ];

    SphereMesh {
        vertices,
        indices: TETRAHEDRON_INDICES.to_vec(),
    }
}
