//! Sphere mesh container and the level-driven tessellation entry point.

use glam::Vec3;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::MeshError;
use crate::subdivide::{EdgeKey, subdivide};
use crate::tetrahedron::tetrahedron;
use crate::vertex::SphereVertex;

/// An indexed triangle mesh approximating the unit sphere.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    /// Vertex positions, all at unit distance from the origin.
    pub vertices: Vec<Vec3>,
    /// Triangle list, three indices per triangle.
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        let mut edges = FxHashSet::default();
        for [a, b, c] in self.triangles() {
            edges.insert(EdgeKey::new(a, b));
            edges.insert(EdgeKey::new(b, c));
            edges.insert(EdgeKey::new(c, a));
        }
        edges.len()
    }

    /// Interleaved position/normal vertices for GPU upload.
    ///
    /// On the unit sphere the normal equals the position.
    pub fn to_vertices(&self) -> Vec<SphereVertex> {
        self.vertices.iter().map(|&p| SphereVertex::new(p)).collect()
    }

    /// Raw bytes of [`Self::to_vertices`] for the vertex buffer.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_vertices()).to_vec()
    }

    /// Raw index bytes (`u32` per index).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Tessellate the unit sphere at the given subdivision level.
///
/// Level 0 is the base tetrahedron (4 vertices, 4 faces); every level
/// quadruples the face count. Negative levels are rejected. No upper bound is
/// applied here; see [`crate::LevelOfDetail`] for the interactive clamp.
pub fn tessellate_sphere(level: i32) -> Result<SphereMesh, MeshError> {
    if level < 0 {
        return Err(MeshError::InvalidArgument { level });
    }

    let mut mesh = tetrahedron();
    for pass in 1..=level {
        mesh = subdivide(&mesh);
        debug!(
            level = pass,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "subdivided sphere"
        );
    }
    Ok(mesh)
}

/// Vertex and face counts predicted for `level`.
///
/// `F_k = 4 · 4^k` and `V_{k+1} = V_k + 3 · F_k / 2`, starting from `V_0 = 4`.
/// Returns `None` when either count does not fit in `usize`.
pub fn expected_counts(level: u32) -> Option<(usize, usize)> {
    let mut vertices = 4usize;
    let mut faces = 4usize;
    for _ in 0..level {
        vertices = vertices.checked_add(faces / 2 * 3)?;
        faces = faces.checked_mul(4)?;
    }
    Some((vertices, faces))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_level_rejected() {
        assert_eq!(
            tessellate_sphere(-1),
            Err(MeshError::InvalidArgument { level: -1 })
        );
    }

    #[test]
    fn test_level_zero_is_tetrahedron() {
        let mesh = tessellate_sphere(0).unwrap();
        assert_eq!(mesh, tetrahedron());
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn test_known_counts() {
        let cases = [(0, 4, 4), (1, 10, 16), (2, 34, 64)];
        for (level, vertices, faces) in cases {
            let mesh = tessellate_sphere(level).unwrap();
            assert_eq!(mesh.vertex_count(), vertices, "vertices at level {level}");
            assert_eq!(mesh.triangle_count(), faces, "faces at level {level}");
        }
    }

    #[test]
    fn test_counts_follow_growth_law() {
        for level in 0..=6 {
            let mesh = tessellate_sphere(level).unwrap();
            let (v, f) = expected_counts(level as u32).unwrap();
            assert_eq!(mesh.vertex_count(), v, "vertices at level {level}");
            assert_eq!(mesh.triangle_count(), f, "faces at level {level}");
            assert_eq!(f, 4 * 4usize.pow(level as u32));
        }
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        for level in 0..=5 {
            let mesh = tessellate_sphere(level).unwrap();
            for pos in &mesh.vertices {
                let len = pos.length();
                assert!(
                    (len - 1.0).abs() < 1e-5,
                    "vertex not on unit sphere at level {level}: length = {len}"
                );
            }
        }
    }

    #[test]
    fn test_indices_valid_and_distinct() {
        let mesh = tessellate_sphere(4).unwrap();
        let n = mesh.vertex_count() as u32;
        assert_eq!(mesh.indices.len() % 3, 0);
        for [a, b, c] in mesh.triangles() {
            assert!(a < n && b < n && c < n, "index out of bounds (n = {n})");
            assert!(a != b && b != c && c != a, "degenerate triangle ({a}, {b}, {c})");
        }
    }

    #[test]
    fn test_mesh_is_watertight() {
        // Closed 2-manifold of genus 0: V - E + F = 2 and every edge is shared twice.
        for level in 0..=4 {
            let mesh = tessellate_sphere(level).unwrap();
            let v = mesh.vertex_count() as i64;
            let e = mesh.edge_count() as i64;
            let f = mesh.triangle_count() as i64;
            assert_eq!(v - e + f, 2, "Euler characteristic at level {level}");
            assert_eq!(2 * e, 3 * f, "open edges at level {level}");
        }
    }

    #[test]
    fn test_no_duplicate_positions() {
        let mesh = tessellate_sphere(3).unwrap();
        for (i, a) in mesh.vertices.iter().enumerate() {
            for b in &mesh.vertices[i + 1..] {
                assert!(a.distance(*b) > 1e-4, "duplicate vertex at {a}");
            }
        }
    }

    #[test]
    fn test_winding_stays_outward() {
        let mesh = tessellate_sphere(3).unwrap();
        for [a, b, c] in mesh.triangles() {
            let (pa, pb, pc) = (
                mesh.vertices[a as usize],
                mesh.vertices[b as usize],
                mesh.vertices[c as usize],
            );
            let normal = (pb - pa).cross(pc - pa);
            assert!(normal.dot(pa + pb + pc) > 0.0);
        }
    }

    #[test]
    fn test_base_vertices_stable_across_levels() {
        let base = tessellate_sphere(0).unwrap();
        let fine = tessellate_sphere(5).unwrap();
        assert_eq!(&fine.vertices[..4], &base.vertices[..]);
    }

    #[test]
    fn test_upload_byte_sizes() {
        let mesh = tessellate_sphere(2).unwrap();
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertex_count() * 24);
        assert_eq!(mesh.index_bytes().len(), mesh.indices.len() * 4);
        assert_eq!(mesh.to_vertices().len(), mesh.vertex_count());
    }

    #[test]
    fn test_expected_counts_large_levels() {
        // 4 · 4^30 overflows neither count on 64-bit targets.
        #[cfg(target_pointer_width = "64")]
        assert_eq!(expected_counts(30).map(|(_, f)| f), Some(1usize << 62));
        assert_eq!(expected_counts(31), None);
        assert_eq!(expected_counts(u32::MAX), None);
    }

    #[test]
    fn test_vertex_bytes_match_interleaved_layout() {
        let mesh = tessellate_sphere(1).unwrap();
        let vertices = mesh.to_vertices();
        let expected: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(mesh.vertex_bytes(), expected);
        // First vertex: position then normal, both equal to the corner.
        let first: Vec<f32> = mesh.vertex_bytes()[..24]
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        let p = mesh.vertices[0].to_array();
        assert_eq!(first, [p, p].concat());
    }

    #[test]
    fn test_tessellation_is_deterministic() {
        assert_eq!(tessellate_sphere(4).unwrap(), tessellate_sphere(4).unwrap());
    }
}
