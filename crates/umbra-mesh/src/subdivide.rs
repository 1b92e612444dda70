//! One 1-to-4 subdivision pass with shared-edge midpoint welding.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::sphere::SphereMesh;

/// Unordered edge between two vertex indices, stored as `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    /// Canonicalize an edge so `(a, b)` and `(b, a)` produce the same key.
    pub fn new(a: u32, b: u32) -> Self {
        if a < b { Self(a, b) } else { Self(b, a) }
    }

    /// Smaller endpoint index.
    pub fn lo(self) -> u32 {
        self.0
    }

    /// Larger endpoint index.
    pub fn hi(self) -> u32 {
        self.1
    }
}

/// Vertex arena for a single subdivision pass.
///
/// Starts as a verbatim copy of the parent vertices and grows by one vertex
/// per distinct edge. The edge map guarantees adjacent triangles share the
/// midpoint of their common edge.
#[derive(Debug)]
pub struct MidpointCache {
    vertices: Vec<Vec3>,
    midpoints: FxHashMap<EdgeKey, u32>,
}

impl MidpointCache {
    /// Seed the arena with the parent mesh vertices.
    ///
    /// `expected_edges` is only a capacity hint.
    pub fn new(parent: &[Vec3], expected_edges: usize) -> Self {
        let mut vertices = Vec::with_capacity(parent.len() + expected_edges);
        vertices.extend_from_slice(parent);
        let mut midpoints = FxHashMap::default();
        midpoints.reserve(expected_edges);
        Self {
            vertices,
            midpoints,
        }
    }

    /// Index of the unit-length midpoint of edge `(a, b)`, creating it on first use.
    pub fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = EdgeKey::new(a, b);
        if let Some(&idx) = self.midpoints.get(&key) {
            return idx;
        }

        let mid = 0.5 * (self.vertices[a as usize] + self.vertices[b as usize]);
        let len = mid.length();
        // Antipodal endpoints have no defined midpoint direction; keep the raw mean.
        let mid = if len > 0.0 { mid / len } else { mid };

        let idx = self.vertices.len() as u32;
        self.vertices.push(mid);
        self.midpoints.insert(key, idx);
        idx
    }

    /// Number of distinct edges split so far.
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Whether no edge has been split yet.
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }

    /// Release the grown vertex list, dropping the edge map.
    pub fn into_vertices(self) -> Vec<Vec3> {
        self.vertices
    }
}

/// Split every triangle of `mesh` into four.
///
/// For a triangle `(i0, i1, i2)` with edge midpoints `m01`, `m12`, `m20` the
/// output is `(i0, m01, m20)`, `(i1, m12, m01)`, `(i2, m20, m12)`,
/// `(m01, m12, m20)`, which keeps the parent's winding. The parent vertices
/// keep their indices.
pub fn subdivide(mesh: &SphereMesh) -> SphereMesh {
    // Closed triangle mesh: every edge is shared by exactly two faces.
    let expected_edges = mesh.indices.len() / 2;
    let mut cache = MidpointCache::new(&mesh.vertices, expected_edges);
    let mut indices = Vec::with_capacity(mesh.indices.len() * 4);

    for tri in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0], tri[1], tri[2]);
        let m01 = cache.midpoint(i0, i1);
        let m12 = cache.midpoint(i1, i2);
        let m20 = cache.midpoint(i2, i0);

        indices.extend_from_slice(&[i0, m01, m20]);
        indices.extend_from_slice(&[i1, m12, m01]);
        indices.extend_from_slice(&[i2, m20, m12]);
        indices.extend_from_slice(&[m01, m12, m20]);
    }

    SphereMesh {
        vertices: cache.into_vertices(),
        indices,
    }
}
