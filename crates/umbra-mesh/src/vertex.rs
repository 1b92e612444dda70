//! Interleaved GPU vertex format for sphere meshes.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |

use glam::Vec3;

/// A sphere vertex: position followed by its outward normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position on the unit sphere.
    pub position: [f32; 3],
    /// Outward unit normal.
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 24]);

impl SphereVertex {
    /// Vertex whose normal is its own position, valid on the unit sphere.
    pub fn new(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: position.to_array(),
        }
    }
}

/// Scalar layout of a single vertex attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexFormat {
    /// Three 32-bit floats.
    Float32x3,
}

impl VertexFormat {
    /// Size in bytes.
    pub const fn size(self) -> u64 {
        match self {
            Self::Float32x3 => 12,
        }
    }
}

/// Device-agnostic description of one vertex attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttributeDesc {
    /// Attribute format.
    pub format: VertexFormat,
    /// Byte offset within the vertex.
    pub offset: u64,
    /// Shader input location.
    pub shader_location: u32,
}

/// Byte stride between consecutive [`SphereVertex`] values.
pub const SPHERE_VERTEX_STRIDE: u64 = std::mem::size_of::<SphereVertex>() as u64;

/// Attributes covering all 24 bytes of [`SphereVertex`].
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttributeDesc; 2] = [
    VertexAttributeDesc {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttributeDesc {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
];
