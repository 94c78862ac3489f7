//! Node geometry: primitive descriptors, baked quads and the per-node
//! compiled-geometry cache.
//!
//! A node's primitives are described in local, pre-transform space, so the
//! baked result stays valid across any number of pose changes. Only
//! changing the primitive list invalidates it.

mod cache;
mod primitive;

pub use cache::{CompileParams, GeometryCache};
use glam::UVec2;
pub use primitive::{Cuboid, Primitive, TexturedPlane};

/// Vertex layout handed to the host for upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in node-local space, already multiplied by the render scale.
    pub position: [f32; 3],
    /// Normalised texture coordinate.
    pub uv: [f32; 2],
    /// Face normal.
    pub normal: [f32; 3],
}

/// Four vertices in winding order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    /// Corners of the quad.
    pub vertices: [Vertex; 4],
}

/// Render-ready batch baked from a node's primitive list.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledGeometry {
    quads: Vec<Quad>,
    texture_offset: UVec2,
    scale: f32,
}

impl CompiledGeometry {
    /// Baked quads in primitive order.
    #[must_use]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Number of quads in the batch.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Whether the batch has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Texture offset of the owning node at the time of compilation.
    #[must_use]
    pub fn texture_offset(&self) -> UVec2 {
        self.texture_offset
    }

    /// Render scale the positions were multiplied by.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Iterate every vertex in quad order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.quads.iter().flat_map(|q| q.vertices.iter())
    }
}
