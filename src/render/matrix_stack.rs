//! CPU matrix stack that bakes drawn geometry into world-space vertices.
//!
//! Lets a host without a fixed-function pipeline render a model into a
//! single vertex buffer per frame and upload it in one go.

use glam::{Mat3, Mat4, Vec3};

use super::RenderTarget;
use crate::geometry::{CompiledGeometry, Vertex};

/// glam-backed [`RenderTarget`].
///
/// Starts with the identity (or a caller-supplied base) matrix. `draw`
/// transforms every vertex of the batch by the current matrix and appends
/// it to an internal buffer.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
    vertices: Vec<Vertex>,
    draw_calls: usize,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Stack holding only the identity matrix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base(Mat4::IDENTITY)
    }

    /// Stack whose bottom matrix is `base` (e.g. the entity's world
    /// transform).
    #[must_use]
    pub fn with_base(base: Mat4) -> Self {
        Self {
            stack: vec![base],
            vertices: Vec::new(),
            draw_calls: 0,
        }
    }

    /// The current matrix.
    #[must_use]
    pub fn current(&self) -> Mat4 {
        self.stack.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Number of pushed matrices above the base.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Vertices baked so far this frame.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Baked vertices as raw bytes, ready for a GPU upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of `draw` calls so far this frame.
    #[must_use]
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Drop baked vertices and reset the stack to its base matrix.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
        self.vertices.clear();
        self.draw_calls = 0;
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        if self.stack.is_empty() {
            self.stack.push(Mat4::IDENTITY);
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }
}

impl RenderTarget for MatrixStack {
    fn push_matrix(&mut self) {
        let current = self.current();
        self.stack.push(current);
    }

    fn pop_matrix(&mut self) {
        if self.stack.len() > 1 {
            let _ = self.stack.pop();
        } else {
            log::warn!("pop_matrix would remove the base matrix; ignored");
        }
    }

    fn translate(&mut self, translation: Vec3) {
        let top = self.top_mut();
        *top *= Mat4::from_translation(translation);
    }

    fn rotate(&mut self, degrees: f32, axis: Vec3) {
        let top = self.top_mut();
        *top *= Mat4::from_axis_angle(axis.normalize(), degrees.to_radians());
    }

    fn scale(&mut self, scale: Vec3) {
        let top = self.top_mut();
        *top *= Mat4::from_scale(scale);
    }

    fn draw(&mut self, geometry: &CompiledGeometry) {
        let transform = self.current();
        let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();
        self.vertices.reserve(geometry.quad_count() * 4);
        for vertex in geometry.vertices() {
            let position =
                transform.transform_point3(Vec3::from_array(vertex.position));
            let normal = (normal_matrix * Vec3::from_array(vertex.normal))
                .normalize_or_zero();
            self.vertices.push(Vertex {
                position: position.to_array(),
                uv: vertex.uv,
                normal: normal.to_array(),
            });
        }
        self.draw_calls += 1;
    }
}
