//! Render walk over a model's node tree.
//!
//! The host owns the transform stack and draw submission; the walk only
//! drives them through [`RenderTarget`]. Each node applies, inside its own
//! push/pop pair:
//!
//! 1. translate by the pose offset
//! 2. translate by the pivot times the render scale
//! 3. rotate Z, then Y, then X (degrees at this boundary, zero angles
//!    skipped)
//! 4. scale (skipped when all factors are 1.0)
//! 5. draw the cached geometry
//! 6. render children in insertion order
//!
//! When a node is scaled but does not pass its scale on, the matrix is
//! popped and rebuilt without step 4 before the children are rendered.

mod matrix_stack;
mod recorder;
mod walk;

use glam::Vec3;
pub use matrix_stack::MatrixStack;
pub use recorder::{CommandRecorder, RenderCommand};

use crate::geometry::CompiledGeometry;

/// Transform-stack and geometry-submission collaborator.
///
/// Mirrors a fixed-function matrix stack: every operation post-multiplies
/// the current matrix, so calls apply to geometry in reverse order.
pub trait RenderTarget {
    /// Duplicate the current matrix onto the stack.
    fn push_matrix(&mut self);
    /// Discard the current matrix, restoring the previous one.
    fn pop_matrix(&mut self);
    /// Post-multiply by a translation.
    fn translate(&mut self, translation: Vec3);
    /// Post-multiply by a rotation of `degrees` about `axis`.
    fn rotate(&mut self, degrees: f32, axis: Vec3);
    /// Post-multiply by a non-uniform scale.
    fn scale(&mut self, scale: Vec3);
    /// Submit a compiled batch under the current matrix.
    fn draw(&mut self, geometry: &CompiledGeometry);
}
