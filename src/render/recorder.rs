use glam::{UVec2, Vec3};

use super::RenderTarget;
use crate::geometry::CompiledGeometry;

/// One call made against a [`RenderTarget`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    /// `push_matrix`
    Push,
    /// `pop_matrix`
    Pop,
    /// `translate`
    Translate(Vec3),
    /// `rotate`
    Rotate {
        /// Angle in degrees.
        degrees: f32,
        /// Rotation axis.
        axis: Vec3,
    },
    /// `scale`
    Scale(Vec3),
    /// `draw`
    Draw {
        /// Quads in the submitted batch.
        quads: usize,
        /// Texture offset the batch was compiled with.
        texture_offset: UVec2,
    },
}

/// Render target that records every call instead of drawing.
///
/// Useful for inspecting the exact transform sequence a model produces.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<RenderCommand>,
    depth: usize,
    max_depth: usize,
}

impl CommandRecorder {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Pushes minus pops so far.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest nesting reached.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of `draw` calls.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Draw { .. }))
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.max_depth = 0;
    }
}

impl RenderTarget for CommandRecorder {
    fn push_matrix(&mut self) {
        self.commands.push(RenderCommand::Push);
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn pop_matrix(&mut self) {
        self.commands.push(RenderCommand::Pop);
        if self.depth == 0 {
            log::warn!("pop_matrix with an empty stack");
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn translate(&mut self, translation: Vec3) {
        self.commands.push(RenderCommand::Translate(translation));
    }

    fn rotate(&mut self, degrees: f32, axis: Vec3) {
        self.commands.push(RenderCommand::Rotate { degrees, axis });
    }

    fn scale(&mut self, scale: Vec3) {
        self.commands.push(RenderCommand::Scale(scale));
    }

    fn draw(&mut self, geometry: &CompiledGeometry) {
        self.commands.push(RenderCommand::Draw {
            quads: geometry.quad_count(),
            texture_offset: geometry.texture_offset(),
        });
    }
}
