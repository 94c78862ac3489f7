//! Lazily compiled, explicitly invalidated geometry.

use glam::{UVec2, Vec2};

use super::{CompiledGeometry, Primitive};

/// Inputs fixed into a compiled batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompileParams {
    /// Units per texel.
    pub scale: f32,
    /// Texture sheet size in texels, used to normalise UVs.
    pub texture_size: Vec2,
    /// Texture offset of the owning node, recorded on the batch.
    pub texture_offset: UVec2,
}

/// Owns a node's compiled geometry and tracks whether it is stale.
///
/// Starts dirty, so the first render always compiles. The only mutators are
/// [`invalidate`](Self::invalidate) and
/// [`compile_if_needed`](Self::compile_if_needed).
///
/// The scale and texture offset are baked in at compile time. Changing
/// either after the first render has no effect until the primitive list
/// changes again.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    compiled: Option<CompiledGeometry>,
    dirty: bool,
    compile_count: u32,
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryCache {
    /// Empty, dirty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            compiled: None,
            dirty: true,
            compile_count: 0,
        }
    }

    /// Mark the cached batch stale. The next
    /// [`compile_if_needed`](Self::compile_if_needed) rebuilds it.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the next render will recompile.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many times this cache has compiled.
    #[must_use]
    pub fn compile_count(&self) -> u32 {
        self.compile_count
    }

    /// The current batch, if one has been compiled.
    #[must_use]
    pub fn compiled(&self) -> Option<&CompiledGeometry> {
        self.compiled.as_ref()
    }

    /// Rebuild from `primitives` if dirty, then return the cached batch.
    pub fn compile_if_needed(
        &mut self,
        primitives: &[Primitive],
        params: CompileParams,
    ) -> &CompiledGeometry {
        let compiled = match self.compiled.take() {
            Some(existing) if !self.dirty => existing,
            _ => {
                let capacity = primitives.iter().map(Primitive::quad_count).sum();
                let mut quads = Vec::with_capacity(capacity);
                for primitive in primitives {
                    primitive.bake(params.scale, params.texture_size, &mut quads);
                }
                self.dirty = false;
                self.compile_count += 1;
                CompiledGeometry {
                    quads,
                    texture_offset: params.texture_offset,
                    scale: params.scale,
                }
            }
        };
        self.compiled.insert(compiled)
    }
}
