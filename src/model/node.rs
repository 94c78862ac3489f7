//! A single rigid part of a model.

use glam::{UVec2, UVec3, Vec2, Vec3};

use crate::geometry::{
    CompileParams, CompiledGeometry, Cuboid, GeometryCache, Primitive,
    TexturedPlane,
};

/// Index of a node inside its owning [`Model`](super::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the model's arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The animatable transform fields of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Euler angles in radians, applied Z, then Y, then X.
    pub rotation: Vec3,
    /// Point about which rotation and scale are applied, in texels.
    pub pivot: Vec3,
    /// Translation applied before the pivot, in render units.
    pub offset: Vec3,
}

/// One part of a hierarchical model.
///
/// The parent link is a plain [`NodeId`]; the parent's `children` list is
/// the ownership path. Nothing stops a caller from calling
/// [`set_parent`](Self::set_parent) on a node that is still listed under
/// another parent; keeping the two sides consistent is the caller's job
/// (use [`Model::add_child`](super::Model::add_child)).
#[derive(Debug, Clone)]
pub struct ModelNode {
    name: String,
    /// Current pose, mutated every frame by animation code.
    pub pose: Pose,
    /// Pose captured by [`snapshot_default_pose`](Self::snapshot_default_pose).
    pub default_pose: Pose,
    /// Per-axis scale of this part, applied after rotation.
    pub scale: Vec3,
    /// Whether [`scale`](Self::scale) also applies to children.
    pub scale_children: bool,
    /// Skip this node and its subtree entirely.
    pub hidden: bool,
    /// Draw this node's geometry. When false the node still contributes its
    /// transform to its children.
    pub shown: bool,
    texture_offset: UVec2,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    primitives: Vec<Primitive>,
    geometry: GeometryCache,
}

impl ModelNode {
    /// Node with identity pose, unit scale and no geometry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pose: Pose::default(),
            default_pose: Pose::default(),
            scale: Vec3::ONE,
            scale_children: false,
            hidden: false,
            shown: true,
            texture_offset: UVec2::ZERO,
            parent: None,
            children: Vec::new(),
            primitives: Vec::new(),
            geometry: GeometryCache::new(),
        }
    }

    /// The node's name, unique within its model.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // -- Hierarchy --

    /// The node's parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Set the parent link without touching any child list.
    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Children in insertion (draw) order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    // -- Geometry --

    /// Append a primitive. The cached geometry is rebuilt on the next render.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
        self.geometry.invalidate();
    }

    /// Append a box whose UV unwrap starts at the current texture offset.
    pub fn add_cuboid(&mut self, origin: Vec3, size: UVec3, inflate: f32) {
        let cuboid = Cuboid {
            origin,
            size,
            inflate,
            texture_offset: self.texture_offset,
            name: None,
        };
        self.add_primitive(cuboid);
    }

    /// Append a two-sided sprite quad at the current texture offset.
    pub fn add_textured_plane(&mut self, origin: Vec3, size: UVec2) {
        let plane = TexturedPlane {
            origin,
            size,
            texture_offset: self.texture_offset,
        };
        self.add_primitive(plane);
    }

    /// Primitives in insertion order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The node's geometry cache.
    #[must_use]
    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    /// Force the next render to recompile.
    pub fn invalidate_geometry(&mut self) {
        self.geometry.invalidate();
    }

    pub(crate) fn compile_geometry(
        &mut self,
        scale: f32,
        texture_size: Vec2,
    ) -> &CompiledGeometry {
        if self.geometry.is_dirty() {
            log::debug!(
                "compiling geometry for '{}' ({} primitives)",
                self.name,
                self.primitives.len()
            );
        }
        let params = CompileParams {
            scale,
            texture_size,
            texture_offset: self.texture_offset,
        };
        self.geometry.compile_if_needed(&self.primitives, params)
    }

    /// Texel origin used by primitives added from now on.
    #[must_use]
    pub fn texture_offset(&self) -> UVec2 {
        self.texture_offset
    }

    /// Set the texel origin for subsequently added primitives.
    ///
    /// Primitives already added keep their offset, and a batch that is
    /// already compiled keeps the offset it was compiled with. Configure the
    /// offset before adding primitives and before the first render.
    pub fn set_texture_offset(&mut self, offset: UVec2) {
        self.texture_offset = offset;
    }

    // -- Transform --

    /// Set the per-axis scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Whether the scale should also apply to children.
    pub fn set_scale_children(&mut self, scale_children: bool) {
        self.scale_children = scale_children;
    }

    /// Whether a non-unit scale is set.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        self.scale != Vec3::ONE
    }

    /// Copy the current pose into the default pose.
    pub fn snapshot_default_pose(&mut self) {
        self.default_pose = self.pose;
    }

    /// Overwrite the current pose with the default pose.
    pub fn restore_default_pose(&mut self) {
        self.pose = self.default_pose;
    }
}
