//! Hierarchical models: an arena of [`ModelNode`]s addressed by [`NodeId`].
//!
//! Children are owned through their parent's child list; the parent link
//! is a non-owning index, so the tree can be walked upward (for
//! [`Model::render_with_ancestors`]) without ownership cycles.

mod node;

use std::ops::{Index, IndexMut};

use glam::{UVec2, UVec3, Vec3};
pub use node::{ModelNode, NodeId, Pose};
use rustc_hash::FxHashMap;

use crate::animation::{PoseAnimator, PoseTransition};
use crate::error::RigError;
use crate::geometry::Cuboid;
use crate::options::Options;

/// A named tree of cuboid parts plus the per-model settings shared by
/// every node (texture sheet size, render scale, movement scale).
#[derive(Debug, Clone)]
pub struct Model {
    nodes: Vec<ModelNode>,
    names: FxHashMap<String, NodeId>,
    texture_offsets: FxHashMap<String, UVec2>,
    texture_size: UVec2,
    render_scale: f32,
    movement_scale: f32,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Empty model with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Empty model configured from `options`.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        Self {
            nodes: Vec::new(),
            names: FxHashMap::default(),
            texture_offsets: FxHashMap::default(),
            texture_size: UVec2::new(
                options.model.texture_width.max(1),
                options.model.texture_height.max(1),
            ),
            render_scale: options.model.render_scale,
            movement_scale: options.animation.movement_scale,
        }
    }

    // -- Nodes --

    /// Create a parentless node. Names must be unique within the model.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::DuplicateNode`] if `name` is already taken.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId, RigError> {
        if self.names.contains_key(name) {
            return Err(RigError::DuplicateNode(name.to_owned()));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(ModelNode::new(name));
        let _ = self.names.insert(name.to_owned(), id);
        log::debug!("added node '{name}' as #{}", id.0);
        Ok(id)
    }

    /// Append `child` to `parent`'s child list and point it at `parent`.
    ///
    /// Does not remove `child` from a previous parent's list.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].push_child(child);
        self.nodes[child.0].set_parent(Some(parent));
    }

    /// Look up a node by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Look up a node by name, failing if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownNode`] if no node has that name.
    pub fn node_id(&self, name: &str) -> Result<NodeId, RigError> {
        self.find(name)
            .ok_or_else(|| RigError::UnknownNode(name.to_owned()))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the model has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order with their ids.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &ModelNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Nodes without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes()
            .filter(|(_, n)| n.parent().is_none())
            .map(|(id, _)| id)
    }

    /// Ancestors of `id`, root first, excluding `id` itself.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.nodes[id.0].parent();
        while let Some(parent) = current {
            // A cycle can only come from misuse of `set_parent`.
            if chain.len() >= self.nodes.len() {
                log::warn!(
                    "parent chain of '{}' does not terminate",
                    self.nodes[id.0].name()
                );
                break;
            }
            chain.push(parent);
            current = self.nodes[parent.0].parent();
        }
        chain.reverse();
        chain
    }

    // -- Texture offsets --

    /// Texture sheet size in texels.
    #[must_use]
    pub fn texture_size(&self) -> UVec2 {
        self.texture_size
    }

    /// Register the unwrap origin for a named part (`"node.part"`).
    pub fn set_texture_offset(&mut self, part: &str, offset: UVec2) {
        if let Some(previous) = self.texture_offsets.insert(part.to_owned(), offset) {
            log::warn!(
                "texture offset for '{part}' replaced ({previous} -> {offset})"
            );
        }
    }

    /// Registered unwrap origin for a named part.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownTextureOffset`] if `part` was never registered.
    pub fn texture_offset(&self, part: &str) -> Result<UVec2, RigError> {
        self.texture_offsets
            .get(part)
            .copied()
            .ok_or_else(|| RigError::UnknownTextureOffset(part.to_owned()))
    }

    /// Add a box to `id` using the texture offset registered under
    /// `"{node name}.{part}"`.
    ///
    /// The node's texture offset is updated to the registered one, so
    /// primitives added afterwards continue from it.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownTextureOffset`] if no offset is registered
    /// for the part.
    pub fn add_named_cuboid(
        &mut self,
        id: NodeId,
        part: &str,
        origin: Vec3,
        size: UVec3,
    ) -> Result<(), RigError> {
        let name = format!("{}.{part}", self.nodes[id.0].name());
        let offset = self.texture_offset(&name)?;
        let node = &mut self.nodes[id.0];
        node.set_texture_offset(offset);
        node.add_primitive(Cuboid {
            origin,
            size,
            inflate: 0.0,
            texture_offset: offset,
            name: Some(name),
        });
        Ok(())
    }

    // -- Scale --

    /// Units per texel used by [`render`](Self::render).
    #[must_use]
    pub fn render_scale(&self) -> f32 {
        self.render_scale
    }

    /// Set the units per texel used by [`render`](Self::render).
    pub fn set_render_scale(&mut self, scale: f32) {
        self.render_scale = scale;
    }

    /// Multiplier on locomotion speed and degree.
    #[must_use]
    pub fn movement_scale(&self) -> f32 {
        self.movement_scale
    }

    /// Set the multiplier on locomotion speed and degree.
    pub fn set_movement_scale(&mut self, scale: f32) {
        self.movement_scale = scale;
    }

    /// Locomotion animator bound to this model's movement scale.
    #[must_use]
    pub fn animator(&self) -> PoseAnimator {
        PoseAnimator::new(self.movement_scale)
    }

    // -- Poses --

    /// Capture the current pose of every node as its default pose.
    pub fn snapshot_default_pose(&mut self) {
        for node in &mut self.nodes {
            node.snapshot_default_pose();
        }
    }

    /// Return every node to its default pose.
    pub fn restore_default_pose(&mut self) {
        for node in &mut self.nodes {
            node.restore_default_pose();
        }
    }

    /// Blend every node toward the same-named node of `target`.
    ///
    /// Fails without modifying anything if `target` lacks one of this
    /// model's nodes.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::UnknownNode`] naming the first unmatched node.
    pub fn transition_towards(
        &mut self,
        target: &Model,
        transition: PoseTransition,
        elapsed: f32,
    ) -> Result<(), RigError> {
        let targets = self
            .nodes
            .iter()
            .map(|node| target.node_id(node.name()).map(|id| target[id].pose))
            .collect::<Result<Vec<_>, _>>()?;
        for (node, to) in self.nodes.iter_mut().zip(&targets) {
            transition.step(&mut node.pose, to, elapsed);
        }
        Ok(())
    }
}

impl Index<NodeId> for Model {
    type Output = ModelNode;

    fn index(&self, id: NodeId) -> &ModelNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Model {
    fn index_mut(&mut self, id: NodeId) -> &mut ModelNode {
        &mut self.nodes[id.0]
    }
}
