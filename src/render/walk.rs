use glam::Vec3;

use super::RenderTarget;
use crate::model::{Model, ModelNode, NodeId};

/// Translate and rotate into the node's local space.
fn apply_local_transform(
    node: &ModelNode,
    scale: f32,
    target: &mut impl RenderTarget,
) {
    target.translate(node.pose.offset);
    apply_pivot_rotation(node, scale, target);
}

/// Translate to the pivot, then rotate Z, Y, X. Zero angles are skipped.
fn apply_pivot_rotation(
    node: &ModelNode,
    scale: f32,
    target: &mut impl RenderTarget,
) {
    let pose = &node.pose;
    target.translate(pose.pivot * scale);
    if pose.rotation.z != 0.0 {
        target.rotate(pose.rotation.z.to_degrees(), Vec3::Z);
    }
    if pose.rotation.y != 0.0 {
        target.rotate(pose.rotation.y.to_degrees(), Vec3::Y);
    }
    if pose.rotation.x != 0.0 {
        target.rotate(pose.rotation.x.to_degrees(), Vec3::X);
    }
}

/// The transform a node hands to its children.
fn apply_child_space_transform(
    node: &ModelNode,
    scale: f32,
    target: &mut impl RenderTarget,
) {
    apply_local_transform(node, scale, target);
    if node.scale_children && node.is_scaled() {
        target.scale(node.scale);
    }
}

/// Pivot and rotation only, and nothing for a node that is not drawn.
fn apply_attachment_transform(
    node: &ModelNode,
    scale: f32,
    target: &mut impl RenderTarget,
) {
    if !node.hidden && node.shown {
        apply_pivot_rotation(node, scale, target);
    }
}

impl Model {
    /// Render every root node and its subtree at the model's render scale.
    pub fn render(&mut self, target: &mut impl RenderTarget) {
        let scale = self.render_scale();
        for index in 0..self.len() {
            let id = NodeId(index);
            if self[id].parent().is_none() {
                self.render_node(id, scale, target);
            }
        }
    }

    /// Render a node and its subtree. Hidden nodes are skipped entirely.
    ///
    /// Compiles the node's geometry first if its primitive list changed
    /// since the last compile.
    pub fn render_node(
        &mut self,
        id: NodeId,
        scale: f32,
        target: &mut impl RenderTarget,
    ) {
        self.render_subtree(id, scale, true, target);
    }

    /// Render a single node positioned within its ancestor chain.
    ///
    /// Pushes and applies one matrix per ancestor, root first, renders the
    /// node without its children, then pops once per ancestor. Ancestor
    /// geometry is not drawn.
    pub fn render_with_ancestors(
        &mut self,
        id: NodeId,
        scale: f32,
        target: &mut impl RenderTarget,
    ) {
        if self[id].hidden {
            return;
        }
        let chain = self.ancestors(id);
        for &ancestor in &chain {
            target.push_matrix();
            apply_child_space_transform(&self[ancestor], scale, target);
        }
        self.render_subtree(id, scale, false, target);
        for _ in &chain {
            target.pop_matrix();
        }
    }

    /// Apply the attachment transform of every ancestor and of the node
    /// itself, root first, without pushing or drawing.
    ///
    /// Leaves the current matrix at the node's pivot, rotated with the
    /// part, so the host can attach something (a held item, a particle
    /// emitter) to it. Only the pivot translation and the rotations are
    /// applied: pose offsets and scales are cosmetic and an attachment
    /// keeps its own size. Hidden or unshown nodes contribute nothing.
    pub fn apply_ancestor_transforms(
        &self,
        id: NodeId,
        scale: f32,
        target: &mut impl RenderTarget,
    ) {
        for ancestor in self.ancestors(id) {
            apply_attachment_transform(&self[ancestor], scale, target);
        }
        apply_attachment_transform(&self[id], scale, target);
    }

    fn render_subtree(
        &mut self,
        id: NodeId,
        scale: f32,
        with_children: bool,
        target: &mut impl RenderTarget,
    ) {
        let texture_size = self.texture_size().as_vec2();
        let node = &mut self[id];
        if node.hidden {
            return;
        }
        log::trace!("render '{}'", node.name());

        target.push_matrix();
        apply_local_transform(node, scale, target);
        let scaled = node.is_scaled();
        if scaled {
            target.scale(node.scale);
        }
        let shown = node.shown;
        let compiled = node.compile_geometry(scale, texture_size);
        if shown {
            target.draw(compiled);
        }

        if with_children {
            let node = &self[id];
            if scaled && !node.scale_children {
                target.pop_matrix();
                target.push_matrix();
                apply_local_transform(node, scale, target);
            }
            for i in 0..self[id].children().len() {
                let child = self[id].children()[i];
                self.render_subtree(child, scale, true, target);
            }
        }
        target.pop_matrix();
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::{UVec3, Vec3};

    use super::*;
    use crate::render::{CommandRecorder, RenderCommand};

    fn chain() -> (Model, NodeId, NodeId) {
        let mut model = Model::new();
        let root = model.add_node("root").unwrap();
        let child = model.add_node("child").unwrap();
        model.add_child(root, child);
        model[child].pose.pivot = Vec3::new(0.0, 1.0, 0.0);
        model[child].add_cuboid(Vec3::ZERO, UVec3::ONE, 0.0);
        (model, root, child)
    }

    #[test]
    fn zero_angles_emit_no_rotation() {
        let (mut model, _, child) = chain();
        let mut rec = CommandRecorder::new();
        model.render_with_ancestors(child, 1.0, &mut rec);

        assert!(!rec
            .commands()
            .iter()
            .any(|c| matches!(c, RenderCommand::Rotate { .. })));
        let pivot_translate = rec
            .commands()
            .iter()
            .position(|c| *c == RenderCommand::Translate(Vec3::Y))
            .unwrap();
        assert!(matches!(
            rec.commands()[pivot_translate + 1],
            RenderCommand::Draw { .. }
        ));
    }

    #[test]
    fn rotation_sits_between_pivot_and_draw() {
        let (mut model, _, child) = chain();
        model[child].pose.rotation.x = FRAC_PI_2;
        let mut rec = CommandRecorder::new();
        model.render_with_ancestors(child, 1.0, &mut rec);

        let cmds = rec.commands();
        let pivot = cmds
            .iter()
            .position(|c| *c == RenderCommand::Translate(Vec3::Y))
            .unwrap();
        match cmds[pivot + 1] {
            RenderCommand::Rotate { degrees, axis } => {
                assert!((degrees - 90.0).abs() < 1e-4);
                assert_eq!(axis, Vec3::X);
            }
            ref other => panic!("expected rotation, got {other:?}"),
        }
        assert!(matches!(cmds[pivot + 2], RenderCommand::Draw { .. }));
    }

    #[test]
    fn rotations_apply_z_then_y_then_x() {
        let mut model = Model::new();
        let id = model.add_node("spin").unwrap();
        model[id].pose.rotation = Vec3::new(0.1, 0.2, 0.3);
        let mut rec = CommandRecorder::new();
        model.render_node(id, 1.0, &mut rec);

        let axes: Vec<Vec3> = rec
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Rotate { axis, .. } => Some(*axis),
                _ => None,
            })
            .collect();
        assert_eq!(axes, vec![Vec3::Z, Vec3::Y, Vec3::X]);
    }

    #[test]
    fn hidden_node_emits_nothing() {
        let (mut model, root, _) = chain();
        model[root].hidden = true;
        let mut rec = CommandRecorder::new();
        model.render(&mut rec);
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn unshown_node_still_positions_children() {
        let (mut model, root, _) = chain();
        model[root].add_cuboid(Vec3::ZERO, UVec3::ONE, 0.0);
        model[root].shown = false;
        let mut rec = CommandRecorder::new();
        model.render(&mut rec);
        assert_eq!(rec.draw_count(), 1);
        assert_eq!(rec.depth(), 0);
    }

    #[test]
    fn scale_is_withheld_from_children_by_default() {
        let (mut model, root, _) = chain();
        model[root].set_scale(Vec3::splat(2.0));
        let mut rec = CommandRecorder::new();
        model.render(&mut rec);

        let cmds = rec.commands();
        let scale_at = cmds
            .iter()
            .position(|c| *c == RenderCommand::Scale(Vec3::splat(2.0)))
            .unwrap();
        // draw, then pop/push to rebuild the unscaled transform
        assert_eq!(cmds[scale_at + 2], RenderCommand::Pop);
        assert_eq!(cmds[scale_at + 3], RenderCommand::Push);
        assert_eq!(
            cmds.iter()
                .filter(|c| matches!(c, RenderCommand::Scale(_)))
                .count(),
            1
        );
        assert_eq!(rec.depth(), 0);
    }

    #[test]
    fn scale_children_keeps_the_scaled_matrix() {
        let (mut model, root, _) = chain();
        model[root].set_scale(Vec3::splat(2.0));
        model[root].set_scale_children(true);
        let mut rec = CommandRecorder::new();
        model.render(&mut rec);
        let pops = rec
            .commands()
            .iter()
            .filter(|c| **c == RenderCommand::Pop)
            .count();
        assert_eq!(pops, 2);
    }

    #[test]
    fn post_render_transforms_do_not_push() {
        let (model, _, child) = chain();
        let mut rec = CommandRecorder::new();
        model.apply_ancestor_transforms(child, 1.0, &mut rec);
        assert_eq!(
            rec.commands(),
            &[
                RenderCommand::Translate(Vec3::ZERO),
                RenderCommand::Translate(Vec3::Y),
            ]
        );
    }

    #[test]
    fn post_render_ignores_offset_and_scale() {
        let (mut model, root, child) = chain();
        model[root].pose.offset = Vec3::new(0.0, 0.0, 3.0);
        model[root].set_scale(Vec3::splat(2.0));
        model[root].set_scale_children(true);
        model[child].pose.rotation.x = FRAC_PI_2;
        let mut rec = CommandRecorder::new();
        model.apply_ancestor_transforms(child, 0.5, &mut rec);

        let cmds = rec.commands();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[0], RenderCommand::Translate(Vec3::ZERO));
        assert_eq!(cmds[1], RenderCommand::Translate(Vec3::new(0.0, 0.5, 0.0)));
        assert!(matches!(cmds[2], RenderCommand::Rotate { axis, .. } if axis == Vec3::X));
    }

    #[test]
    fn post_render_skips_hidden_and_unshown_nodes() {
        let (mut model, root, child) = chain();
        model[root].pose.pivot = Vec3::new(5.0, 0.0, 0.0);
        model[root].hidden = true;
        let mut rec = CommandRecorder::new();
        model.apply_ancestor_transforms(child, 1.0, &mut rec);
        assert_eq!(rec.commands(), &[RenderCommand::Translate(Vec3::Y)]);

        model[root].hidden = false;
        model[child].shown = false;
        rec.clear();
        model.apply_ancestor_transforms(child, 1.0, &mut rec);
        assert_eq!(
            rec.commands(),
            &[RenderCommand::Translate(Vec3::new(5.0, 0.0, 0.0))]
        );
    }
}
