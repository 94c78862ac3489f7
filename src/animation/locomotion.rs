//! Locomotion-driven limb motion.
//!
//! Every function here is driven by a [`Locomotion`]: a phase that grows
//! with distance travelled and a rate that tracks current speed. A standing
//! entity has rate 0, so all motion fades out without any extra bookkeeping.

use crate::model::ModelNode;

use super::tick::interpolate;

/// Distance-based animation clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Locomotion {
    /// Accumulated distance travelled (limb swing).
    pub phase: f32,
    /// Current speed, usually in [0, 1] (limb swing amount).
    pub rate: f32,
}

impl Locomotion {
    /// Locomotion at the given phase and rate.
    #[must_use]
    pub fn new(phase: f32, rate: f32) -> Self {
        Self { phase, rate }
    }

    /// Interpolate between the previous and current simulation tick.
    #[must_use]
    pub fn between(previous: Self, current: Self, partial_tick: f32) -> Self {
        Self {
            phase: interpolate(previous.phase, current.phase, partial_tick),
            rate: interpolate(previous.rate, current.rate, partial_tick),
        }
    }
}

/// Rotation axis a cyclic motion accumulates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Back and forth (legs, arms).
    X,
    /// Side to side (tails, heads).
    Y,
    /// Up and down about the forward axis (wings, ears).
    Z,
}

/// Parameters of a back-and-forth rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclicMotion {
    /// How fast the cycle runs per unit of phase.
    pub speed: f32,
    /// Peak rotation in radians at full rate.
    pub degree: f32,
    /// Negate the result (opposite limbs).
    pub invert: bool,
    /// Phase shift in radians.
    pub phase_offset: f32,
    /// Constant lean added in proportion to rate.
    pub weight: f32,
}

impl CyclicMotion {
    /// Motion with no inversion, offset or weight.
    #[must_use]
    pub fn new(speed: f32, degree: f32) -> Self {
        Self {
            speed,
            degree,
            invert: false,
            phase_offset: 0.0,
            weight: 0.0,
        }
    }

    /// Negate the rotation.
    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    /// Shift the cycle by `offset` radians.
    #[must_use]
    pub fn with_phase_offset(mut self, offset: f32) -> Self {
        self.phase_offset = offset;
        self
    }

    /// Lean toward one side in proportion to rate.
    #[must_use]
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }
}

/// Parameters of a vertical body bob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobMotion {
    /// How fast the bob runs per unit of phase.
    pub speed: f32,
    /// Peak displacement in texels at full rate.
    pub degree: f32,
    /// Sharp one-sided bounce instead of a smooth dip.
    pub bounce: bool,
}

impl BobMotion {
    /// Smooth dip-and-return bob.
    #[must_use]
    pub fn new(speed: f32, degree: f32) -> Self {
        Self {
            speed,
            degree,
            bounce: false,
        }
    }

    /// Switch to the bounce shape.
    #[must_use]
    pub fn bouncing(mut self) -> Self {
        self.bounce = true;
        self
    }
}

/// Applies locomotion functions to nodes, scaled by a model's movement
/// scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseAnimator {
    movement_scale: f32,
}

impl Default for PoseAnimator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PoseAnimator {
    /// Animator with the given movement scale.
    #[must_use]
    pub fn new(movement_scale: f32) -> Self {
        Self { movement_scale }
    }

    /// Multiplier on speed and degree.
    #[must_use]
    pub fn movement_scale(self) -> f32 {
        self.movement_scale
    }

    /// Rotation delta for `motion` at `loco`:
    /// `cos(p·speed·m + offset)·degree·m·r + weight·r`.
    #[must_use]
    pub fn rotation(self, motion: &CyclicMotion, loco: Locomotion) -> f32 {
        let m = self.movement_scale;
        let rotation = (loco.phase * (motion.speed * m) + motion.phase_offset)
            .cos()
            * (motion.degree * m)
            * loco.rate
            + motion.weight * loco.rate;
        if motion.invert {
            -rotation
        } else {
            rotation
        }
    }

    /// Add the cyclic rotation to the node's rotation about `axis`.
    pub fn cyclic_rotation(
        self,
        node: &mut ModelNode,
        axis: Axis,
        motion: &CyclicMotion,
        loco: Locomotion,
    ) {
        let delta = self.rotation(motion, loco);
        let rotation = &mut node.pose.rotation;
        match axis {
            Axis::X => rotation.x += delta,
            Axis::Y => rotation.y += delta,
            Axis::Z => rotation.z += delta,
        }
    }

    /// Swing back and forth about X. Legs and arms.
    pub fn walk(self, node: &mut ModelNode, motion: &CyclicMotion, loco: Locomotion) {
        self.cyclic_rotation(node, Axis::X, motion, loco);
    }

    /// Swing up and down about Z. Wings and ears.
    pub fn flap(self, node: &mut ModelNode, motion: &CyclicMotion, loco: Locomotion) {
        self.cyclic_rotation(node, Axis::Z, motion, loco);
    }

    /// Swing side to side about Y.
    pub fn swing(self, node: &mut ModelNode, motion: &CyclicMotion, loco: Locomotion) {
        self.cyclic_rotation(node, Axis::Y, motion, loco);
    }

    /// Vertical pivot delta for `motion` at `loco`. Never positive.
    #[must_use]
    pub fn bob_offset(self, motion: &BobMotion, loco: Locomotion) -> f32 {
        let degree = motion.degree * self.movement_scale;
        let speed = motion.speed * self.movement_scale;
        let wave = (loco.phase * speed).sin() * loco.rate * degree;
        if motion.bounce {
            -wave.abs()
        } else {
            wave - loco.rate * degree
        }
    }

    /// Add the bob to the node's vertical pivot.
    pub fn bob(self, node: &mut ModelNode, motion: &BobMotion, loco: Locomotion) {
        node.pose.pivot.y += self.bob_offset(motion, loco);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn near(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn walk_accumulates_on_x_only() {
        let animator = PoseAnimator::default();
        let mut leg = ModelNode::new("leg");
        let motion = CyclicMotion::new(1.0, 0.5);
        animator.walk(&mut leg, &motion, Locomotion::new(0.0, 1.0));
        assert!(near(leg.pose.rotation.x, 0.5));
        assert_eq!(leg.pose.rotation.y, 0.0);
        assert_eq!(leg.pose.rotation.z, 0.0);

        animator.walk(&mut leg, &motion, Locomotion::new(0.0, 1.0));
        assert!(near(leg.pose.rotation.x, 1.0));
    }

    #[test]
    fn flap_and_swing_pick_their_axes() {
        let animator = PoseAnimator::default();
        let mut wing = ModelNode::new("wing");
        let motion = CyclicMotion::new(1.0, 1.0);
        let loco = Locomotion::new(0.0, 1.0);
        animator.flap(&mut wing, &motion, loco);
        animator.swing(&mut wing, &motion, loco);
        assert!(near(wing.pose.rotation.z, 1.0));
        assert!(near(wing.pose.rotation.y, 1.0));
        assert_eq!(wing.pose.rotation.x, 0.0);
    }

    #[test]
    fn invert_negates() {
        let animator = PoseAnimator::default();
        let loco = Locomotion::new(0.3, 0.8);
        let motion = CyclicMotion::new(0.7, 0.4)
            .with_phase_offset(0.2)
            .with_weight(0.1);
        let forward = animator.rotation(&motion, loco);
        let backward = animator.rotation(&motion.inverted(), loco);
        assert!(near(forward, -backward));
    }

    #[test]
    fn weight_leans_in_proportion_to_rate() {
        let animator = PoseAnimator::default();
        let motion = CyclicMotion::new(1.0, 0.0).with_weight(0.5);
        assert!(near(animator.rotation(&motion, Locomotion::new(2.0, 0.5)), 0.25));
    }

    #[test]
    fn zero_degree_or_rate_is_identity() {
        let animator = PoseAnimator::default();
        let still = CyclicMotion::new(1.0, 0.0);
        assert_eq!(animator.rotation(&still, Locomotion::new(1.3, 1.0)), 0.0);

        let moving = CyclicMotion::new(1.0, 1.0).with_weight(0.3);
        assert_eq!(animator.rotation(&moving, Locomotion::new(1.3, 0.0)), 0.0);

        let mut body = ModelNode::new("body");
        animator.bob(&mut body, &BobMotion::new(1.0, 0.0), Locomotion::new(1.0, 1.0));
        assert_eq!(body.pose.pivot.y, 0.0);
    }

    #[test]
    fn movement_scale_shrinks_motion() {
        let full = PoseAnimator::new(1.0);
        let half = PoseAnimator::new(0.5);
        let motion = CyclicMotion::new(1.0, 1.0);
        let loco = Locomotion::new(0.0, 1.0);
        assert!(near(half.rotation(&motion, loco), full.rotation(&motion, loco) * 0.5));
    }

    #[test]
    fn bob_at_quarter_cycle_is_zero() {
        let animator = PoseAnimator::default();
        let mut body = ModelNode::new("body");
        body.pose.pivot.y = 12.0;
        animator.bob(&mut body, &BobMotion::new(1.0, 1.0), Locomotion::new(FRAC_PI_2, 1.0));
        assert!(near(body.pose.pivot.y, 12.0));
    }

    #[test]
    fn smooth_bob_never_rises() {
        let animator = PoseAnimator::default();
        let motion = BobMotion::new(1.3, 2.0);
        for step in 0..64 {
            let loco = Locomotion::new(step as f32 * PI / 16.0, 0.75);
            assert!(animator.bob_offset(&motion, loco) <= 1e-6);
        }
    }

    #[test]
    fn bounce_is_one_sided() {
        let animator = PoseAnimator::default();
        let motion = BobMotion::new(1.0, 2.0).bouncing();
        let down = animator.bob_offset(&motion, Locomotion::new(FRAC_PI_2, 1.0));
        let mirrored = animator.bob_offset(&motion, Locomotion::new(-FRAC_PI_2, 1.0));
        assert!(near(down, -2.0));
        assert!(near(mirrored, -2.0));
    }

    #[test]
    fn locomotion_interpolates_between_ticks() {
        let previous = Locomotion::new(10.0, 0.2);
        let current = Locomotion::new(11.0, 0.6);
        let mid = Locomotion::between(previous, current, 0.5);
        assert!(near(mid.phase, 10.5));
        assert!(near(mid.rate, 0.4));
    }
}
