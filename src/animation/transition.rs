//! Incremental blending from one pose toward another.
//!
//! Each step moves the current pose by `elapsed / duration` of the
//! *remaining* distance, so calling it every tick with a constant duration
//! eases out: large moves first, then ever smaller ones.

use crate::error::RigError;
use crate::model::Pose;
use crate::options::AnimationOptions;

impl Pose {
    /// Move every field `elapsed / duration` of the way toward `to`,
    /// writing the result back into `self`.
    ///
    /// `duration` must be positive. Use [`PoseTransition`] to validate it
    /// once up front.
    pub fn transition_towards(&mut self, to: &Pose, elapsed: f32, duration: f32) {
        let t = elapsed / duration;
        self.rotation = self.rotation * (1.0 - t) + to.rotation * t;
        self.pivot = self.pivot * (1.0 - t) + to.pivot * t;
        self.offset = self.offset * (1.0 - t) + to.offset * t;
    }
}

/// A transition with a validated duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTransition {
    duration: f32,
}

impl PoseTransition {
    /// Transition lasting `duration` time units (usually ticks).
    ///
    /// # Errors
    ///
    /// Returns [`RigError::InvalidDuration`] unless `duration` is finite and
    /// positive.
    pub fn new(duration: f32) -> Result<Self, RigError> {
        if duration.is_finite() && duration > 0.0 {
            Ok(Self { duration })
        } else {
            Err(RigError::InvalidDuration(duration))
        }
    }

    /// Transition lasting the configured default number of ticks.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::InvalidDuration`] for a non-positive tick count.
    pub fn from_options(options: &AnimationOptions) -> Result<Self, RigError> {
        Self::new(options.transition_ticks)
    }

    /// The validated duration.
    #[must_use]
    pub fn duration(self) -> f32 {
        self.duration
    }

    /// Advance `from` toward `to` by `elapsed`.
    pub fn step(self, from: &mut Pose, to: &Pose, elapsed: f32) {
        from.transition_towards(to, elapsed, self.duration);
    }
}
