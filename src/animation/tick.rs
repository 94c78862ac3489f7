//! Per-frame timing inputs.
//!
//! The host simulates at a fixed tick rate but renders as fast as it can.
//! Each frame it hands the renderer the real time since the last frame and
//! how far it is between the previous and the current simulation tick.

use web_time::Instant;

/// Length of a 60 Hz reference frame, in seconds.
const REFERENCE_FRAME_SECS: f32 = 1.0 / 60.0;

/// Changes smaller than this snap straight to the target in
/// [`update_value`].
const SNAP_THRESHOLD: f32 = 0.01;

/// Timing for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Real time since the previous frame, in seconds.
    pub elapsed: f32,
    /// Progress from the previous toward the current simulation tick, in
    /// [0, 1).
    pub partial_tick: f32,
}

impl FrameTick {
    /// Frame timing with `partial_tick` clamped into [0, 1).
    #[must_use]
    pub fn new(elapsed: f32, partial_tick: f32) -> Self {
        Self {
            elapsed: elapsed.max(0.0),
            partial_tick: partial_tick.clamp(0.0, 1.0 - f32::EPSILON),
        }
    }

    /// How many 60 Hz frames `elapsed` spans.
    #[must_use]
    pub fn reference_frames(self) -> f32 {
        self.elapsed / REFERENCE_FRAME_SECS
    }
}

/// Measures real time between frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Close the current frame and return its timing.
    pub fn tick(&mut self, partial_tick: f32) -> FrameTick {
        self.tick_at(Instant::now(), partial_tick)
    }

    /// Close the current frame at `now` and return its timing.
    pub fn tick_at(&mut self, now: Instant, partial_tick: f32) -> FrameTick {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        FrameTick::new(elapsed.as_secs_f32(), partial_tick)
    }
}

/// Linear interpolation between the previous and current tick values.
#[must_use]
pub fn interpolate(previous: f32, current: f32, partial_tick: f32) -> f32 {
    previous + (current - previous) * partial_tick
}

/// Interpolate an angle in degrees along the shorter way round.
///
/// Non-finite angles produce NaN.
#[must_use]
pub fn interpolate_rotation(previous: f32, current: f32, partial_tick: f32) -> f32 {
    let mut delta = (current - previous).rem_euclid(360.0);
    if delta >= 180.0 {
        delta -= 360.0;
    }
    previous + partial_tick * delta
}

/// Move `current` toward `target`, independent of frame rate.
///
/// After one reference frame the remaining gap is multiplied by `factor`,
/// so higher factors approach more slowly. Gaps within 0.01 snap to the
/// target.
#[must_use]
pub fn update_value(current: f32, target: f32, factor: f32, tick: FrameTick) -> f32 {
    let gap = target - current;
    if gap.abs() > SNAP_THRESHOLD {
        target - gap * factor.powf(tick.reference_frames())
    } else {
        target
    }
}
