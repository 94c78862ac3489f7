//! Procedural pose animation.
//!
//! - [`locomotion`]: cyclic limb motion driven by distance travelled
//! - [`transition`]: incremental blending from one pose toward another
//! - [`tick`]: per-frame timing inputs supplied by the host

pub mod locomotion;
pub mod tick;
pub mod transition;

pub use locomotion::{Axis, BobMotion, CyclicMotion, Locomotion, PoseAnimator};
pub use tick::{FrameClock, FrameTick};
pub use transition::PoseTransition;
