// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Hierarchical animated cuboid models for voxel-game entity rendering.
//!
//! A [`model::Model`] is a tree of named parts. Each part carries a pose
//! (rotation, pivot and offset), a per-axis scale and a list of textured
//! box and plane primitives. Every frame the host drives the pose from
//! entity locomotion, then walks the tree into a matrix-stack
//! [`render::RenderTarget`].
//!
//! # Key entry points
//!
//! - [`model::Model`] - the part tree and its name index
//! - [`animation::PoseAnimator`] - locomotion-driven limb motion
//! - [`animation::PoseTransition`] - easing between poses
//! - [`render::RenderTarget`] - the matrix-stack sink a model renders into
//! - [`action::AnimationAction`] - document form of authored animations
//! - [`options::Options`] - texture and animation defaults (TOML)
//!
//! # Frame flow
//!
//! restore default pose, apply locomotion, optionally blend toward a
//! target pose, then render. Geometry is baked lazily on the first render
//! after a part's primitives change and reused until the next change.

pub mod action;
pub mod animation;
pub mod error;
pub mod geometry;
pub mod model;
pub mod options;
pub mod registry;
pub mod render;

pub use action::{ActionKind, AnimationAction};
pub use error::RigError;
pub use model::{Model, ModelNode, NodeId, Pose};
pub use registry::ModelRegistry;
pub use render::RenderTarget;
