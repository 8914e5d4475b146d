//! Pose module - landmark types and per-frame container
//!
//! Re-exports only. All logic in submodules.

mod landmark;
mod frame;

pub use landmark::*;
pub use frame::{PoseFrame, FLAT_STRIDE};
