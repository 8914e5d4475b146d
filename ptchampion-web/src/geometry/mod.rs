//! Geometry module - stateless joint geometry
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{
    average_angle,
    calculate_angle,
    calculate_horizontal_alignment,
    calculate_vertical_alignment,
};
