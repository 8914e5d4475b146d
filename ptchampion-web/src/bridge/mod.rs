//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod session_bridge;
mod scoring_bridge;

pub use session_bridge::{
    start_session,
    analyze_pose,
    stop_session,
    reset_session,
    is_person_lost,
};

pub use scoring_bridge::{apft_score, running_score};
