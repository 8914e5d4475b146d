//! Scoring module - APFT point tables
//!
//! Re-exports only. All logic in submodules.

mod apft;

pub use apft::{
    format_running_score_display,
    format_score_display,
    running_score,
    score_reps,
    PULLUP_POINTS,
    PUSHUP_POINTS,
    RUN_POINTS,
    SITUP_POINTS,
};
