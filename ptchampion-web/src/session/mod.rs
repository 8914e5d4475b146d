//! Session module - workout session bookkeeping and summary
//!
//! Re-exports only. All logic in submodules.

mod workout;
mod summary;

pub use workout::WorkoutSession;
pub use summary::WorkoutSummary;
