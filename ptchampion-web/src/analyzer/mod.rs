//! Analyzer module - rep counting state machines per exercise
//!
//! Re-exports only. All logic in submodules.

mod state;
mod exercise;
mod cycle;
mod pullup;
mod situp;
mod pushup;

pub use state::{AnalysisResult, ExerciseState};
pub use exercise::{create_analyzer, ExerciseAnalyzer, ExerciseType};
pub use cycle::{AngleBand, Cues, Deductions, Observation, RepCycle, NO_PERSON};
pub use pullup::PullupAnalyzer;
pub use situp::SitupAnalyzer;
pub use pushup::PushupAnalyzer;
