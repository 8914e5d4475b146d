//! APFT scoring JS bridge

use wasm_bindgen::prelude::*;

use crate::analyzer::ExerciseType;
use crate::error::AnalyzerError;
use crate::scoring;

/// Points for `reps` of a rep-counted exercise
#[wasm_bindgen]
pub fn apft_score(exercise: &str, reps: u32) -> Result<u32, JsValue> {
    let exercise: ExerciseType = exercise.parse()?;
    scoring::score_reps(exercise, reps)
        .ok_or_else(|| AnalyzerError::NotPoseTracked(exercise).into())
}

/// Points for a two-mile run time in seconds
#[wasm_bindgen]
pub fn running_score(seconds: u32) -> u32 {
    scoring::running_score(seconds)
}
