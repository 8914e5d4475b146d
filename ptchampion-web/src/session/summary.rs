//! End-of-session summary handed to the workout repository

use serde::{Deserialize, Serialize};

use crate::analyzer::ExerciseType;
use crate::scoring::{format_score_display, score_reps};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub exercise: ExerciseType,
    pub rep_count: u32,
    pub form_score: f64,
    /// APFT points for `rep_count`
    pub apft_score: u32,
    pub frames_analyzed: u64,
    pub invalid_frames: u64,
}

impl WorkoutSummary {
    pub fn new(
        exercise: ExerciseType,
        rep_count: u32,
        form_score: f64,
        frames_analyzed: u64,
        invalid_frames: u64,
    ) -> Self {
        Self {
            exercise,
            rep_count,
            form_score,
            apft_score: score_reps(exercise, rep_count).unwrap_or_default(),
            frames_analyzed,
            invalid_frames,
        }
    }

    /// Share of frames in which the key landmarks were usable (0-1)
    pub fn tracking_quality(&self) -> f64 {
        if self.frames_analyzed == 0 {
            return 0.0;
        }
        (self.frames_analyzed - self.invalid_frames) as f64 / self.frames_analyzed as f64
    }

    pub fn score_display(&self) -> String {
        format_score_display(self.rep_count, self.apft_score)
    }
}
