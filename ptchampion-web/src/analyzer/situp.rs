//! Sit-up analyzer
//!
//! Primary angle: torso (shoulder-hip-knee) with the hip as vertex.
//! Lying back opens the angle past the down threshold; sitting up
//! closes it under the up threshold.

use super::cycle::{AngleBand, Cues, Deductions, Observation, RepCycle};
use super::exercise::{ExerciseAnalyzer, ExerciseType};
use super::state::{AnalysisResult, ExerciseState};
use crate::config::AnalyzerConfig;
use crate::geometry::{average_angle, calculate_angle};
use crate::pose::{PoseFrame, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER};

const CUES: Cues = Cues {
    reach_peak: "Sit up higher!",
    missed_peak: "Didn't sit up fully on last rep.",
    extend_fully: "Lie further back!",
    landmarks_unclear: "Cannot see key landmarks (shoulders, hips, knees) clearly.",
};

pub struct SitupAnalyzer {
    cycle: RepCycle,
    min_visibility: f32,
    up_threshold: f64,
}

impl SitupAnalyzer {
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Build from an already validated configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let s = &config.situp;
        Self {
            cycle: RepCycle::new(
                ExerciseType::Situp,
                AngleBand {
                    down_threshold: s.down_threshold,
                    up_threshold: s.up_threshold,
                },
                // One range-of-motion deduction covers both ends
                Deductions {
                    extension: s.range_deduction,
                    range: s.range_deduction,
                    incremental_ratio: config.incremental_ratio,
                },
                CUES,
            ),
            min_visibility: config.min_visibility,
            up_threshold: s.up_threshold,
        }
    }

    fn observe(&self, frame: &PoseFrame) -> Option<Observation> {
        let torso = |shoulder, hip, knee| {
            calculate_angle(
                frame.landmark(shoulder)?,
                frame.landmark(hip)?,
                frame.landmark(knee)?,
                self.min_visibility,
            )
        };
        let angle = average_angle(
            torso(LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE),
            torso(RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE),
        )?;

        Some(Observation {
            angle,
            peak: angle <= self.up_threshold,
        })
    }
}

impl Default for SitupAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseAnalyzer for SitupAnalyzer {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Situp
    }

    fn analyze(&mut self, frame: &PoseFrame) -> AnalysisResult {
        if frame.is_empty() {
            return self.cycle.no_person();
        }
        match self.observe(frame) {
            Some(obs) => self.cycle.advance(obs, frame.confidence()),
            None => self.cycle.unclear(frame.confidence()),
        }
    }

    fn reset(&mut self) {
        self.cycle.reset();
    }

    fn start(&mut self) {
        self.cycle.start();
    }

    fn stop(&mut self) {
        self.cycle.stop();
    }

    fn rep_count(&self) -> u32 {
        self.cycle.rep_count()
    }

    fn state(&self) -> ExerciseState {
        self.cycle.state()
    }

    fn form_score(&self) -> f64 {
        self.cycle.form_score()
    }
}
