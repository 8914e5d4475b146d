//! Pull-up analyzer
//!
//! Primary angle: elbow (shoulder-elbow-wrist), averaged over both arms.
//! Peak: chin above the bar, approximated as nose above the shoulder line.

use super::cycle::{AngleBand, Cues, Deductions, Observation, RepCycle};
use super::exercise::{ExerciseAnalyzer, ExerciseType};
use super::state::{AnalysisResult, ExerciseState};
use crate::config::AnalyzerConfig;
use crate::geometry::{average_angle, calculate_angle};
use crate::pose::{
    PoseFrame, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_ELBOW, RIGHT_SHOULDER,
    RIGHT_WRIST,
};

const CUES: Cues = Cues {
    reach_peak: "Pull higher! Chin over bar.",
    missed_peak: "Chin didn't clear bar on last rep.",
    extend_fully: "Extend arms fully!",
    landmarks_unclear: "Cannot see key landmarks (elbows, shoulders, nose) clearly.",
};

pub struct PullupAnalyzer {
    cycle: RepCycle,
    min_visibility: f32,
}

impl PullupAnalyzer {
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Build from an already validated configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let p = &config.pullup;
        Self {
            cycle: RepCycle::new(
                ExerciseType::Pullup,
                AngleBand {
                    down_threshold: p.down_threshold,
                    up_threshold: p.up_threshold,
                },
                Deductions {
                    extension: p.extension_deduction,
                    range: p.chin_deduction,
                    incremental_ratio: config.incremental_ratio,
                },
                CUES,
            ),
            min_visibility: config.min_visibility,
        }
    }

    fn observe(&self, frame: &PoseFrame) -> Option<Observation> {
        let min = self.min_visibility;
        let arm = |shoulder, elbow, wrist| {
            calculate_angle(
                frame.landmark(shoulder)?,
                frame.landmark(elbow)?,
                frame.landmark(wrist)?,
                min,
            )
        };
        let angle = average_angle(
            arm(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
            arm(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
        )?;

        let nose = frame.visible(NOSE, min)?;
        let left_shoulder = frame.visible(LEFT_SHOULDER, min)?;
        let right_shoulder = frame.visible(RIGHT_SHOULDER, min)?;

        // Smaller y is higher on screen
        let shoulder_y = (left_shoulder.y + right_shoulder.y) / 2.0;
        Some(Observation {
            angle,
            peak: nose.y < shoulder_y,
        })
    }
}

impl Default for PullupAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseAnalyzer for PullupAnalyzer {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Pullup
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
