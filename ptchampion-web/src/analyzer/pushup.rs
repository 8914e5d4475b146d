//! Push-up analyzer
//!
//! Primary angle: elbow (shoulder-elbow-wrist). Arms locked out put the
//! machine in `Down`, upper arms parallel to the floor put it in `Up`.
//! Peak: body held in a straight line (shoulder-hip-ankle) at the bottom.

use super::cycle::{AngleBand, Cues, Deductions, Observation, RepCycle};
use super::exercise::{ExerciseAnalyzer, ExerciseType};
use super::state::{AnalysisResult, ExerciseState};
use crate::config::AnalyzerConfig;
use crate::geometry::{average_angle, calculate_angle};
use crate::pose::*;

const CUES: Cues = Cues {
    reach_peak: "Keep your body straight!",
    missed_peak: "Body wasn't straight on last rep.",
    extend_fully: "Lock out your arms at the top!",
    landmarks_unclear: "Cannot see key landmarks (arms, hips, ankles) clearly.",
};

pub struct PushupAnalyzer {
    cycle: RepCycle,
    min_visibility: f32,
    body_alignment_min: f64,
}

impl PushupAnalyzer {
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    /// Build from an already validated configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let p = &config.pushup;
        Self {
            cycle: RepCycle::new(
                ExerciseType::Pushup,
                AngleBand {
                    down_threshold: p.down_threshold,
                    up_threshold: p.up_threshold,
                },
                Deductions {
                    extension: p.extension_deduction,
                    range: p.alignment_deduction,
                    incremental_ratio: config.incremental_ratio,
                },
                CUES,
            ),
            min_visibility: config.min_visibility,
            body_alignment_min: p.body_alignment_min,
        }
    }

    fn joint(&self, frame: &PoseFrame, a: usize, b: usize, c: usize) -> Option<f64> {
        calculate_angle(
            frame.landmark(a)?,
            frame.landmark(b)?,
            frame.landmark(c)?,
            self.min_visibility,
        )
    }

    fn observe(&self, frame: &PoseFrame) -> Option<Observation> {
        let angle = average_angle(
            self.joint(frame, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
            self.joint(frame, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
        )?;
        let body_line = average_angle(
            self.joint(frame, LEFT_SHOULDER, LEFT_HIP, LEFT_ANKLE),
            self.joint(frame, RIGHT_SHOULDER, RIGHT_HIP, RIGHT_ANKLE),
        )?;

        Some(Observation {
            angle,
            peak: body_line >= self.body_alignment_min,
        })
    }
}

impl Default for PushupAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExerciseAnalyzer for PushupAnalyzer {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Pushup
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
