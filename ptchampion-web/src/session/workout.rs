//! One exercise session: an analyzer plus frame bookkeeping
//!
//! Tracks how long key landmarks have been unusable so the host can
//! tell the user to step back into frame.

use tracing::{info, warn};

use super::summary::WorkoutSummary;
use crate::analyzer::{create_analyzer, AnalysisResult, ExerciseAnalyzer, ExerciseState, ExerciseType};
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::pose::PoseFrame;

pub struct WorkoutSession {
    analyzer: Box<dyn ExerciseAnalyzer>,
    frames_analyzed: u64,
    invalid_frames: u64,
    /// Consecutive frames ending in `Invalid`
    invalid_streak: u32,
    last_result: Option<AnalysisResult>,
}

impl WorkoutSession {
    pub fn new(exercise: ExerciseType, config: &AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Ok(Self::from_analyzer(create_analyzer(exercise, config)?))
    }

    pub fn from_analyzer(analyzer: Box<dyn ExerciseAnalyzer>) -> Self {
        Self {
            analyzer,
            frames_analyzed: 0,
            invalid_frames: 0,
            invalid_streak: 0,
            last_result: None,
        }
    }

    pub fn exercise(&self) -> ExerciseType {
        self.analyzer.exercise()
    }

    pub fn analyzer(&self) -> &dyn ExerciseAnalyzer {
        self.analyzer.as_ref()
    }

    /// Start or resume; a fresh start also clears the frame bookkeeping
    pub fn start(&mut self) {
        if matches!(self.analyzer.state(), ExerciseState::Idle | ExerciseState::Finished) {
            self.clear_counters();
        }
        self.analyzer.start();
        info!(exercise = %self.exercise(), "session started");
    }

    pub fn reset(&mut self) {
        self.analyzer.reset();
        self.clear_counters();
    }

    /// Analyze one frame
    pub fn process(&mut self, frame: &PoseFrame) -> AnalysisResult {
        let result = self.analyzer.analyze(frame);
        self.frames_analyzed += 1;

        if result.state == ExerciseState::Invalid {
            self.invalid_frames += 1;
            self.invalid_streak = self.invalid_streak.saturating_add(1);
        } else {
            self.invalid_streak = 0;
        }

        self.last_result = Some(result.clone());
        result
    }

    /// True once `limit` consecutive frames were unusable (0 disables)
    pub fn person_lost(&self, limit: u32) -> bool {
        limit > 0 && self.invalid_streak >= limit
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn frames_analyzed(&self) -> u64 {
        self.frames_analyzed
    }

    pub fn invalid_frames(&self) -> u64 {
        self.invalid_frames
    }

    pub fn invalid_streak(&self) -> u32 {
        self.invalid_streak
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary::new(
            self.exercise(),
            self.analyzer.rep_count(),
            self.analyzer.form_score(),
            self.frames_analyzed,
            self.invalid_frames,
        )
    }

    /// Stop the analyzer and produce the summary to persist
    pub fn finish(&mut self) -> WorkoutSummary {
        self.analyzer.stop();
        let summary = self.summary();
        if summary.frames_analyzed > 0 && summary.invalid_frames == summary.frames_analyzed {
            warn!(exercise = %summary.exercise, "session finished without a usable frame");
        }
        info!(
            exercise = %summary.exercise,
            reps = summary.rep_count,
            form_score = summary.form_score,
            apft_score = summary.apft_score,
            "session finished"
        );
        summary
    }

    fn clear_counters(&mut self) {
        self.frames_analyzed = 0;
        self.invalid_frames = 0;
        self.invalid_streak = 0;
        self.last_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pullup_frame, with_all_visibility};

    fn session() -> WorkoutSession {
        let mut s = WorkoutSession::new(ExerciseType::Pullup, &AnalyzerConfig::default()).unwrap();
        s.start();
        s
    }

    #[test]
    fn test_counts_frames_and_reps() {
        let mut s = session();
        for _ in 0..2 {
            s.process(&pullup_frame(160.0, true));
            s.process(&pullup_frame(60.0, true));
        }
        s.process(&pullup_frame(160.0, true));
        assert_eq!(s.frames_analyzed(), 5);
        assert_eq!(s.last_result().unwrap().rep_count, 2);

        let summary = s.finish();
        assert_eq!(summary.rep_count, 2);
        assert_eq!(summary.apft_score, 8);
        assert_eq!(s.analyzer().state(), ExerciseState::Finished);
    }

    #[test]
    fn test_person_lost_after_streak() {
        let mut s = session();
        s.process(&pullup_frame(160.0, true));
        for _ in 0..3 {
            s.process(&PoseFrame::empty(640, 480));
        }
        assert!(s.person_lost(3));
        assert!(!s.person_lost(4));
        assert!(!s.person_lost(0));

        s.process(&pullup_frame(160.0, true));
        assert_eq!(s.invalid_streak(), 0);
        assert_eq!(s.invalid_frames(), 3);
        assert!(!s.person_lost(3));
    }

    #[test]
    fn test_low_visibility_counts_as_invalid() {
        let mut s = session();
        let r = s.process(&with_all_visibility(pullup_frame(160.0, true), 0.2));
        assert_eq!(r.state, ExerciseState::Invalid);
        assert_eq!(s.invalid_streak(), 1);
    }

    #[test]
    fn test_restart_after_finish_clears_everything() {
        let mut s = session();
        s.process(&pullup_frame(160.0, true));
        s.process(&pullup_frame(60.0, true));
        s.process(&pullup_frame(160.0, true));
        s.finish();

        s.start();
        assert_eq!(s.frames_analyzed(), 0);
        assert!(s.last_result().is_none());
        assert_eq!(s.summary().rep_count, 0);
    }

    #[test]
    fn test_running_has_no_session() {
        assert!(WorkoutSession::new(ExerciseType::Running, &AnalyzerConfig::default()).is_err());
    }
}
