//! Exercise types and the analyzer contract

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::state::{AnalysisResult, ExerciseState};
use super::{PullupAnalyzer, PushupAnalyzer, SitupAnalyzer};
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::pose::PoseFrame;

/// Exercises PT Champion records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Pushup,
    Situp,
    Pullup,
    Running,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Pushup => "pushup",
            ExerciseType::Situp => "situp",
            ExerciseType::Pullup => "pullup",
            ExerciseType::Running => "running",
        }
    }

    /// Running is timed from GPS/watch data, not counted from pose
    pub fn is_pose_tracked(&self) -> bool {
        !matches!(self, ExerciseType::Running)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = AnalyzerError;

    /// Accepts the spellings the clients use: "pushup", "push-up", "Push_Ups", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.trim_end_matches('s') {
            "pushup" => Ok(ExerciseType::Pushup),
            "situp" => Ok(ExerciseType::Situp),
            "pullup" => Ok(ExerciseType::Pullup),
            "run" | "running" => Ok(ExerciseType::Running),
            _ => Err(AnalyzerError::UnknownExercise(s.to_string())),
        }
    }
}

/// Per-exercise rep counting state machine
///
/// Instances own mutable session state and are driven from a single
/// frame-processing loop; callers serialize access.
pub trait ExerciseAnalyzer {
    fn exercise(&self) -> ExerciseType;

    /// Advance by one frame. Never fails: unusable frames yield `Invalid`.
    fn analyze(&mut self, frame: &PoseFrame) -> AnalysisResult;

    /// Zero counters, restore the form score and return to `Idle`
    fn reset(&mut self);

    /// Reset when idle or finished; no-op mid-session
    fn start(&mut self);

    /// Force `Finished`. Idempotent.
    fn stop(&mut self);

    fn rep_count(&self) -> u32;

    fn state(&self) -> ExerciseState;

    fn form_score(&self) -> f64;
}

/// Build the analyzer for `exercise` from a validated configuration
pub fn create_analyzer(
    exercise: ExerciseType,
    config: &AnalyzerConfig,
) -> Result<Box<dyn ExerciseAnalyzer>, AnalyzerError> {
    config.validate()?;
    match exercise {
        ExerciseType::Pushup => Ok(Box::new(PushupAnalyzer::from_config(config))),
        ExerciseType::Situp => Ok(Box::new(SitupAnalyzer::from_config(config))),
        ExerciseType::Pullup => Ok(Box::new(PullupAnalyzer::from_config(config))),
        ExerciseType::Running => Err(AnalyzerError::NotPoseTracked(exercise)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_spellings() {
        assert_eq!("pushup".parse::<ExerciseType>().unwrap(), ExerciseType::Pushup);
        assert_eq!("Push-Ups".parse::<ExerciseType>().unwrap(), ExerciseType::Pushup);
        assert_eq!("sit_up".parse::<ExerciseType>().unwrap(), ExerciseType::Situp);
        assert_eq!(" pullups ".parse::<ExerciseType>().unwrap(), ExerciseType::Pullup);
        assert_eq!("running".parse::<ExerciseType>().unwrap(), ExerciseType::Running);
        assert!(matches!(
            "burpee".parse::<ExerciseType>(),
            Err(AnalyzerError::UnknownExercise(_))
        ));
    }

    #[test]
    fn test_factory_builds_pose_tracked_only() {
        let config = AnalyzerConfig::default();
        for exercise in [ExerciseType::Pushup, ExerciseType::Situp, ExerciseType::Pullup] {
            let analyzer = create_analyzer(exercise, &config).unwrap();
            assert_eq!(analyzer.exercise(), exercise);
            assert_eq!(analyzer.state(), ExerciseState::Idle);
            assert_eq!(analyzer.form_score(), 100.0);
        }
        assert!(matches!(
            create_analyzer(ExerciseType::Running, &config),
            Err(AnalyzerError::NotPoseTracked(ExerciseType::Running))
        ));
    }

    #[test]
    fn test_factory_validates_config() {
        let mut config = AnalyzerConfig::default();
        config.incremental_ratio = 2.0;
        assert!(matches!(
            create_analyzer(ExerciseType::Situp, &config),
            Err(AnalyzerError::Config(_))
        ));
    }
}
