//! Exercise state and per-frame result - shared by every analyzer

use serde::{Deserialize, Serialize};

/// Phase of the rep state machine
///
/// `Up`/`Down` name the angle band, not the body's direction: `Up` is
/// the flexed band (chin at the bar, torso raised, chest near the floor),
/// `Down` the extended band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseState {
    #[default]
    Idle,
    Starting,
    Up,
    Down,
    Finished,
    Invalid,
}

impl ExerciseState {
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseState::Idle => "IDLE",
            ExerciseState::Starting => "STARTING",
            ExerciseState::Up => "UP",
            ExerciseState::Down => "DOWN",
            ExerciseState::Finished => "FINISHED",
            ExerciseState::Invalid => "INVALID",
        }
    }
}

/// Snapshot returned from every `analyze()` call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Reps counted so far this session
    pub rep_count: u32,
    /// Cues produced by this frame only
    pub feedback: Vec<String>,
    /// State after this frame's transition
    pub state: ExerciseState,
    /// Mean visibility of all landmarks in the frame (0-1)
    pub confidence: f32,
    /// Starts at 100, only ever decreases, floored at 0
    pub form_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_serializes_lowercase() {
        let json = serde_json::to_string(&ExerciseState::Starting).unwrap();
        assert_eq!(json, "\"starting\"");
    }

    #[test]
    fn test_result_uses_camel_case() {
        let result = AnalysisResult {
            rep_count: 3,
            feedback: vec!["Rep 3 counted!".to_string()],
            state: ExerciseState::Down,
            confidence: 0.75,
            form_score: 95.0,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["repCount"], 3);
        assert_eq!(value["formScore"], 95.0);
        assert_eq!(value["state"], "down");
    }
}
