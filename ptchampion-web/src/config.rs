//! Analyzer configuration
//!
//! Tuning constants fixed at construction. Every field has a default so a
//! partial JSON document from the web client only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::analyzer::ExerciseType;
use crate::error::ConfigError;

/// Pull-up tuning: elbow angle band and form deductions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullupConfig {
    /// Elbow angle above which arms count as extended (dead hang)
    pub down_threshold: f64,
    /// Elbow angle below which arms count as flexed
    pub up_threshold: f64,
    pub extension_deduction: f64,
    pub chin_deduction: f64,
}

impl Default for PullupConfig {
    fn default() -> Self {
        Self {
            down_threshold: 150.0,
            up_threshold: 70.0,
            extension_deduction: 5.0,
            chin_deduction: 5.0,
        }
    }
}

/// Sit-up tuning: torso (shoulder-hip-knee) angle band
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitupConfig {
    /// Torso angle above which the user is lying back
    pub down_threshold: f64,
    /// Torso angle below which the user is sitting up
    pub up_threshold: f64,
    pub range_deduction: f64,
}

impl Default for SitupConfig {
    fn default() -> Self {
        Self {
            down_threshold: 140.0,
            up_threshold: 80.0,
            range_deduction: 5.0,
        }
    }
}

/// Push-up tuning: elbow angle band plus body line
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushupConfig {
    /// Elbow angle above which arms are locked out
    pub down_threshold: f64,
    /// Elbow angle at or below which upper arms are parallel to the floor
    pub up_threshold: f64,
    /// Minimum shoulder-hip-ankle angle for a straight body
    pub body_alignment_min: f64,
    pub extension_deduction: f64,
    pub alignment_deduction: f64,
}

impl Default for PushupConfig {
    fn default() -> Self {
        Self {
            down_threshold: 160.0,
            up_threshold: 90.0,
            body_alignment_min: 160.0,
            extension_deduction: 5.0,
            alignment_deduction: 5.0,
        }
    }
}

/// Full analyzer configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Landmark confidence floor below which a joint is unusable
    pub min_visibility: f32,
    /// Share of a full deduction charged while lingering short of a position
    pub incremental_ratio: f64,
    pub pushup: PushupConfig,
    pub situp: SitupConfig,
    pub pullup: PullupConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_visibility: 0.5,
            incremental_ratio: 0.1,
            pushup: PushupConfig::default(),
            situp: SitupConfig::default(),
            pullup: PullupConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(ConfigError::VisibilityOutOfRange(self.min_visibility));
        }
        if !(0.0..=1.0).contains(&self.incremental_ratio) {
            return Err(ConfigError::RatioOutOfRange(self.incremental_ratio));
        }

        let p = &self.pullup;
        check_band(ExerciseType::Pullup, p.down_threshold, p.up_threshold)?;
        check_deductions(ExerciseType::Pullup, &[p.extension_deduction, p.chin_deduction])?;

        let s = &self.situp;
        check_band(ExerciseType::Situp, s.down_threshold, s.up_threshold)?;
        check_deductions(ExerciseType::Situp, &[s.range_deduction])?;

        let u = &self.pushup;
        check_band(ExerciseType::Pushup, u.down_threshold, u.up_threshold)?;
        check_angle(ExerciseType::Pushup, u.body_alignment_min)?;
        check_deductions(ExerciseType::Pushup, &[u.extension_deduction, u.alignment_deduction])?;

        Ok(())
    }
}

fn check_angle(exercise: ExerciseType, value: f64) -> Result<(), ConfigError> {
    if (0.0..=180.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { exercise, value })
    }
}

fn check_band(exercise: ExerciseType, down: f64, up: f64) -> Result<(), ConfigError> {
    check_angle(exercise, down)?;
    check_angle(exercise, up)?;
    if down <= up {
        return Err(ConfigError::InvertedThresholds { exercise, down, up });
    }
    Ok(())
}

fn check_deductions(exercise: ExerciseType, values: &[f64]) -> Result<(), ConfigError> {
    match values.iter().find(|v| v.is_nan() || **v < 0.0) {
        Some(&value) => Err(ConfigError::NegativeDeduction { exercise, value }),
        None => Ok(()),
    }
}
