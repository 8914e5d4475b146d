//! Shared rep state machine
//!
//! Every exercise reduces a frame to one primary joint angle plus a
//! "peak reached" flag; this module owns the transitions, the rep
//! counter and the form score.

use tracing::{debug, info, warn};

use super::state::{AnalysisResult, ExerciseState};
use super::ExerciseType;

/// One frame reduced to what the state machine needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    /// Primary joint angle in degrees
    pub angle: f64,
    /// Exercise-specific top-of-rep condition holds this frame
    pub peak: bool,
}

/// Angle band driving transitions (`down_threshold > up_threshold`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleBand {
    pub down_threshold: f64,
    pub up_threshold: f64,
}

/// Full-size deductions; lingering cues charge `incremental_ratio` of them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Deductions {
    pub extension: f64,
    pub range: f64,
    pub incremental_ratio: f64,
}

/// Coaching text for each deduction point
#[derive(Clone, Copy, Debug)]
pub struct Cues {
    /// Peak not held on this `Up` frame
    pub reach_peak: &'static str,
    /// Left `Up` without ever reaching the peak
    pub missed_peak: &'static str,
    /// Not fully extended while in `Down`
    pub extend_fully: &'static str,
    /// Required landmarks missing or below the visibility floor
    pub landmarks_unclear: &'static str,
}

pub const NO_PERSON: &str = "No person detected or landmarks unclear.";

/// Rep counter with form scoring
///
/// Transitions depend only on the current state and the current
/// observation. The phase flags below are reset on every state change.
pub struct RepCycle {
    exercise: ExerciseType,
    band: AngleBand,
    deductions: Deductions,
    cues: Cues,

    state: ExerciseState,
    rep_count: u32,
    form_score: f64,
    feedback: Vec<String>,

    /// Peak condition held on some frame of the current `Up` phase
    peak_reached: bool,
    /// Lingering deduction already charged in the current state
    lingering_charged: bool,
}

impl RepCycle {
    pub fn new(exercise: ExerciseType, band: AngleBand, deductions: Deductions, cues: Cues) -> Self {
        Self {
            exercise,
            band,
            deductions,
            cues,
            state: ExerciseState::Idle,
            rep_count: 0,
            form_score: 100.0,
            feedback: Vec::new(),
            peak_reached: false,
            lingering_charged: false,
        }
    }

    pub fn state(&self) -> ExerciseState {
        self.state
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn form_score(&self) -> f64 {
        self.form_score
    }

    /// Cues from the most recent frame
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    /// Zero counters and return to `Idle`
    pub fn reset(&mut self) {
        self.state = ExerciseState::Idle;
        self.rep_count = 0;
        self.form_score = 100.0;
        self.feedback.clear();
        self.clear_phase();
    }

    /// Begin a session; resuming mid-session keeps counters
    pub fn start(&mut self) {
        if matches!(self.state, ExerciseState::Idle | ExerciseState::Finished) {
            self.reset();
        }
    }

    /// Force `Finished`, abandoning any rep in progress
    pub fn stop(&mut self) {
        if self.state != ExerciseState::Finished {
            info!(exercise = %self.exercise, reps = self.rep_count, "session stopped");
            self.set_state(ExerciseState::Finished);
        }
    }

    /// Frame with no person at all
    pub fn no_person(&mut self) -> AnalysisResult {
        self.feedback.clear();
        self.feedback.push(NO_PERSON.to_string());
        self.go_invalid();
        self.result(0.0)
    }

    /// Frame whose required landmarks could not be used
    pub fn unclear(&mut self, confidence: f32) -> AnalysisResult {
        self.feedback.clear();
        self.feedback.push(self.cues.landmarks_unclear.to_string());
        self.go_invalid();
        self.result(confidence)
    }

    /// Advance the state machine by one usable frame
    pub fn advance(&mut self, obs: Observation, confidence: f32) -> AnalysisResult {
        self.feedback.clear();
        let AngleBand { down_threshold, up_threshold } = self.band;
        let extended = obs.angle > down_threshold;
        let flexed = obs.angle < up_threshold;

        match self.state {
            ExerciseState::Idle | ExerciseState::Finished | ExerciseState::Invalid => {
                if extended {
                    self.set_state(ExerciseState::Starting);
                }
            }
            // Only reachable from full extension, so a rep never starts bent
            ExerciseState::Starting => {
                if flexed {
                    self.enter_up(obs.peak);
                }
            }
            ExerciseState::Up => {
                // The exiting frame is already extended; only flexed frames reach the peak
                if extended {
                    let peak_reached = self.peak_reached;
                    self.set_state(ExerciseState::Down);
                    if !peak_reached {
                        self.deduct(self.deductions.range);
                        self.cue(self.cues.missed_peak);
                    }
                    self.rep_count += 1;
                    info!(exercise = %self.exercise, rep = self.rep_count, form_score = self.form_score, "rep counted");
                    self.feedback.push(format!("Rep {} counted!", self.rep_count));
                } else {
                    self.peak_reached |= obs.peak;
                    if !obs.peak {
                        self.cue(self.cues.reach_peak);
                        self.linger(self.deductions.range);
                    }
                }
            }
            ExerciseState::Down => {
                if flexed {
                    self.enter_up(obs.peak);
                } else if !extended {
                    self.cue(self.cues.extend_fully);
                    self.linger(self.deductions.extension);
                }
            }
        }

        debug!(
            exercise = %self.exercise,
            angle = obs.angle,
            peak = obs.peak,
            state = self.state.name(),
            "frame analyzed"
        );
        self.result(confidence)
    }

    fn result(&self, confidence: f32) -> AnalysisResult {
        AnalysisResult {
            rep_count: self.rep_count,
            feedback: self.feedback.clone(),
            state: self.state,
            confidence,
            form_score: self.form_score,
        }
    }

    fn enter_up(&mut self, peak: bool) {
        self.set_state(ExerciseState::Up);
        self.peak_reached = peak;
    }

    fn go_invalid(&mut self) {
        if self.state != ExerciseState::Invalid {
            warn!(exercise = %self.exercise, from = self.state.name(), "key landmarks lost");
            self.set_state(ExerciseState::Invalid);
        }
    }

    fn set_state(&mut self, next: ExerciseState) {
        if next != self.state {
            debug!(exercise = %self.exercise, from = self.state.name(), to = next.name(), "state transition");
        }
        self.state = next;
        self.clear_phase();
    }

    fn clear_phase(&mut self) {
        self.peak_reached = false;
        self.lingering_charged = false;
    }

    fn cue(&mut self, text: &str) {
        self.feedback.push(text.to_string());
    }

    /// Incremental deduction, charged once per visit to a state
    fn linger(&mut self, full: f64) {
        if !self.lingering_charged {
            self.lingering_charged = true;
            self.deduct(full * self.deductions.incremental_ratio);
        }
    }

    fn deduct(&mut self, amount: f64) {
        self.form_score = (self.form_score - amount).max(0.0);
    }
}
