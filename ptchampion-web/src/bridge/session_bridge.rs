//! Workout session JS bridge
//!
//! Holds the single active session. The host calls `analyze_pose` once per
//! MediaPipe result with a flat Float32Array of 132 values
//! (33 landmarks × x, y, z, visibility), or an empty array when no person
//! was found.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::analyzer::ExerciseType;
use crate::config::AnalyzerConfig;
use crate::pose::PoseFrame;
use crate::session::WorkoutSession;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Option<WorkoutSession>> = RefCell::new(None);
}

fn no_session() -> JsValue {
    JsValue::from_str("No active session. Call start_session first")
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Replace any current session with a new one for `exercise`
///
/// `config_json` overrides the default thresholds; missing fields keep
/// their defaults.
#[wasm_bindgen]
pub fn start_session(exercise: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let exercise: ExerciseType = exercise.parse()?;
    let config = match config_json.as_deref() {
        Some(json) if !json.trim().is_empty() => AnalyzerConfig::from_json(json)?,
        _ => AnalyzerConfig::default(),
    };

    let mut session = WorkoutSession::new(exercise, &config)?;
    session.start();

    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
    web_sys::console::log_1(&format!("✅ {} session started", exercise).into());
    Ok(())
}

/// Analyze one frame and return the `AnalysisResult` as a JS object
#[wasm_bindgen]
pub fn analyze_pose(data: &[f32], width: u32, height: u32) -> Result<JsValue, JsValue> {
    let frame = match PoseFrame::from_flat(data, width, height) {
        Ok(frame) => frame,
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            return Err(err.into());
        }
    };

    let result = SESSION.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(|session| session.process(&frame))
    });

    match result {
        Some(result) => Ok(serde_wasm_bindgen::to_value(&result)?),
        None => Err(no_session()),
    }
}

/// Finish the session and return its `WorkoutSummary`
///
/// The session stays loaded so a later `start_session` or
/// `reset_session` can reuse it.
#[wasm_bindgen]
pub fn stop_session() -> Result<JsValue, JsValue> {
    let summary = SESSION.with(|cell| cell.borrow_mut().as_mut().map(WorkoutSession::finish));

    match summary {
        Some(summary) => {
            web_sys::console::log_1(
                &format!("🏁 {}: {}", summary.exercise, summary.score_display()).into(),
            );
            Ok(serde_wasm_bindgen::to_value(&summary)?)
        }
        None => Err(no_session()),
    }
}

/// Zero the counters and score of the current session
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            session.reset();
            session.start();
        }
    });
}

/// True when `limit` consecutive frames had no usable person
#[wasm_bindgen]
pub fn is_person_lost(limit: u32) -> bool {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .is_some_and(|session| session.person_lost(limit))
    })
}
