mod common;

use common::{pullup, situp, Pose};
use ptchampion_web::{
    AnalyzerConfig, AnalyzerError, ExerciseState, ExerciseType, FrameError, PoseFrame,
    WorkoutSession,
};

#[test]
fn test_session_summary_after_three_pullups() {
    let mut session = WorkoutSession::new(ExerciseType::Pullup, &AnalyzerConfig::default()).unwrap();
    session.start();

    session.process(&pullup(165.0, false));
    for _ in 0..3 {
        session.process(&pullup(60.0, true));
        session.process(&pullup(165.0, false));
    }
    session.process(&PoseFrame::empty(640, 480));

    let summary = session.finish();
    assert_eq!(summary.exercise, ExerciseType::Pullup);
    assert_eq!(summary.rep_count, 3);
    assert_eq!(summary.form_score, 100.0);
    assert_eq!(summary.apft_score, 12);
    assert_eq!(summary.frames_analyzed, 8);
    assert_eq!(summary.invalid_frames, 1);
    assert_eq!(session.analyzer().state(), ExerciseState::Finished);
}

#[test]
fn test_custom_config_from_json() {
    // Stricter sit-up band: 70° no longer counts as sitting up
    let config = AnalyzerConfig::from_json(r#"{ "situp": { "up_threshold": 60 } }"#).unwrap();
    let mut session = WorkoutSession::new(ExerciseType::Situp, &config).unwrap();
    session.start();

    for torso in [160.0, 70.0, 160.0] {
        session.process(&situp(torso));
    }
    assert_eq!(session.summary().rep_count, 0);

    for torso in [50.0, 160.0] {
        session.process(&situp(torso));
    }
    assert_eq!(session.summary().rep_count, 1);
}

#[test]
fn test_person_lost_signal() {
    let mut session = WorkoutSession::new(ExerciseType::Pullup, &AnalyzerConfig::default()).unwrap();
    session.start();
    session.process(&pullup(165.0, true));

    let hidden = Pose::new().visibility(0.05).frame();
    for _ in 0..10 {
        session.process(&hidden);
    }
    assert!(session.person_lost(10));

    session.process(&pullup(165.0, true));
    assert!(!session.person_lost(1));
}

#[test]
fn test_rejected_inputs() {
    assert!(matches!(
        WorkoutSession::new(ExerciseType::Running, &AnalyzerConfig::default()),
        Err(AnalyzerError::NotPoseTracked(ExerciseType::Running))
    ));
    assert!(matches!(
        "burpees".parse::<ExerciseType>(),
        Err(AnalyzerError::UnknownExercise(_))
    ));
    assert_eq!(
        PoseFrame::from_flat(&[0.5; 99], 640, 480).unwrap_err(),
        FrameError::BadLength { expected: 132, actual: 99 }
    );
}
