//! Pose builders for integration tests
//!
//! Frames are assembled as the flat x, y, z, visibility array the browser
//! sends and decoded through `PoseFrame::from_flat`.

#![allow(dead_code)]

use ptchampion_web::pose::*;

pub struct Pose {
    lms: Vec<Landmark>,
}

impl Pose {
    pub fn new() -> Self {
        Self {
            lms: vec![Landmark::new(0.5, 0.5, 0.0, 0.9); LANDMARK_COUNT],
        }
    }

    pub fn at(mut self, index: usize, x: f32, y: f32) -> Self {
        self.lms[index].x = x;
        self.lms[index].y = y;
        self
    }

    pub fn visibility(mut self, visibility: f32) -> Self {
        for lm in &mut self.lms {
            lm.visibility = visibility;
        }
        self
    }

    /// Both elbows bent to `angle`, shoulders at y = 0.3
    pub fn arms(mut self, angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        for (s, e, w, x) in [
            (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, 0.4f32),
            (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, 0.6f32),
        ] {
            self = self
                .at(s, x, 0.3)
                .at(e, x, 0.45)
                .at(w, x + 0.15 * sin as f32, 0.45 - 0.15 * cos as f32);
        }
        self
    }

    pub fn flat(&self) -> Vec<f32> {
        self.lms
            .iter()
            .flat_map(|lm| [lm.x, lm.y, lm.z, lm.visibility])
            .collect()
    }

    pub fn frame(&self) -> PoseFrame {
        PoseFrame::from_flat(&self.flat(), 640, 480).unwrap()
    }
}

pub fn pullup(angle: f64, chin_above: bool) -> PoseFrame {
    Pose::new()
        .arms(angle)
        .at(NOSE, 0.5, if chin_above { 0.2 } else { 0.4 })
        .frame()
}

pub fn pushup(angle: f64) -> PoseFrame {
    Pose::new()
        .arms(angle)
        .at(LEFT_HIP, 0.4, 0.6)
        .at(RIGHT_HIP, 0.6, 0.6)
        .at(LEFT_ANKLE, 0.4, 0.9)
        .at(RIGHT_ANKLE, 0.6, 0.9)
        .frame()
}

/// Torso angle at the hips, knees out to the right
pub fn situp(torso: f64) -> PoseFrame {
    let (sin, cos) = torso.to_radians().sin_cos();
    let mut pose = Pose::new();
    for (s, h, k, x) in [
        (LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE, 0.4f32),
        (RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE, 0.6f32),
    ] {
        pose = pose
            .at(h, x, 0.6)
            .at(k, x + 0.2, 0.6)
            .at(s, x + 0.25 * cos as f32, 0.6 - 0.25 * sin as f32);
    }
    pose.frame()
}
