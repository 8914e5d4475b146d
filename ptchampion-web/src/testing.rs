//! Synthetic pose frames for unit tests
//!
//! Joints are placed so the primary angle comes out exactly as requested.

use crate::pose::*;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn blank(visibility: f32) -> Vec<Landmark> {
    vec![Landmark::new(0.5, 0.5, 0.0, visibility); LANDMARK_COUNT]
}

fn place(lms: &mut [Landmark], index: usize, x: f32, y: f32) {
    lms[index].x = x;
    lms[index].y = y;
}

/// Both arms with the given elbow angle; shoulders at y = 0.3
fn arms(lms: &mut [Landmark], elbow_angle: f64) {
    let (sin, cos) = elbow_angle.to_radians().sin_cos();
    for (shoulder, elbow, wrist, x) in [
        (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, 0.4),
        (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, 0.6),
    ] {
        place(lms, shoulder, x, 0.3);
        place(lms, elbow, x, 0.45);
        // Rotate the elbow→shoulder ray (straight up) by the requested angle
        place(lms, wrist, x + 0.15 * sin as f32, 0.45 - 0.15 * cos as f32);
    }
}

pub fn pullup_frame(elbow_angle: f64, chin_above: bool) -> PoseFrame {
    let mut lms = blank(0.9);
    arms(&mut lms, elbow_angle);
    place(&mut lms, NOSE, 0.5, if chin_above { 0.2 } else { 0.4 });
    PoseFrame::new(lms, WIDTH, HEIGHT)
}

pub fn pushup_frame(elbow_angle: f64, straight_body: bool) -> PoseFrame {
    let mut lms = blank(0.9);
    arms(&mut lms, elbow_angle);
    for (hip, ankle, x) in [(LEFT_HIP, LEFT_ANKLE, 0.4), (RIGHT_HIP, RIGHT_ANKLE, 0.6)] {
        place(&mut lms, hip, x, 0.6);
        if straight_body {
            place(&mut lms, ankle, x, 0.9);
        } else {
            // Hips piked to a right angle
            place(&mut lms, ankle, x + 0.3, 0.6);
        }
    }
    PoseFrame::new(lms, WIDTH, HEIGHT)
}

pub fn situp_frame(torso_angle: f64) -> PoseFrame {
    let mut lms = blank(0.9);
    let (sin, cos) = torso_angle.to_radians().sin_cos();
    for (shoulder, hip, knee, x) in [
        (LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE, 0.4),
        (RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE, 0.6),
    ] {
        place(&mut lms, hip, x, 0.6);
        place(&mut lms, knee, x + 0.2, 0.6);
        // Rotate the hip→knee ray (pointing right) by the requested angle
        place(&mut lms, shoulder, x + 0.25 * cos as f32, 0.6 - 0.25 * sin as f32);
    }
    PoseFrame::new(lms, WIDTH, HEIGHT)
}

/// Copy of `frame` with the listed landmarks set to `visibility`
pub fn with_visibility(frame: PoseFrame, indices: &[usize], visibility: f32) -> PoseFrame {
    let (width, height) = frame.image_size();
    let mut lms = frame.landmarks().to_vec();
    for &i in indices {
        lms[i].visibility = visibility;
    }
    PoseFrame::new(lms, width, height)
}

/// Copy of `frame` with every landmark set to `visibility`
pub fn with_all_visibility(frame: PoseFrame, visibility: f32) -> PoseFrame {
    let all: Vec<usize> = (0..LANDMARK_COUNT).collect();
    with_visibility(frame, &all, visibility)
}
