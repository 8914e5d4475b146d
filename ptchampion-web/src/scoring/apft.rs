//! APFT point tables (Army Physical Fitness Test, 17-21 male bracket)
//!
//! Rep tables are indexed by rep count; anything past the end of a table
//! earns the maximum.

use crate::analyzer::ExerciseType;

/// Push-up points for 0..=68 reps
pub const PUSHUP_POINTS: [u32; 69] = [
    0, 1, 3, 4, 6, 7, 9, 10, 12, 13,
    15, 16, 18, 19, 21, 22, 24, 25, 26, 28,
    29, 31, 32, 34, 35, 37, 38, 40, 41, 43,
    44, 46, 47, 48, 50, 51, 53, 54, 56, 57,
    59, 60, 62, 63, 65, 66, 68, 69, 71, 72,
    74, 75, 76, 78, 79, 81, 82, 84, 85, 87,
    88, 90, 91, 93, 94, 96, 97, 99, 100,
];

/// Sit-up points for 0..=78 reps
pub const SITUP_POINTS: [u32; 79] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26, 27, 28, 29,
    30, 31, 32, 33, 34, 35, 36, 37, 38, 39,
    40, 41, 42, 43, 44, 45, 46, 47, 48, 49,
    50, 52, 58, 60, 62, 64, 66, 68, 70, 72,
    74, 76, 78, 80, 82, 84, 86, 88, 90, 91,
    92, 93, 94, 95, 96, 97, 98, 99, 100,
];

/// Pull-ups: 4 points per rep, 25 reps = 100
pub const PULLUP_POINTS: [u32; 26] = [
    0, 4, 8, 12, 16, 20, 24, 28, 32, 36,
    40, 44, 48, 52, 56, 60, 64, 68, 72, 76,
    80, 84, 88, 92, 96, 100,
];

/// Two-mile run: (seconds, points), 11:00 to 19:30 in 6 second steps
pub const RUN_POINTS: [(u32, u32); 86] = [
    (660, 100), (666, 99), (672, 98), (678, 96), (684, 95), (690, 94),
    (696, 93), (702, 92), (708, 91), (714, 89), (720, 88), (726, 87),
    (732, 86), (738, 85), (744, 84), (750, 82), (756, 81), (762, 80),
    (768, 79), (774, 78), (780, 76), (786, 75), (792, 74), (798, 73),
    (804, 72), (810, 71), (816, 69), (822, 68), (828, 67), (834, 66),
    (840, 64), (846, 63), (852, 62), (858, 61), (864, 60), (870, 59),
    (876, 57), (882, 56), (888, 55), (894, 54), (900, 53), (906, 51),
    (912, 50), (918, 49), (924, 48), (930, 47), (936, 45), (942, 44),
    (948, 43), (954, 42), (960, 41), (966, 39), (972, 38), (978, 37),
    (984, 36), (990, 35), (996, 33), (1002, 32), (1008, 31), (1014, 30),
    (1020, 29), (1026, 28), (1032, 27), (1038, 26), (1044, 24), (1050, 23),
    (1056, 22), (1062, 21), (1068, 20), (1074, 19), (1080, 18), (1086, 16),
    (1092, 15), (1098, 14), (1104, 13), (1110, 12), (1116, 11), (1122, 10),
    (1128, 9), (1134, 8), (1140, 6), (1146, 5), (1152, 4), (1158, 3),
    (1164, 2), (1170, 0),
];

fn lookup(table: &[u32], reps: u32) -> u32 {
    let last = table.len() - 1;
    table[(reps as usize).min(last)]
}

/// Points for a rep-counted event; `None` for running (use `running_score`)
pub fn score_reps(exercise: ExerciseType, reps: u32) -> Option<u32> {
    match exercise {
        ExerciseType::Pushup => Some(lookup(&PUSHUP_POINTS, reps)),
        ExerciseType::Situp => Some(lookup(&SITUP_POINTS, reps)),
        ExerciseType::Pullup => Some(lookup(&PULLUP_POINTS, reps)),
        ExerciseType::Running => None,
    }
}

/// Points for a two-mile time
///
/// Times between table rows score as the closest faster row, so 11:05
/// scores like 11:00.
pub fn running_score(seconds: u32) -> u32 {
    match RUN_POINTS.iter().rev().find(|(time, _)| *time <= seconds) {
        Some(&(_, points)) => points,
        // Faster than the fastest row
        None => RUN_POINTS[0].1,
    }
}

/// "48 reps → 71 points"
pub fn format_score_display(reps: u32, points: u32) -> String {
    format!("{} reps → {} points", reps, points)
}

/// "15:30 → 47 points"
pub fn format_running_score_display(seconds: u32, points: u32) -> String {
    format!("{}:{:02} → {} points", seconds / 60, seconds % 60, points)
}
