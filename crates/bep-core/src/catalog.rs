//! Pre-sampled waveform catalog, one fixed trace per signal kind
//!
//! Each trace covers x = 0..=380 at a 10 px step. The y values are the
//! hand-tuned sample shapes the playground replays; they are display data,
//! not physiological measurements.

use crate::point::Point;
use crate::signal::SignalKind;

/// Horizontal extent shared by every catalog trace
pub const X_SPAN: f32 = 380.0;

const fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// ECG: periodic QRS-like spikes over a steady baseline
pub const ECG_POINTS: [Point; 39] = [
    pt(0.0, 60.0),
    pt(10.0, 50.0),
    pt(20.0, 60.0),
    pt(30.0, 60.0),
    pt(40.0, 50.0),
    pt(50.0, 60.0),
    pt(60.0, 30.0),
    pt(70.0, 110.0),
    pt(80.0, 70.0),
    pt(90.0, 60.0),
    pt(100.0, 40.0),
    pt(110.0, 60.0),
    pt(120.0, 50.0),
    pt(130.0, 60.0),
    pt(140.0, 50.0),
    pt(150.0, 60.0),
    pt(160.0, 60.0),
    pt(170.0, 50.0),
    pt(180.0, 60.0),
    pt(190.0, 30.0),
    pt(200.0, 110.0),
    pt(210.0, 70.0),
    pt(220.0, 60.0),
    pt(230.0, 40.0),
    pt(240.0, 60.0),
    pt(250.0, 50.0),
    pt(260.0, 60.0),
    pt(270.0, 50.0),
    pt(280.0, 60.0),
    pt(290.0, 60.0),
    pt(300.0, 50.0),
    pt(310.0, 60.0),
    pt(320.0, 30.0),
    pt(330.0, 110.0),
    pt(340.0, 70.0),
    pt(350.0, 60.0),
    pt(360.0, 40.0),
    pt(370.0, 60.0),
    pt(380.0, 50.0),
];

/// EEG: irregular low-amplitude oscillation
pub const EEG_POINTS: [Point; 39] = [
    pt(0.0, 80.0),
    pt(10.0, 70.0),
    pt(20.0, 80.0),
    pt(30.0, 70.0),
    pt(40.0, 80.0),
    pt(50.0, 70.0),
    pt(60.0, 40.0),
    pt(70.0, 60.0),
    pt(80.0, 20.0),
    pt(90.0, 30.0),
    pt(100.0, 50.0),
    pt(110.0, 40.0),
    pt(120.0, 30.0),
    pt(130.0, 50.0),
    pt(140.0, 30.0),
    pt(150.0, 40.0),
    pt(160.0, 50.0),
    pt(170.0, 90.0),
    pt(180.0, 60.0),
    pt(190.0, 70.0),
    pt(200.0, 50.0),
    pt(210.0, 90.0),
    pt(220.0, 70.0),
    pt(230.0, 110.0),
    pt(240.0, 100.0),
    pt(250.0, 140.0),
    pt(260.0, 120.0),
    pt(270.0, 80.0),
    pt(280.0, 60.0),
    pt(290.0, 70.0),
    pt(300.0, 40.0),
    pt(310.0, 50.0),
    pt(320.0, 30.0),
    pt(330.0, 40.0),
    pt(340.0, 80.0),
    pt(350.0, 70.0),
    pt(360.0, 90.0),
    pt(370.0, 80.0),
    pt(380.0, 80.0),
];

/// EMG: contraction bursts rising out of a quiet baseline
pub const EMG_POINTS: [Point; 39] = [
    pt(0.0, 60.0),
    pt(10.0, 60.0),
    pt(20.0, 60.0),
    pt(30.0, 60.0),
    pt(40.0, 70.0),
    pt(50.0, 80.0),
    pt(60.0, 95.0),
    pt(70.0, 80.0),
    pt(80.0, 70.0),
    pt(90.0, 60.0),
    pt(100.0, 60.0),
    pt(110.0, 70.0),
    pt(120.0, 70.0),
    pt(130.0, 60.0),
    pt(140.0, 50.0),
    pt(150.0, 40.0),
    pt(160.0, 30.0),
    pt(170.0, 20.0),
    pt(180.0, 30.0),
    pt(190.0, 40.0),
    pt(200.0, 50.0),
    pt(210.0, 60.0),
    pt(220.0, 70.0),
    pt(230.0, 80.0),
    pt(240.0, 95.0),
    pt(250.0, 80.0),
    pt(260.0, 70.0),
    pt(270.0, 60.0),
    pt(280.0, 50.0),
    pt(290.0, 50.0),
    pt(300.0, 50.0),
    pt(310.0, 40.0),
    pt(320.0, 30.0),
    pt(330.0, 40.0),
    pt(340.0, 50.0),
    pt(350.0, 60.0),
    pt(360.0, 60.0),
    pt(370.0, 60.0),
    pt(380.0, 60.0),
];

/// EOG: step-like deflections from gaze shifts and blinks
pub const EOG_POINTS: [Point; 39] = [
    pt(0.0, 60.0),
    pt(10.0, 50.0),
    pt(20.0, 60.0),
    pt(30.0, 50.0),
    pt(40.0, 60.0),
    pt(50.0, 20.0),
    pt(60.0, 45.0),
    pt(70.0, 10.0),
    pt(80.0, 40.0),
    pt(90.0, 35.0),
    pt(100.0, 45.0),
    pt(110.0, 35.0),
    pt(120.0, 45.0),
    pt(130.0, 75.0),
    pt(140.0, 80.0),
    pt(150.0, 85.0),
    pt(160.0, 80.0),
    pt(170.0, 85.0),
    pt(180.0, 80.0),
    pt(190.0, 85.0),
    pt(200.0, 70.0),
    pt(210.0, 60.0),
    pt(220.0, 55.0),
    pt(230.0, 65.0),
    pt(240.0, 55.0),
    pt(250.0, 75.0),
    pt(260.0, 70.0),
    pt(270.0, 60.0),
    pt(280.0, 70.0),
    pt(290.0, 60.0),
    pt(300.0, 70.0),
    pt(310.0, 40.0),
    pt(320.0, 30.0),
    pt(330.0, 40.0),
    pt(340.0, 30.0),
    pt(350.0, 35.0),
    pt(360.0, 30.0),
    pt(370.0, 45.0),
    pt(380.0, 60.0),
];

/// Get the catalog trace for a signal kind
pub fn points(kind: SignalKind) -> &'static [Point] {
    match kind {
        SignalKind::Ecg => &ECG_POINTS,
        SignalKind::Eeg => &EEG_POINTS,
        SignalKind::Emg => &EMG_POINTS,
        SignalKind::Eog => &EOG_POINTS,
    }
}

/// Get the catalog trace for a short code. Unrecognized codes yield an
/// empty trace rather than an error.
pub fn points_for_code(code: &str) -> &'static [Point] {
    match SignalKind::from_code(code) {
        Some(kind) => points(kind),
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shapes() {
        for kind in SignalKind::ALL {
            let trace = points(kind);
            assert_eq!(trace.len(), 39, "{} trace length", kind);

            // x runs 0..=380 at a fixed 10 px step
            for (i, p) in trace.iter().enumerate() {
                assert_eq!(p.x, i as f32 * 10.0, "{} x at index {}", kind, i);
            }
            assert_eq!(trace.last().unwrap().x, X_SPAN);
        }
    }

    #[test]
    fn test_x_non_decreasing() {
        for kind in SignalKind::ALL {
            let trace = points(kind);
            for pair in trace.windows(2) {
                assert!(pair[0].x <= pair[1].x);
            }
        }
    }

    #[test]
    fn test_landmark_values() {
        // QRS-like spikes in the ECG trace
        assert_eq!(ECG_POINTS[7], Point::new(70.0, 110.0));
        assert_eq!(ECG_POINTS[20], Point::new(200.0, 110.0));
        assert_eq!(ECG_POINTS[33], Point::new(330.0, 110.0));
        // Deepest EEG trough
        assert_eq!(EEG_POINTS[25], Point::new(250.0, 140.0));
        // EMG burst peaks
        assert_eq!(EMG_POINTS[6], Point::new(60.0, 95.0));
        assert_eq!(EMG_POINTS[24], Point::new(240.0, 95.0));
        // EOG blink deflection
        assert_eq!(EOG_POINTS[7], Point::new(70.0, 10.0));
    }

    #[test]
    fn test_unknown_code_is_empty() {
        assert!(points_for_code("EKG").is_empty());
        assert!(points_for_code("").is_empty());
        assert_eq!(points_for_code("EOG").len(), 39);
    }
}
