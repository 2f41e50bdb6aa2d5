//! 2D sample point in canvas-local pixel coordinates

use serde::{Deserialize, Serialize};

/// A single waveform sample. Coordinates are pixels in the scope canvas's
/// local space, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Point { x, y }
    }
}
