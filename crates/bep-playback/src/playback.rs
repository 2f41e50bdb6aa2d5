//! Cursor and drawn-buffer state for one replaying waveform

use bep_core::{catalog, Point, SignalKind};

/// What a single tick did to the playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Appended one point to the drawn buffer
    Drew,
    /// Cleared the buffer and restarted from the left edge
    Wrapped,
}

/// Replay state for one waveform on one scope canvas.
///
/// The drawn buffer is always a contiguous run of the source sequence since
/// the last wraparound; points are only ever appended or bulk-cleared.
#[derive(Debug, Clone)]
pub struct Playback {
    points: Vec<Point>,
    canvas_width: f32,
    cursor: usize,
    drawn: Vec<Point>,
}

impl Playback {
    pub fn new(points: Vec<Point>, canvas_width: f32) -> Self {
        Playback {
            points,
            canvas_width,
            cursor: 0,
            drawn: Vec::new(),
        }
    }

    /// Replay the catalog trace for a signal kind
    pub fn for_kind(kind: SignalKind) -> Self {
        Self::new(catalog::points(kind).to_vec(), catalog::X_SPAN)
    }

    /// Advance by one tick.
    ///
    /// Wraps (buffer cleared, restart from the left) when the cursor has run
    /// past the end of the sequence or the next point lies beyond the canvas;
    /// otherwise the next point is appended. The cursor moves forward every
    /// tick, wrap ticks included, so the tick after a wrap draws the
    /// sequence's second point.
    pub fn tick(&mut self) -> Tick {
        let outcome = if self.cursor >= self.points.len()
            || self.points[self.cursor].x > self.canvas_width
        {
            self.drawn.clear();
            self.cursor = 0;
            Tick::Wrapped
        } else {
            self.drawn.push(self.points[self.cursor]);
            Tick::Drew
        };
        self.cursor += 1;
        outcome
    }

    /// Points drawn since the last wraparound, in sequence order
    pub fn drawn(&self) -> &[Point] {
        &self.drawn
    }

    /// The full source sequence being replayed
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_trace() -> Vec<Point> {
        vec![
            Point::new(0.0, 60.0),
            Point::new(10.0, 50.0),
            Point::new(400.0, 70.0),
        ]
    }

    #[test]
    fn test_ticks_accumulate_prefix() {
        let mut playback = Playback::for_kind(SignalKind::Emg);
        for _ in 0..10 {
            assert_eq!(playback.tick(), Tick::Drew);
        }
        assert_eq!(playback.drawn(), &catalog::EMG_POINTS[..10]);
    }

    #[test]
    fn test_lookahead_past_canvas_wraps() {
        let mut playback = Playback::new(short_trace(), 380.0);
        playback.tick();
        playback.tick();
        assert_eq!(playback.drawn().len(), 2);

        // Third point sits at x = 400, beyond the canvas
        assert_eq!(playback.tick(), Tick::Wrapped);
        assert!(playback.drawn().is_empty());
    }

    #[test]
    fn test_wrap_restarts_from_second_point() {
        let mut playback = Playback::new(short_trace(), 380.0);
        playback.tick();
        playback.tick();
        playback.tick(); // wrap

        // The cursor advanced through the wrap tick, so the next draw is
        // the second point of the sequence.
        assert_eq!(playback.tick(), Tick::Drew);
        assert_eq!(playback.drawn(), &short_trace()[1..2]);
    }

    #[test]
    fn test_cursor_clamp_wraps_at_sequence_end() {
        // Every catalog trace ends at x = 380, which never exceeds the
        // canvas, so the wrap must come from the length guard.
        let mut playback = Playback::for_kind(SignalKind::Ecg);
        for _ in 0..39 {
            assert_eq!(playback.tick(), Tick::Drew);
        }
        assert_eq!(playback.drawn().len(), 39);

        assert_eq!(playback.tick(), Tick::Wrapped);
        assert!(playback.drawn().is_empty());
    }

    #[test]
    fn test_empty_sequence_never_panics() {
        let mut playback = Playback::new(Vec::new(), 380.0);
        for _ in 0..5 {
            assert_eq!(playback.tick(), Tick::Wrapped);
        }
        assert!(playback.drawn().is_empty());
    }

    #[test]
    fn test_cursor_advances_every_tick() {
        let mut playback = Playback::new(short_trace(), 380.0);
        playback.tick();
        playback.tick();
        assert_eq!(playback.cursor(), 2);
        playback.tick(); // wrap tick still moves the cursor
        assert_eq!(playback.cursor(), 1);
    }
}
