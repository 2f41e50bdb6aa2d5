//! BEP-Playback: timed replay of catalog waveforms
//!
//! `Playback` is the cursor/buffer state machine, `Animator` schedules its
//! ticks against wall-clock (or test-supplied) instants.

pub mod animator;
pub mod playback;

pub use animator::{Animator, DEFAULT_TICK_INTERVAL};
pub use playback::{Playback, Tick};
