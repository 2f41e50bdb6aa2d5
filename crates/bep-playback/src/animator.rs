//! Tick scheduling with an explicit start/stop lifecycle
//!
//! The animator owns its `Playback` and is driven by whoever owns the
//! animator, passing in the current instant. Time never comes from a hidden
//! clock, so tests can replay any schedule they like.

use std::time::{Duration, Instant};

use bep_core::{BepError, BepResult};

use crate::playback::{Playback, Tick};

/// Tick cadence of the scope replay
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Drives a `Playback` at a fixed interval.
///
/// While stopped, nothing mutates the playback state: `poll` is a no-op
/// until `start` is called again. Stopping is synchronous, so once `stop`
/// returns no further tick can occur.
#[derive(Debug)]
pub struct Animator {
    playback: Playback,
    interval: Duration,
    next_tick: Option<Instant>,
}

impl Animator {
    pub fn new(playback: Playback) -> Self {
        Animator {
            playback,
            interval: DEFAULT_TICK_INTERVAL,
            next_tick: None,
        }
    }

    /// Create with a custom tick interval
    pub fn with_interval(playback: Playback, interval: Duration) -> BepResult<Self> {
        if interval.is_zero() {
            return Err(BepError::InvalidConfig {
                reason: "tick interval must be non-zero",
            });
        }
        Ok(Animator {
            playback,
            interval,
            next_tick: None,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Begin ticking, firing the first tick immediately. Does nothing if
    /// already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_tick.is_some() {
            return;
        }
        tracing::debug!("animator started");
        self.tick_once();
        self.next_tick = Some(now + self.interval);
    }

    /// Stop ticking. Idempotent.
    pub fn stop(&mut self) {
        if self.next_tick.take().is_some() {
            tracing::debug!("animator stopped");
        }
    }

    /// Run every tick that has come due by `now`. Returns true when at
    /// least one tick fired and the canvas should repaint.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(mut due) = self.next_tick else {
            return false;
        };

        let mut ticked = false;
        while now >= due {
            self.tick_once();
            due += self.interval;
            ticked = true;
        }
        self.next_tick = Some(due);
        ticked
    }

    fn tick_once(&mut self) {
        if self.playback.tick() == Tick::Wrapped {
            tracing::trace!("trace reached the canvas edge, buffer cleared");
        }
    }
}
