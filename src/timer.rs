//! Wall-clock stopwatch for the per-frame time step
//!
//! The frame loop reads `elapsed` as the variable time step, then calls
//! `start` to re-arm for the next frame. Pause freezes the reading;
//! unpause shifts the origin so the paused span is never counted.

use std::time::{Duration, Instant};

/// Stopwatch with start/stop/pause/unpause semantics
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Origin of the running span; `None` while stopped or paused
    origin: Option<Instant>,
    /// Reading frozen at the moment of pause
    frozen: Duration,
    started: bool,
    paused: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or re-arm) the stopwatch from zero
    pub fn start(&mut self) {
        self.started = true;
        self.paused = false;
        self.origin = Some(Instant::now());
        self.frozen = Duration::ZERO;
    }

    /// Halt and clear all state
    pub fn stop(&mut self) {
        self.started = false;
        self.paused = false;
        self.origin = None;
        self.frozen = Duration::ZERO;
    }

    /// Freeze the reading; no-op unless running and not already paused
    pub fn pause(&mut self) {
        if self.started && !self.paused {
            self.paused = true;
            self.frozen = self.origin.map(|t| t.elapsed()).unwrap_or(Duration::ZERO);
            self.origin = None;
        }
    }

    /// Resume from the frozen reading; no-op unless running and paused
    ///
    /// The origin moves back by the frozen duration, so time spent paused is
    /// not double-counted when `elapsed` resumes.
    pub fn unpause(&mut self) {
        if self.started && self.paused {
            self.paused = false;
            self.origin = Some(Instant::now() - self.frozen);
            self.frozen = Duration::ZERO;
        }
    }

    /// The current reading: frozen while paused, live while running,
    /// zero while stopped
    pub fn elapsed(&self) -> Duration {
        if !self.started {
            return Duration::ZERO;
        }
        if self.paused {
            return self.frozen;
        }
        self.origin.map(|t| t.elapsed()).unwrap_or(Duration::ZERO)
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.started && self.paused
    }
}
