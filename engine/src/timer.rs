use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_HZ: u32 = 60;

/// Number of ticks at `tick_hz` that make up `interval`, rounded to the nearest tick (at least 1).
pub fn ticks_for(interval: Duration, tick_hz: u32) -> u32 {
    let ticks = (interval.as_secs_f64() * tick_hz.max(1) as f64).round();
    (ticks as u32).max(1)
}

/// A repeating timer measured in simulation ticks.
///
/// Lives inside game state so that secondary timers (spawners and the like) advance on the same
/// callback as the simulation and stop together with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickTimer {
    period: u32,
    elapsed: u32,
    running: bool,
}

impl TickTimer {
    /// A running timer that fires every `period` ticks (a zero period is treated as 1).
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            elapsed: 0,
            running: true,
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Freezes the timer; the current phase is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Starts again from a full period.
    pub fn restart(&mut self) {
        self.elapsed = 0;
        self.running = true;
    }

    /// Advances one tick; returns true when the timer fires.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            return true;
        }
        false
    }
}

/// Wall-clock pacing for a fixed-rate tick.
///
/// The window loop asks how many ticks are due at `now`, runs them, and sleeps until
/// `next_deadline`. Catch-up is capped so a stalled window doesn't replay seconds of simulation
/// in one burst.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    interval: Duration,
    next_at: Instant,
    max_catch_up: u32,
}

impl FixedStep {
    pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

    pub fn new(tick_hz: u32, start: Instant) -> Self {
        let interval = Duration::from_nanos(1_000_000_000 / tick_hz.max(1) as u64);
        Self {
            interval,
            next_at: start + interval,
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_at
    }

    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next_at && due < self.max_catch_up {
            self.next_at += self.interval;
            due += 1;
        }
        if now >= self.next_at {
            // Still behind after the cap: drop the backlog and re-anchor on `now`.
            self.next_at = now + self.interval;
        }
        due
    }
}
