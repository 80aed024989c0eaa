//! Time sources, a pausable stopwatch and frame pacing.
//!
//! Everything is expressed as `Duration` since an arbitrary epoch so a fake
//! clock can drive the loop in tests.

use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Time since the clock's epoch; never decreases.
    fn now(&self) -> Duration;

    /// Block the calling thread for `d`.
    fn sleep(&self, d: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&self, d: Duration) {
        std::thread::sleep(d);
    }
}

/*──────────────────────────── Timer ──────────────────────────────────*/

/// Stopwatch that can be paused; time spent paused does not count.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    start: Duration,
    paused_at: Duration,
    started: bool,
    paused: bool,
}

impl Timer {
    pub fn start(&mut self, now: Duration) {
        self.started = true;
        self.paused = false;
        self.start = now;
        self.paused_at = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    pub fn pause(&mut self, now: Duration) {
        if self.started && !self.paused {
            self.paused = true;
            self.paused_at = now.saturating_sub(self.start);
        }
    }

    pub fn unpause(&mut self, now: Duration) {
        if self.started && self.paused {
            self.paused = false;
            self.start = now.saturating_sub(self.paused_at);
            self.paused_at = Duration::ZERO;
        }
    }

    /// Running time; frozen while paused, zero when stopped.
    pub fn elapsed(&self, now: Duration) -> Duration {
        match (self.started, self.paused) {
            (false, _) => Duration::ZERO,
            (true, true) => self.paused_at,
            (true, false) => now.saturating_sub(self.start),
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.started && self.paused
    }
}

/*──────────────────────────── pacing ─────────────────────────────────*/

/// Caps the loop at a target rate by *sleeping* out the rest of each frame.
#[derive(Clone, Copy, Debug)]
pub struct FramePacer {
    budget: Option<Duration>,
    frame_start: Duration,
}

impl FramePacer {
    /// `target_fps == 0` disables the cap.
    pub fn new(target_fps: u32, now: Duration) -> Self {
        let budget = (target_fps > 0).then(|| Duration::from_secs(1) / target_fps);
        Self {
            budget,
            frame_start: now,
        }
    }

    #[inline]
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Sleep until the current frame's budget is used up, start the next
    /// frame and return how long the finished one took (the `dt` of the
    /// next update).
    pub fn wait<C: Clock + ?Sized>(&mut self, clock: &C) -> Duration {
        if let Some(budget) = self.budget {
            let deadline = self.frame_start + budget;
            let now = clock.now();
            if now < deadline {
                clock.sleep(deadline - now);
            }
        }
        let now = clock.now();
        let dt = now.saturating_sub(self.frame_start);
        self.frame_start = now;
        dt
    }
}
