//! Episode time model.
//!
//! # Design
//!
//! Discrete simulation time is a monotone [`Tick`] counter, one per
//! completed orchestration step.  Remaining episode time is deliberately
//! *not* derived from it: ticks drift under load, so [`EpisodeClock`]
//! measures the wall clock against the configured duration budget instead.
//! [`TickTimer`] produces the fixed-interval deadline sequence the
//! orchestration loop blocks on.

use std::fmt;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute episode tick counter, one per completed orchestration step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── EpisodeClock ──────────────────────────────────────────────────────────────

/// Wall-clock episode timer.
///
/// Captures the start instant and start Unix time once, at `start()`, and
/// answers every later "how long left?" question from elapsed wall time
/// against the configured duration budget.
#[derive(Clone, Debug)]
pub struct EpisodeClock {
    started_at: Instant,
    start_unix_ms: i64,
    duration: Duration,
}

impl EpisodeClock {
    /// Capture "now" as the episode start.
    pub fn start(duration: Duration) -> Self {
        let start_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        EpisodeClock {
            started_at: Instant::now(),
            start_unix_ms,
            duration,
        }
    }

    /// Start the clock at a caller-supplied origin instead of `Instant::now()`.
    /// Lets tests exercise arbitrary elapsed times without sleeping.
    pub fn started(started_at: Instant, duration: Duration) -> Self {
        let mut clock = Self::start(duration);
        clock.started_at = started_at;
        clock
    }

    /// Episode start as Unix seconds (persisted with the trajectory).
    pub fn start_unix_secs(&self) -> i64 {
        self.start_unix_ms / 1000
    }

    /// Wall-clock time since `start()`.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Whole seconds remaining; negative once the episode has overrun.
    pub fn time_left_secs(&self) -> i64 {
        let budget = self.duration.as_secs_f64();
        (budget - self.elapsed().as_secs_f64()).round() as i64
    }

    /// Remaining seconds clamped to zero — the only form published to
    /// renderers, observers, and the trajectory.
    pub fn time_left_display(&self) -> u64 {
        self.time_left_secs().max(0) as u64
    }

    /// The episode duration budget has been spent.
    #[inline]
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.duration
    }

    /// Current Unix timestamp in milliseconds, for per-tick record stamps.
    pub fn now_unix_ms(&self) -> i64 {
        self.start_unix_ms + self.elapsed().as_millis() as i64
    }
}

// ── TickTimer ─────────────────────────────────────────────────────────────────

/// Fixed-interval tick deadline sequence.
///
/// [`wait`][Self::wait] blocks until the next deadline, then re-arms by
/// whole intervals.  Deadlines the previous tick already overran are
/// skipped, not replayed: a slow tick can never produce a catch-up burst or
/// two ticks in flight at once.
#[derive(Debug)]
pub struct TickTimer {
    interval: Duration,
    next_deadline: Instant,
}

impl TickTimer {
    /// Arm the first deadline one interval from now.
    pub fn new(interval: Duration) -> Self {
        TickTimer {
            interval,
            next_deadline: Instant::now() + interval,
        }
    }

    /// Block until the next tick deadline, then advance it.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next_deadline > now {
            std::thread::sleep(self.next_deadline - now);
        }
        self.next_deadline += self.interval;
        let now = Instant::now();
        while self.next_deadline <= now {
            self.next_deadline += self.interval;
        }
    }

    /// The interval this timer was armed with.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
