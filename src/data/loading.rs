//! One-shot loading gate: `Loading -> Ready` after a fixed delay.
//!
//! Time is read through a [`Clock`] so the transition can be driven by a
//! [`ManualClock`] in tests instead of wall time.

use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

/// Gate that opens once, `delay` after it was started.
///
/// The gate only changes phase when polled. A cancelled gate never opens.
#[derive(Debug, Clone)]
pub struct LoadingGate {
    started_at: Duration,
    delay: Duration,
    phase: LoadPhase,
    cancelled: bool,
}

impl LoadingGate {
    pub fn start(clock: &dyn Clock, delay: Duration) -> Self {
        let mut gate = Self {
            started_at: clock.now(),
            delay,
            phase: LoadPhase::Loading,
            cancelled: false,
        };
        gate.poll(clock);
        gate
    }

    /// A gate that is open from the start.
    pub fn ready() -> Self {
        Self {
            started_at: Duration::ZERO,
            delay: Duration::ZERO,
            phase: LoadPhase::Ready,
            cancelled: false,
        }
    }

    pub fn poll(&mut self, clock: &dyn Clock) -> LoadPhase {
        if self.phase == LoadPhase::Loading && !self.cancelled {
            let elapsed = clock.now().saturating_sub(self.started_at);
            if elapsed >= self.delay {
                self.phase = LoadPhase::Ready;
                tracing::info!(delay_ms = self.delay.as_millis() as u64, "loading finished");
            }
        }
        self.phase
    }

    /// Time left until the gate opens, `None` once ready or cancelled.
    pub fn remaining(&self, clock: &dyn Clock) -> Option<Duration> {
        if self.phase == LoadPhase::Ready || self.cancelled {
            return None;
        }
        let elapsed = clock.now().saturating_sub(self.started_at);
        Some(self.delay.saturating_sub(elapsed))
    }

    /// Stop a pending transition. Has no effect once the gate is open.
    pub fn cancel(&mut self) {
        if self.phase == LoadPhase::Loading && !self.cancelled {
            tracing::debug!("loading gate cancelled");
            self.cancelled = true;
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
