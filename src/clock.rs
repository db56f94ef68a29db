use std::thread;
use std::time::{Duration, Instant};

use crate::config::TICK_INTERVAL_MS;

/// Time source for the loop driver.
///
/// The simulation never sees a clock; only the driver paces frames.
pub trait Clock {
    /// Time elapsed since the clock was created.
    fn now(&self) -> Duration;

    /// Blocks for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock time backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Deterministic clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward without a sleep, e.g. to simulate slow frames.
    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
    }
}

/// Holds the loop to a fixed minimum frame interval.
#[derive(Debug, Clone, Copy)]
pub struct FrameTimer {
    interval: Duration,
    last_frame: Duration,
}

impl FrameTimer {
    /// Starts timing from the clock's current reading.
    #[must_use]
    pub fn new(clock: &impl Clock, interval: Duration) -> Self {
        Self {
            interval,
            last_frame: clock.now(),
        }
    }

    /// Timer using the default tick interval.
    #[must_use]
    pub fn with_default_interval(clock: &impl Clock) -> Self {
        Self::new(clock, Duration::from_millis(TICK_INTERVAL_MS))
    }

    /// Waits until at least one interval has passed since the previous frame
    /// and returns the elapsed time in seconds.
    ///
    /// The value is not clamped; long stalls come back as they happened.
    pub fn wait_next(&mut self, clock: &mut impl Clock) -> f32 {
        let due = self.last_frame + self.interval;
        let now = clock.now();
        if now < due {
            clock.sleep(due - now);
        }

        let now = clock.now();
        let elapsed = now.saturating_sub(self.last_frame);
        self.last_frame = now;
        elapsed.as_secs_f32()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
