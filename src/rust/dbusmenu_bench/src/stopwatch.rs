use std::time::{Duration, Instant};

/// Source of the current time for a `Stopwatch`.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// The system's monotonic clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Wall-clock stopwatch with a movable reference point.
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    reference: Instant,
}

impl Stopwatch<MonotonicClock> {
    /// Starts a stopwatch whose reference point is now.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Starts a stopwatch reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        let reference = clock.now();
        Self { clock, reference }
    }

    /// Moves the reference point to now and returns the seconds elapsed
    /// since the previous one.
    pub fn reset(&mut self) -> f64 {
        let now = self.clock.now();
        let delta = now.saturating_duration_since(self.reference);
        self.reference = now;
        delta.as_secs_f64()
    }

    /// Seconds since the reference point, leaving it in place.
    pub fn peek(&self) -> f64 {
        self.peek_duration().as_secs_f64()
    }

    /// Like `peek`, as a `Duration`.
    pub fn peek_duration(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.reference)
    }
}

impl Default for Stopwatch<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}
