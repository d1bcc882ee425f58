//! Tick scheduling.
//!
//! The sweep advances on a fixed-rate clock: after each tick the next one is
//! armed [`TICK_PERIOD`] later, and only while the machine is still running.
//! A scheduler holds at most one pending tick.

use std::time::Duration;

/// Fixed delay between ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(25);

/// Source of pending-tick deadlines.
pub trait Scheduler {
    /// Arm a single tick `delay` from now, replacing any pending one.
    fn schedule_after(&mut self, delay: Duration);

    /// Drop the pending tick, if any.
    fn cancel(&mut self);

    /// Consume the pending tick if its deadline has passed.
    fn take_due(&mut self) -> bool;

    /// Time left until the pending tick, `None` when nothing is armed.
    fn remaining(&self) -> Option<Duration>;

    fn is_armed(&self) -> bool {
        self.remaining().is_some()
    }
}

/// Virtual clock advanced explicitly by the caller.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    deadline: Option<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration) {
        self.deadline = Some(self.now + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn take_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= self.now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_sub(self.now))
    }
}

/// Wall-clock scheduler polled once per UI frame.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    deadline: Option<web_time::Instant>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_after(&mut self, delay: Duration) {
        self.deadline = Some(web_time::Instant::now() + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn take_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= web_time::Instant::now() => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(web_time::Instant::now()))
    }
}
