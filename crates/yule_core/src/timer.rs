//! # One-Shot Timers
//!
//! Owned, poll-checked deadlines. A timer is a value held by the system it
//! drives; the owner asks it once per tick whether it fired. There are no
//! callbacks and no timer threads, so a timer cannot outlive its owner or
//! fire into freed state.

/// Lifecycle of a one-shot timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerState {
    /// Not armed; never fires.
    Idle,
    /// Armed and waiting for the deadline.
    Armed,
    /// Deadline reached and reported exactly once.
    Fired,
    /// Cancelled before firing; never fires.
    Cancelled,
}

/// A cancelable one-shot deadline on scene time.
///
/// `fire` reports true on exactly one poll: the first poll at or past the
/// deadline while armed. Cancelling an armed timer wins permanently;
/// re-arming restores a fresh deadline from any state.
#[derive(Clone, Copy, Debug)]
pub struct OneShot {
    /// Absolute scene time at which the timer elapses.
    deadline: f32,
    /// Current lifecycle state.
    state: TimerState,
}

impl OneShot {
    /// Creates an unarmed timer.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            deadline: 0.0,
            state: TimerState::Idle,
        }
    }

    /// Arms the timer to elapse `delay` seconds after `now`.
    pub fn arm(&mut self, now: f32, delay: f32) {
        self.deadline = now + delay;
        self.state = TimerState::Armed;
    }

    /// Cancels the timer; a cancelled timer never fires.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
        }
    }

    /// Polls the timer at scene time `now`.
    ///
    /// Returns true exactly once, on the first poll at or past the deadline.
    pub fn fire(&mut self, now: f32) -> bool {
        if self.state == TimerState::Armed && now >= self.deadline {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    /// True while armed and waiting.
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// True once the deadline has been reported.
    #[inline]
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.state == TimerState::Fired
    }
}

impl Default for OneShot {
    fn default() -> Self {
        Self::idle()
    }
}
