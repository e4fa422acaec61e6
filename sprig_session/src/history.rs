// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undo checkpoints and burst coalescing.

use core::time::Duration;

/// The host's undo history.
///
/// [`checkpoint`](Self::checkpoint) records the current state as an undo step.
/// The session calls it right before a command changes the sketch, so undoing
/// returns to the state the command started from.
pub trait History {
    /// Records the current state as an undo step.
    fn checkpoint(&mut self);
}

impl<H: History + ?Sized> History for &mut H {
    fn checkpoint(&mut self) {
        (**self).checkpoint();
    }
}

/// A [`History`] that records nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHistory;

impl History for NoHistory {
    fn checkpoint(&mut self) {}
}

/// Coalesces a burst of continuous input into a single checkpoint.
///
/// A burst is a run of inputs with gaps no longer than the interval. Only the
/// first input of each burst asks for a checkpoint. Timestamps are supplied by
/// the caller, from any monotonic clock.
///
/// ```rust
/// use core::time::Duration;
/// use sprig_session::CheckpointThrottle;
///
/// let mut throttle = CheckpointThrottle::new(Duration::from_millis(300));
/// assert!(throttle.ready(Duration::from_millis(0)));
/// assert!(!throttle.ready(Duration::from_millis(200)));
/// assert!(!throttle.ready(Duration::from_millis(450)));
/// // 400 ms of quiet: a new burst.
/// assert!(throttle.ready(Duration::from_millis(850)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckpointThrottle {
    interval: Duration,
    last: Option<Duration>,
}

impl CheckpointThrottle {
    /// Creates a throttle whose bursts end after `interval` without input.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Notes an input at `now` and returns `true` if it starts a new burst.
    pub fn ready(&mut self, now: Duration) -> bool {
        let fresh = self
            .last
            .is_none_or(|last| now.saturating_sub(last) > self.interval);
        self.last = Some(now);
        fresh
    }

    /// Forgets the current burst, so the next input starts a new one.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
