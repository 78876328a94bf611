//! Scheduled, cancellable timers on an explicit clock.
//!
//! DESIGN
//! ======
//! Time is passed in as a `Duration` since start instead of read from a
//! wall clock, so tests advance it deterministically and the browser driver
//! only needs one real timeout armed at [`TimerQueue::next_deadline`].

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::time::Duration;

/// Pending timers keyed by `K`; at most one timer per key.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    pending: Vec<(Duration, K)>,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<K: Copy + PartialEq> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `key` to fire at `due`, replacing any pending timer for `key`.
    pub fn schedule(&mut self, key: K, due: Duration) {
        self.cancel(key);
        self.pending.push((due, key));
    }

    /// Disarm `key`. Returns whether a timer was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, pending)| *pending != key);
        self.pending.len() != before
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|(_, pending)| *pending == key)
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|(due, _)| *due).min()
    }

    /// Remove and return every timer due at or before `now`, earliest first.
    /// Timers with equal deadlines fire in scheduling order.
    pub fn take_due(&mut self, now: Duration) -> Vec<K> {
        let (mut due, pending): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, key)| key).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
