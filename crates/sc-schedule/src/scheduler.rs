//! `Scheduler`: the virtual clock and its queue of pending resumptions.
//!
//! # Ordering
//!
//! Entries are ordered by `(wake time, submission sequence)`.  Two tasks due
//! at the same instant run in the order they were submitted, which together
//! with seeded RNG streams makes every run reproducible.
//!
//! # Horizon
//!
//! [`advance`][Scheduler::advance] only releases tasks due strictly before the
//! horizon.  A task due exactly at the horizon never runs; the clock is left
//! at the last executed instant until [`finish`][Scheduler::finish] moves it
//! to the horizon.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use sc_core::SimTime;

use crate::{ScheduleError, ScheduleResult};

/// One pending resumption.
struct Entry<T> {
    at:   SimTime,
    seq:  u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at).then(self.seq.cmp(&other.seq))
    }
}

/// A min-heap of tasks keyed by wake time, plus the current simulated time.
pub struct Scheduler<T> {
    now:   SimTime,
    queue: BinaryHeap<Reverse<Entry<T>>>,
    /// Monotonic submission counter for tie-breaking.
    seq:   u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now:   SimTime::ZERO,
            queue: BinaryHeap::new(),
            seq:   0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Resume `task` at the absolute instant `at`.
    pub fn schedule_at(&mut self, at: SimTime, task: T) -> ScheduleResult<()> {
        if !at.is_finite() {
            return Err(ScheduleError::InvalidDelay(at - self.now));
        }
        if at < self.now {
            return Err(ScheduleError::InThePast { at, now: self.now });
        }
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Reverse(Entry { at, seq, task }));
        Ok(())
    }

    /// Suspend `task` until `now + delay` days.
    pub fn schedule_after(&mut self, delay: f64, task: T) -> ScheduleResult<SimTime> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(ScheduleError::InvalidDelay(delay));
        }
        let at = self.now + delay;
        self.schedule_at(at, task)?;
        Ok(at)
    }

    /// Start `task` as a new process at the current time.  It runs after
    /// everything already queued for this instant.
    pub fn spawn(&mut self, task: T) {
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Reverse(Entry { at: self.now, seq, task }));
    }

    /// Pop the earliest task due strictly before `horizon` and move the clock
    /// to its wake time.  Returns `None` once nothing remains before the
    /// horizon.
    pub fn advance(&mut self, horizon: SimTime) -> Option<T> {
        let due = self.queue.peek().is_some_and(|Reverse(e)| e.at < horizon);
        if !due {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        debug_assert!(entry.at >= self.now, "simulated time moved backwards");
        self.now = entry.at;
        Some(entry.task)
    }

    /// Move the clock forward to `horizon` once the run is over.
    pub fn finish(&mut self, horizon: SimTime) {
        if horizon > self.now {
            self.now = horizon;
        }
    }

    /// Wake time of the earliest pending task.
    pub fn next_time(&self) -> Option<SimTime> {
        self.queue.peek().map(|Reverse(e)| e.at)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
