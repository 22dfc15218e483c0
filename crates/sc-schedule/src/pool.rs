//! `ResourcePool`: a counted lease with a FIFO wait queue.
//!
//! The pool does not own a clock.  When [`release`][ResourcePool::release]
//! hands the freed lease to the oldest waiter, the caller re-spawns that
//! waiter on the scheduler so it resumes at the current instant.
//!
//! Invariant: `in_use <= capacity` at all times.

use std::collections::VecDeque;

use crate::{ScheduleError, ScheduleResult};

/// Outcome of a lease request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Acquire {
    /// A lease was free and is now held by the requester.
    Granted,
    /// All leases are held; the requester waits in FIFO order.
    Queued,
    /// All leases are held and the wait queue is at its limit.
    Rejected,
}

pub struct ResourcePool<T> {
    capacity:    usize,
    in_use:      usize,
    waiting:     VecDeque<T>,
    /// `None` = unbounded wait queue.
    queue_limit: Option<usize>,
    peak_in_use: usize,
}

impl<T> ResourcePool<T> {
    pub fn new(capacity: usize, queue_limit: Option<usize>) -> ScheduleResult<Self> {
        if capacity == 0 {
            return Err(ScheduleError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            in_use: 0,
            waiting: VecDeque::new(),
            queue_limit,
            peak_in_use: 0,
        })
    }

    /// Would a request made now be granted or queued (rather than rejected)?
    pub fn can_admit(&self) -> bool {
        self.in_use < self.capacity
            || self.queue_limit.is_none_or(|limit| self.waiting.len() < limit)
    }

    /// Ask for one lease on behalf of `who`.
    pub fn request(&mut self, who: T) -> Acquire {
        if self.in_use < self.capacity {
            self.in_use += 1;
            self.peak_in_use = self.peak_in_use.max(self.in_use);
            Acquire::Granted
        } else if self.queue_limit.is_none_or(|limit| self.waiting.len() < limit) {
            self.waiting.push_back(who);
            Acquire::Queued
        } else {
            Acquire::Rejected
        }
    }

    /// Return one lease.  If anyone is waiting, the lease passes straight to
    /// the oldest waiter, which is returned so the caller can resume it.
    pub fn release(&mut self) -> ScheduleResult<Option<T>> {
        if self.in_use == 0 {
            return Err(ScheduleError::NothingHeld);
        }
        match self.waiting.pop_front() {
            Some(next) => Ok(Some(next)),
            None => {
                self.in_use -= 1;
                Ok(None)
            }
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_use(&self) -> usize {
        self.in_use
    }

    pub fn available(&self) -> usize {
        self.capacity - self.in_use
    }

    pub fn queue_len(&self) -> usize {
        self.waiting.len()
    }

    /// Highest number of leases ever held at once.
    pub fn peak_in_use(&self) -> usize {
        self.peak_in_use
    }
}
