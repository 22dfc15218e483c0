use sc_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("cannot schedule at {at}: the clock is already at {now}")]
    InThePast { at: SimTime, now: SimTime },

    #[error("delay must be a finite, non-negative number of days, got {0}")]
    InvalidDelay(f64),

    #[error("resource pool capacity must be at least 1")]
    ZeroCapacity,

    #[error("release called on a pool with no leases held")]
    NothingHeld,
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
