//! `sc-schedule`: the virtual clock and the primitives processes suspend on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scheduler`] | `Scheduler<T>` (`BinaryHeap` keyed by `(SimTime, seq)`)   |
//! | [`pool`]      | `ResourcePool<T>`, `Acquire`                              |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Process model (summary)
//!
//! A process is any value `T` the caller can resume, typically a small enum
//! naming which state machine to step.  A process suspends by handing itself
//! back to the scheduler:
//!
//! ```text
//! timed wait      scheduler.schedule_after(delay, task)
//! new process     scheduler.spawn(task)                 (runs at `now`)
//! resource wait   pool.request(task) == Queued          (re-spawned on release)
//! ```
//!
//! `Scheduler::advance` pops exactly one due task at a time, so only one
//! continuation ever runs and every state mutation happens between two
//! suspension points.

pub mod error;
pub mod pool;
pub mod scheduler;


pub use error::{ScheduleError, ScheduleResult};
pub use pool::{Acquire, ResourcePool};
pub use scheduler::Scheduler;
