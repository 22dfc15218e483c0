//! Simulation observer trait for progress reporting and data collection.

use chrono::NaiveDate;
use sc_core::SimTime;

use crate::{DeliveryRecord, DistributionCenter, Store};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: daily stockout printer
///
/// ```rust,ignore
/// struct Stockouts;
///
/// impl SimObserver for Stockouts {
///     fn on_day_end(&mut self, day: u64, _date: NaiveDate, stores: &[Store], _: &DistributionCenter) {
///         let total: u64 = stores.iter().map(|s| s.counters.stockouts).sum();
///         println!("day {day}: {total} stockouts so far");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every resumed task.
    fn on_step(&mut self, _now: SimTime, _stores: &[Store], _trucks_in_use: usize) {}

    /// Called once per simulated day, after the last event of that day.
    ///
    /// Provides read-only access to store and center state so output writers
    /// can record a daily snapshot without the sim knowing the format.
    fn on_day_end(
        &mut self,
        _day:    u64,
        _date:   NaiveDate,
        _stores: &[Store],
        _center: &DistributionCenter,
    ) {}

    /// Called when a truck is released at the end of a delivery.
    fn on_delivery(&mut self, _record: &DeliveryRecord) {}

    /// Called once after the horizon is reached.
    fn on_sim_end(&mut self, _now: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
