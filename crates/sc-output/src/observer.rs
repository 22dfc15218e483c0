//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use chrono::NaiveDate;
use sc_core::SimTime;
use sc_sim::{DeliveryRecord, DistributionCenter, RunMetrics, SimObserver, Store};

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputError, OutputResult, StoreDayRow, summary_rows};

/// A [`SimObserver`] that writes daily store rows and the delivery log to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
    days:       u64,
    deliveries: u64,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
            days:       0,
            deliveries: 0,
        }
    }

    /// Write the run summary once the run is over.
    pub fn write_summary(&mut self, metrics: &RunMetrics) {
        let result = self.writer.write_summary(&summary_rows(metrics));
        self.store_err(result);
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Days and deliveries seen so far.
    pub fn counts(&self) -> (u64, u64) {
        (self.days, self.deliveries)
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_end(&mut self, day: u64, date: NaiveDate, stores: &[Store], _center: &DistributionCenter) {
        self.days += 1;
        let rows: Vec<StoreDayRow> = stores.iter().map(|s| StoreDayRow::new(day, date, s)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_store_days(&rows);
            self.store_err(result);
        }
    }

    fn on_delivery(&mut self, record: &DeliveryRecord) {
        self.deliveries += 1;
        let result = self.writer.write_delivery(&DeliveryRow::from(record));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _now: SimTime) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
