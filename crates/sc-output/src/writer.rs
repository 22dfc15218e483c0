//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryRow, OutputResult, StoreDayRow, SummaryRow};

/// Errors are stored by the observer and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one day's rows, one per store.
    fn write_store_days(&mut self, rows: &[StoreDayRow]) -> OutputResult<()>;

    /// Write one completed delivery.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
