//! The read-only demand service the simulation is injected with.

use chrono::NaiveDate;
use sc_core::StoreId;

/// One store-week of historical data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeekRecord {
    /// Revenue for the week.
    pub weekly_sales: f64,
    pub holiday:      bool,
    pub temperature:  f64,
    /// Price per unit of fuel that week.
    pub fuel_price:   f64,
    pub cpi:          f64,
    pub unemployment: f64,
}

/// Read-only lookups keyed by `(store, week_start)`.
///
/// Implementations must be pure for the duration of a run: asking twice for
/// the same key returns the same answer.
pub trait DemandService {
    /// The historical row for a store-week, or `None` if the dataset has none.
    fn record(&self, store: StoreId, week_start: NaiveDate) -> Option<WeekRecord>;

    /// Mean fuel price over the whole dataset.  Used when a store-week's own
    /// price is missing.
    fn average_fuel_price(&self) -> Option<f64>;

    fn fuel_price(&self, store: StoreId, week_start: NaiveDate) -> Option<f64> {
        self.record(store, week_start).map(|r| r.fuel_price)
    }
}
