//! `SalesTable`: the dataset held in memory.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use sc_core::StoreId;

use crate::{DemandService, WeekRecord};

/// Every `(store, week_start)` row of a sales dataset.
#[derive(Default, Clone, Debug)]
pub struct SalesTable {
    rows:          FxHashMap<(StoreId, NaiveDate), WeekRecord>,
    fuel_sum:      f64,
    fuel_count:    usize,
}

impl SalesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one row.  A replaced row's fuel price is removed
    /// from the running average first.
    pub fn insert(&mut self, store: StoreId, week_start: NaiveDate, record: WeekRecord) {
        if let Some(old) = self.rows.insert((store, week_start), record) {
            self.fuel_sum -= old.fuel_price;
            self.fuel_count -= 1;
        }
        self.fuel_sum += record.fuel_price;
        self.fuel_count += 1;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct stores present in the table, ascending.
    pub fn stores(&self) -> Vec<StoreId> {
        let mut ids: Vec<StoreId> = self.rows.keys().map(|(s, _)| *s).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

impl FromIterator<(StoreId, NaiveDate, WeekRecord)> for SalesTable {
    fn from_iter<I: IntoIterator<Item = (StoreId, NaiveDate, WeekRecord)>>(iter: I) -> Self {
        let mut table = SalesTable::new();
        for (store, week, record) in iter {
            table.insert(store, week, record);
        }
        table
    }
}

impl DemandService for SalesTable {
    fn record(&self, store: StoreId, week_start: NaiveDate) -> Option<WeekRecord> {
        self.rows.get(&(store, week_start)).copied()
    }

    fn average_fuel_price(&self) -> Option<f64> {
        (self.fuel_count > 0).then(|| self.fuel_sum / self.fuel_count as f64)
    }
}
