//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `store_days.csv`
//! - `deliveries.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult, StoreDayRow, SummaryRow};

const STORE_DAY_HEADER: [&str; 11] = [
    "day", "date", "store", "inventory", "sales", "stockouts", "revenue",
    "storage_cost", "rent_paid", "transport_cost", "delivery_in_progress",
];

const DELIVERY_HEADER: [&str; 12] = [
    "job", "store", "requested_at", "acquired_at", "arrived_at", "released_at",
    "quantity", "distance_km", "fuel_price", "cost", "outbound_breakdown", "return_breakdown",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    store_days: Writer<File>,
    deliveries: Writer<File>,
    summary:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open the three CSV files and
    /// write their header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut store_days = Writer::from_path(dir.join("store_days.csv"))?;
        store_days.write_record(STORE_DAY_HEADER)?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(DELIVERY_HEADER)?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["scope", "metric", "value"])?;

        Ok(Self {
            store_days,
            deliveries,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_store_days(&mut self, rows: &[StoreDayRow]) -> OutputResult<()> {
        for row in rows {
            self.store_days.write_record(&[
                row.day.to_string(),
                row.date.format("%Y-%m-%d").to_string(),
                row.store.to_string(),
                row.inventory.to_string(),
                row.sales.to_string(),
                row.stockouts.to_string(),
                row.revenue.to_string(),
                row.storage_cost.to_string(),
                row.rent_paid.to_string(),
                row.transport_cost.to_string(),
                (row.delivery_in_progress as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.write_record(&[
            row.job.to_string(),
            row.store.to_string(),
            row.requested_at.to_string(),
            row.acquired_at.to_string(),
            row.arrived_at.to_string(),
            row.released_at.to_string(),
            row.quantity.to_string(),
            row.distance_km.to_string(),
            row.fuel_price.to_string(),
            row.cost.to_string(),
            (row.outbound_breakdown as u8).to_string(),
            (row.return_breakdown as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summary.write_record(&[
                row.scope.clone(),
                row.metric.to_owned(),
                row.value.to_string(),
            ])?;
        }
        self.summary.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.store_days.flush()?;
        self.deliveries.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
