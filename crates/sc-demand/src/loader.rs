//! CSV sales loader.
//!
//! # CSV format
//!
//! One row per store-week, as published in the Walmart weekly sales dataset:
//!
//! ```csv
//! Store,Date,Weekly_Sales,Holiday_Flag,Temperature,Fuel_Price,CPI,Unemployment
//! 1,05-02-2010,1643690.90,0,42.31,2.572,211.0963582,8.106
//! 1,12-02-2010,1641957.44,1,38.51,2.548,211.2421698,8.106
//! ```
//!
//! `Date` is `dd-mm-YYYY` and names the first day of the week the row covers.
//! `Holiday_Flag` is `0` or `1`.  Extra columns are ignored.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use sc_core::StoreId;

use crate::{DemandError, DemandResult, SalesTable, WeekRecord};

const DATE_FORMAT: &str = "%d-%m-%Y";

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SalesRow {
    #[serde(rename = "Store")]
    store:        u32,
    #[serde(rename = "Date")]
    date:         String,
    #[serde(rename = "Weekly_Sales")]
    weekly_sales: f64,
    #[serde(rename = "Holiday_Flag")]
    holiday_flag: u8,
    #[serde(rename = "Temperature")]
    temperature:  f64,
    #[serde(rename = "Fuel_Price")]
    fuel_price:   f64,
    #[serde(rename = "CPI")]
    cpi:          f64,
    #[serde(rename = "Unemployment")]
    unemployment: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a sales table from a CSV file.
pub fn load_sales_csv(path: &Path) -> DemandResult<SalesTable> {
    let file = std::fs::File::open(path)?;
    load_sales_reader(file)
}

/// Like [`load_sales_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for datasets embedded in
/// a binary.
pub fn load_sales_reader<R: Read>(reader: R) -> DemandResult<SalesTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = SalesTable::new();

    for (line, result) in csv_reader.deserialize::<SalesRow>().enumerate() {
        let row = result?;
        let week_start = NaiveDate::parse_from_str(row.date.trim(), DATE_FORMAT).map_err(|e| {
            DemandError::Parse(format!(
                "row {}: invalid date {:?} (expected dd-mm-YYYY): {e}",
                line + 1,
                row.date
            ))
        })?;
        let holiday = match row.holiday_flag {
            0 => false,
            1 => true,
            other => {
                return Err(DemandError::Parse(format!(
                    "row {}: Holiday_Flag must be 0 or 1, got {other}",
                    line + 1
                )));
            }
        };

        table.insert(
            StoreId(row.store),
            week_start,
            WeekRecord {
                weekly_sales: row.weekly_sales,
                holiday,
                temperature:  row.temperature,
                fuel_price:   row.fuel_price,
                cpi:          row.cpi,
                unemployment: row.unemployment,
            },
        );
    }

    Ok(table)
}
