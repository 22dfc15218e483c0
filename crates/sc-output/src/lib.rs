//! `sc-output`: simulation output writers for the `sc` supply-chain twin.
//!
//! | Backend | Files created                                          |
//! |---------|--------------------------------------------------------|
//! | CSV     | `store_days.csv`, `deliveries.csv`, `summary.csv`      |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sc_sim::SimObserver`.  The run
//! summary is written once the run is over, from `sc_sim::RunMetrics`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.write_summary(&sim.metrics());
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryRow, StoreDayRow, SummaryRow, summary_rows};
pub use writer::OutputWriter;
