//! `sc-demand`: where stores and the distribution center get their numbers.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`service`]   | `DemandService` trait, `WeekRecord`                       |
//! | [`table`]     | `SalesTable` (in-memory `DemandService`)                  |
//! | [`loader`]    | `load_sales_csv`, `load_sales_reader`                     |
//! | [`predictor`] | `DemandPredictor` trait, `PredictorInput`, `PredictError` |
//! | [`resolver`]  | `DemandSource`, `DemandResolver`, `interarrival_days`     |
//! | [`error`]     | `DemandError`, `DemandResult<T>`                          |
//!
//! # Lookup model (summary)
//!
//! All data is keyed by `(StoreId, week_start)`.  Every lookup returns an
//! `Option`; `None` is the explicit "not found" answer and callers degrade to
//! a fallback instead of failing:
//!
//! ```text
//! weekly units missing / zero / predictor error  →  no arrivals this week
//! fuel price missing                             →  run-wide average price
//! ```

pub mod error;
pub mod loader;
pub mod predictor;
pub mod resolver;
pub mod service;
pub mod table;


pub use error::{DemandError, DemandResult};
pub use loader::{load_sales_csv, load_sales_reader};
pub use predictor::{DemandPredictor, PredictError, PredictorInput};
pub use resolver::{DemandResolver, DemandSource, interarrival_days};
pub use service::{DemandService, WeekRecord};
pub use table::SalesTable;
