//! `sc-sim`: the discrete-event core of the `sc` supply-chain twin.
//!
//! # Processes
//!
//! ```text
//! store i     wake at arrival or midnight
//!               midnight → storage cost, rent, weekly arrival rate
//!               arrival  → sell one unit, or record a stockout
//! review      every review_interval_days
//!               flag idle stores via Replenishment::decide
//!               sort by inventory ascending, dispatch while the pool admits
//! delivery    request truck ─▶ acquire ─▶ travel ─▶ unload ─▶ travel ─▶ release
//! ```
//!
//! All three run on one [`sc_schedule::Scheduler`]; the truck fleet is an
//! [`sc_schedule::ResourcePool`] whose waiters are queued delivery jobs.
//!
//! # Crate layout
//!
//! | Module           | Contents                                            |
//! |------------------|-----------------------------------------------------|
//! | [`store`]        | `Store`, `StoreSpec`, `StoreCounters`               |
//! | [`policy`]       | `Replenishment` trait, `PolicyContext`              |
//! | [`distribution`] | `DistributionCenter`, `DistanceTable`               |
//! | [`delivery`]     | `DeliveryRecord`, `transport_cost`                  |
//! | [`sim`]          | `Sim` and its event loop                            |
//! | [`builder`]      | `SimBuilder`                                        |
//! | [`observer`]     | `SimObserver`, `NoopObserver`                       |
//! | [`metrics`]      | `RunMetrics`, `StoreMetrics`                        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sc_core::{SimConfig, SimRng};
//! use sc_demand::{DemandResolver, DemandSource, load_sales_csv};
//! use sc_sim::{DistanceTable, NoopObserver, SimBuilder};
//!
//! let table = load_sales_csv(path)?;
//! let stores = table.stores();
//! let distances = DistanceTable::clipped_normal(&stores, 10.0, 300.0, &mut SimRng::new(7))?;
//! let resolver = DemandResolver::new(Box::new(table), DemandSource::Historical, 100.0);
//! let mut sim = SimBuilder::new(SimConfig::default(), resolver, distances).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:.2}", sim.metrics().final_profit);
//! ```

pub mod builder;
pub mod delivery;
pub mod distribution;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod policy;
pub mod sim;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use delivery::{DeliveryRecord, transport_cost};
pub use distribution::{DistanceTable, DistributionCenter};
pub use error::{SimError, SimResult};
pub use metrics::{RunMetrics, StoreMetrics};
pub use observer::{NoopObserver, SimObserver};
pub use policy::{PolicyContext, Replenishment};
pub use sim::Sim;
pub use store::{DeliveryState, Store, StoreCounters, StoreSpec};
