//! `sc-core`: foundational types for the `sc` supply-chain twin.
//!
//! This crate is a dependency of every other `sc-*` crate.  It has no `sc-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `chrono`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `StoreId`, `JobId`                                         |
//! | [`time`]    | `SimTime` (real-valued days), `Calendar`                   |
//! | [`rng`]     | `StreamRng` (per-store), `SimRng` (global)                 |
//! | [`config`]  | `SimConfig`, tier tables, `ReplenishmentPolicy`            |
//! | [`error`]   | `ScError`, `ScResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    CostRates, FleetTier, FlagClearing, ReplenishmentPolicy, SimConfig, StorageTier, TruckTier,
};
pub use error::{ScError, ScResult};
pub use ids::{JobId, StoreId};
pub use rng::{SimRng, StreamRng};
pub use time::{Calendar, SimTime};
