//! The `Replenishment` seam and the built-in policies.
//!
//! A policy answers one question per store per review: does this store need a
//! truck?  Eligibility (no delivery already in flight, room in the truck
//! queue) and ordering are the distribution center's business, not the
//! policy's.
//!
//! | Policy                 | Flags a store when                                  |
//! |------------------------|-----------------------------------------------------|
//! | `FixedReorderPoint`    | `inventory < reorder_point`                         |
//! | `SafetyStockForecast`  | `inventory < weekly_units / 168 × lead_time_hours`  |
//! | `TruckloadHeadroom`    | `capacity − inventory ≥ truck capacity`             |

use chrono::NaiveDate;
use sc_core::{ReplenishmentPolicy, SimTime, TruckTier};
use sc_demand::DemandResolver;

use crate::Store;

const HOURS_PER_WEEK: f64 = 7.0 * 24.0;

/// What a policy may consult besides the store itself.
pub struct PolicyContext<'a> {
    pub now:         SimTime,
    /// Week key for demand lookups.
    pub week_start:  NaiveDate,
    /// One-way distance from the center to the store being evaluated.
    pub distance_km: f64,
    pub truck:       &'a TruckTier,
    pub resolver:    &'a DemandResolver,
}

/// Decides whether a store should be replenished.
pub trait Replenishment {
    fn decide(&self, store: &Store, ctx: &PolicyContext<'_>) -> bool;
}

impl Replenishment for ReplenishmentPolicy {
    fn decide(&self, store: &Store, ctx: &PolicyContext<'_>) -> bool {
        match *self {
            ReplenishmentPolicy::FixedReorderPoint { reorder_point } => {
                store.inventory < reorder_point
            }
            ReplenishmentPolicy::SafetyStockForecast { dock_hours } => {
                // No usable demand figure counts as zero demand: never flagged.
                let weekly = ctx.resolver.weekly_units(store.id, ctx.week_start).unwrap_or(0.0);
                let hourly = weekly / HOURS_PER_WEEK;
                let lead_hours = dock_hours + ctx.truck.travel_hours(ctx.distance_km);
                (store.inventory as f64) < hourly * lead_hours
            }
            ReplenishmentPolicy::TruckloadHeadroom => store.headroom() >= ctx.truck.capacity,
        }
    }
}

impl<F> Replenishment for F
where
    F: Fn(&Store, &PolicyContext<'_>) -> bool,
{
    fn decide(&self, store: &Store, ctx: &PolicyContext<'_>) -> bool {
        self(store, ctx)
    }
}
