//! End-of-run aggregation.
//!
//! Collection only reads; calling [`RunMetrics::collect`] twice on the same
//! state yields equal values.
//!
//! ```text
//! total_rent   = store rent + fleet rent
//! final_profit = revenue − transport − storage − total_rent
//! net_profit   = final_profit − lost_profit
//! ```
//!
//! `storage` is the sum over stores.  The center's own storage total mirrors
//! it and is reported separately, never subtracted twice.

use sc_core::StoreId;

use crate::{DistributionCenter, Store};

/// Final counters of one store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StoreMetrics {
    pub store:          StoreId,
    pub capacity:       u32,
    pub inventory:      u32,
    pub sales:          u64,
    pub revenue:        f64,
    pub stockouts:      u64,
    pub lost_profit:    f64,
    pub storage_cost:   f64,
    pub rent_paid:      f64,
    pub transport_cost: f64,
    pub arrivals:       u64,
    pub units_received: u64,
    pub deliveries:     u64,
}

impl From<&Store> for StoreMetrics {
    fn from(s: &Store) -> Self {
        let c = &s.counters;
        Self {
            store:          s.id,
            capacity:       s.capacity,
            inventory:      s.inventory,
            sales:          c.sales,
            revenue:        c.revenue,
            stockouts:      c.stockouts,
            lost_profit:    c.lost_profit,
            storage_cost:   c.storage_cost,
            rent_paid:      c.rent_paid,
            transport_cost: c.transport_cost,
            arrivals:       c.arrivals,
            units_received: c.units_received,
            deliveries:     c.deliveries,
        }
    }
}

/// Run-wide totals.
#[derive(Clone, Debug, PartialEq)]
pub struct RunMetrics {
    pub stores:                Vec<StoreMetrics>,
    pub total_sales:           u64,
    pub total_revenue:         f64,
    pub total_stockouts:       u64,
    pub total_lost_profit:     f64,
    pub total_storage:         f64,
    pub center_storage:        f64,
    pub total_transport:       f64,
    pub store_rent:            f64,
    pub fleet_rent:            f64,
    pub total_rent:            f64,
    pub final_profit:          f64,
    pub net_profit:            f64,
    /// Jobs that unloaded, including trucks still returning at the horizon.
    pub deliveries:            u64,
    /// Jobs whose truck is back at the center.
    pub deliveries_completed:  u64,
    pub breakdowns:            u64,
    pub units_delivered:       u64,
    pub peak_trucks_in_use:    usize,
}

impl RunMetrics {
    pub fn collect(stores: &[Store], center: &DistributionCenter, peak_trucks_in_use: usize) -> Self {
        let per_store: Vec<StoreMetrics> = stores.iter().map(StoreMetrics::from).collect();

        let total_sales       = per_store.iter().map(|s| s.sales).sum();
        let total_revenue     = per_store.iter().map(|s| s.revenue).sum::<f64>();
        let total_stockouts   = per_store.iter().map(|s| s.stockouts).sum();
        let total_lost_profit = per_store.iter().map(|s| s.lost_profit).sum::<f64>();
        let total_storage     = per_store.iter().map(|s| s.storage_cost).sum::<f64>();
        let store_rent        = per_store.iter().map(|s| s.rent_paid).sum::<f64>();

        let total_transport = center.transport_cost;
        let total_rent = store_rent + center.fleet_rent;
        let final_profit = total_revenue - total_transport - total_storage - total_rent;

        Self {
            stores: per_store,
            total_sales,
            total_revenue,
            total_stockouts,
            total_lost_profit,
            total_storage,
            center_storage: center.storage_cost,
            total_transport,
            store_rent,
            fleet_rent: center.fleet_rent,
            total_rent,
            final_profit,
            net_profit: final_profit - total_lost_profit,
            deliveries: center.unloaded,
            deliveries_completed: center.deliveries.len() as u64,
            breakdowns: center.breakdowns,
            units_delivered: center.units_delivered,
            peak_trucks_in_use,
        }
    }
}
