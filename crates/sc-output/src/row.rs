//! Plain data row types written by output backends.

use chrono::NaiveDate;
use sc_core::StoreId;
use sc_sim::{DeliveryRecord, RunMetrics, Store};

/// One store at the end of one simulated day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreDayRow {
    pub day:                  u64,
    pub date:                 NaiveDate,
    pub store:                u32,
    pub inventory:            u32,
    pub sales:                u64,
    pub stockouts:            u64,
    pub revenue:              f64,
    pub storage_cost:         f64,
    pub rent_paid:            f64,
    pub transport_cost:       f64,
    pub delivery_in_progress: bool,
}

impl StoreDayRow {
    pub fn new(day: u64, date: NaiveDate, store: &Store) -> Self {
        let c = &store.counters;
        Self {
            day,
            date,
            store:                store.id.0,
            inventory:            store.inventory,
            sales:                c.sales,
            stockouts:            c.stockouts,
            revenue:              c.revenue,
            storage_cost:         c.storage_cost,
            rent_paid:            c.rent_paid,
            transport_cost:       c.transport_cost,
            delivery_in_progress: store.delivery.in_progress(),
        }
    }
}

/// One completed delivery.  Times are in simulated days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryRow {
    pub job:                u32,
    pub store:              u32,
    pub requested_at:       f64,
    pub acquired_at:        f64,
    pub arrived_at:         f64,
    pub released_at:        f64,
    pub quantity:           u32,
    pub distance_km:        f64,
    pub fuel_price:         f64,
    pub cost:               f64,
    pub outbound_breakdown: bool,
    pub return_breakdown:   bool,
}

impl From<&DeliveryRecord> for DeliveryRow {
    fn from(r: &DeliveryRecord) -> Self {
        Self {
            job:                r.job.0,
            store:              r.store.0,
            requested_at:       r.requested_at.days(),
            acquired_at:        r.acquired_at.days(),
            arrived_at:         r.arrived_at.days(),
            released_at:        r.released_at.days(),
            quantity:           r.quantity,
            distance_km:        r.distance_km,
            fuel_price:         r.fuel_price,
            cost:               r.cost,
            outbound_breakdown: r.outbound_breakdown,
            return_breakdown:   r.return_breakdown,
        }
    }
}

/// One `(scope, metric, value)` line of the run summary.  `scope` is `"run"`
/// or a store id.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub scope:  String,
    pub metric: &'static str,
    pub value:  f64,
}

/// Flatten run metrics into summary rows: run totals first, then each store.
pub fn summary_rows(m: &RunMetrics) -> Vec<SummaryRow> {
    let run = |metric, value| SummaryRow { scope: "run".to_owned(), metric, value };
    let mut rows = vec![
        run("total_sales", m.total_sales as f64),
        run("total_revenue", m.total_revenue),
        run("total_stockouts", m.total_stockouts as f64),
        run("total_lost_profit", m.total_lost_profit),
        run("total_storage", m.total_storage),
        run("center_storage", m.center_storage),
        run("total_transport", m.total_transport),
        run("store_rent", m.store_rent),
        run("fleet_rent", m.fleet_rent),
        run("total_rent", m.total_rent),
        run("final_profit", m.final_profit),
        run("net_profit", m.net_profit),
        run("deliveries", m.deliveries as f64),
        run("deliveries_completed", m.deliveries_completed as f64),
        run("breakdowns", m.breakdowns as f64),
        run("units_delivered", m.units_delivered as f64),
        run("peak_trucks_in_use", m.peak_trucks_in_use as f64),
    ];

    for s in &m.stores {
        let scope = store_scope(s.store);
        let mut push = |metric, value| {
            rows.push(SummaryRow { scope: scope.clone(), metric, value });
        };
        push("sales", s.sales as f64);
        push("revenue", s.revenue);
        push("stockouts", s.stockouts as f64);
        push("lost_profit", s.lost_profit);
        push("storage_cost", s.storage_cost);
        push("rent_paid", s.rent_paid);
        push("transport_cost", s.transport_cost);
        push("deliveries", s.deliveries as f64);
        push("final_inventory", s.inventory as f64);
    }
    rows
}

fn store_scope(id: StoreId) -> String {
    format!("store_{}", id.0)
}
