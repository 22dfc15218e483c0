//! The store process: customer arrivals against finite inventory.
//!
//! # Wake cycle
//!
//! A store holds exactly one pending entry on the scheduler.  It wakes at
//! whichever comes first: its next customer arrival or the next midnight.
//!
//! ```text
//! on wake at t:
//!   ① for every day index not yet opened (normally just floor(t)):
//!        storage  += inventory × storage_per_unit_day
//!        rent     += monthly_rent               if day % rent_period == 0
//!        interval  = 7 / weekly_units            if day % 7 == 0, once per week
//!   ② if the pending arrival is due: serve one customer or record a stockout,
//!      then draw the next arrival
//!   ③ sleep until min(next arrival, next midnight)
//! ```
//!
//! Waking at every midnight keeps daily bookkeeping exact even when the
//! arrival interval is infinite, and lets a store with no demand pick up a
//! new rate the following week.

use chrono::NaiveDate;
use sc_core::{Calendar, CostRates, SimTime, StoreId, StreamRng};
use sc_demand::{DemandResolver, interarrival_days};
use tracing::trace;

// ── StoreSpec ─────────────────────────────────────────────────────────────────

/// Construction-time description of one store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StoreSpec {
    pub id:           StoreId,
    pub capacity:     u32,
    pub monthly_rent: f64,
}

// ── Counters ──────────────────────────────────────────────────────────────────

/// Cumulative per-store counters.  All money totals only ever grow.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StoreCounters {
    pub sales:          u64,
    pub revenue:        f64,
    pub stockouts:      u64,
    /// Unit price × stockouts.
    pub lost_profit:    f64,
    pub storage_cost:   f64,
    pub rent_paid:      f64,
    pub transport_cost: f64,
    /// Customer arrivals processed; always `sales + stockouts`.
    pub arrivals:       u64,
    pub units_received: u64,
    pub deliveries:     u64,
    /// Times the arrival rate was recomputed.
    pub rate_updates:   u64,
}

/// Where the store stands with respect to replenishment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DeliveryState {
    /// Eligible for dispatch.
    #[default]
    Idle,
    /// A job was dispatched and is waiting for a truck.
    Queued,
    /// A truck is assigned to this store.
    InTransit,
}

impl DeliveryState {
    /// The "delivery in progress" flag.
    #[inline]
    pub fn in_progress(self) -> bool {
        self != DeliveryState::Idle
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

pub struct Store {
    pub id:           StoreId,
    pub capacity:     u32,
    pub monthly_rent: f64,
    /// Invariant: `inventory <= capacity`.
    pub inventory:    u32,
    pub counters:     StoreCounters,
    pub delivery:     DeliveryState,

    /// Mean days between arrivals; infinite when there is no demand.
    interval:       f64,
    next_arrival:   SimTime,
    /// Last day index whose bookkeeping has run.
    last_day:       Option<u64>,
    /// Week whose arrival rate is currently in force.
    rate_week:      Option<NaiveDate>,
    rng:            StreamRng,
}

/// Read-only context a store needs when it wakes.
pub(crate) struct StoreEnv<'a> {
    pub resolver: &'a DemandResolver,
    pub calendar: Calendar,
    pub costs:    &'a CostRates,
}

/// What one wake produced.
pub(crate) struct StoreStep {
    pub next_wake:       SimTime,
    /// Storage cost accrued during this wake, mirrored into the center's total.
    pub storage_accrued: f64,
}

impl Store {
    /// A store starts half full with no demand rate until its first wake.
    pub fn new(spec: StoreSpec, seed: u64) -> Self {
        Self {
            id:           spec.id,
            capacity:     spec.capacity,
            monthly_rent: spec.monthly_rent,
            inventory:    spec.capacity / 2,
            counters:     StoreCounters::default(),
            delivery:     DeliveryState::Idle,
            interval:     f64::INFINITY,
            next_arrival: SimTime::from_days(f64::INFINITY),
            last_day:     None,
            rate_week:    None,
            rng:          StreamRng::new(seed, spec.id),
        }
    }

    /// Free space in units.
    #[inline]
    pub fn headroom(&self) -> u32 {
        self.capacity - self.inventory
    }

    /// Current mean interarrival time in days.
    #[inline]
    pub fn interval_days(&self) -> f64 {
        self.interval
    }

    /// Add delivered units, never beyond capacity.  Returns the units taken.
    pub fn receive(&mut self, quantity: u32) -> u32 {
        let taken = quantity.min(self.headroom());
        self.inventory += taken;
        self.counters.units_received += taken as u64;
        taken
    }

    pub(crate) fn resume(&mut self, now: SimTime, env: &StoreEnv<'_>) -> StoreStep {
        let today = now.day_index();
        let first = self.last_day.map_or(0, |d| d + 1);
        let mut storage_accrued = 0.0;

        for day in first..=today {
            storage_accrued += self.open_day(day, now, env);
        }
        self.last_day = Some(today);

        if self.next_arrival <= now {
            self.serve(env.costs.unit_price);
            self.next_arrival = now + self.rng.exponential(self.interval);
        }

        StoreStep {
            next_wake: self.next_arrival.min(now.next_day_start()),
            storage_accrued,
        }
    }

    /// Daily bookkeeping for `day`.  Returns the storage cost accrued.
    fn open_day(&mut self, day: u64, now: SimTime, env: &StoreEnv<'_>) -> f64 {
        let storage = self.inventory as f64 * env.costs.storage_per_unit_day;
        self.counters.storage_cost += storage;

        if day % env.costs.rent_period_days == 0 {
            self.counters.rent_paid += self.monthly_rent;
        }

        if day % 7 == 0 {
            let week = env.calendar.week_start_of_day(day);
            if self.rate_week != Some(week) {
                self.rate_week = Some(week);
                self.refresh_rate(week, now, env.resolver);
            }
        }
        storage
    }

    fn refresh_rate(&mut self, week: NaiveDate, now: SimTime, resolver: &DemandResolver) {
        let interval = interarrival_days(resolver.weekly_units(self.id, week));
        self.counters.rate_updates += 1;
        if interval.to_bits() == self.interval.to_bits() {
            return;
        }
        self.interval = interval;
        // Exponential waits are memoryless, so redrawing from now is exact.
        self.next_arrival = now + self.rng.exponential(interval);
    }

    fn serve(&mut self, unit_price: f64) {
        self.counters.arrivals += 1;
        if self.inventory > 0 {
            self.inventory -= 1;
            self.counters.sales += 1;
            self.counters.revenue += unit_price;
            trace!(store = %self.id, inventory = self.inventory, "sale");
        } else {
            self.counters.stockouts += 1;
            self.counters.lost_profit += unit_price;
            trace!(store = %self.id, "stockout");
        }
    }
}
