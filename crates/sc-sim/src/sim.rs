//! The `Sim` struct and its event loop.

use rustc_hash::FxHashMap;
use sc_core::{
    Calendar, JobId, ReplenishmentPolicy, ScError, SimConfig, SimRng, SimTime, StoreId,
};
use sc_demand::DemandResolver;
use sc_schedule::{Acquire, ResourcePool, Scheduler};
use tracing::{debug, info};

use crate::delivery::{DeliveryJob, Fleet, JobPhase};
use crate::store::StoreEnv;
use crate::{
    DeliveryRecord, DeliveryState, DistributionCenter, PolicyContext, Replenishment, RunMetrics,
    SimObserver, SimResult, Store,
};

/// A process the scheduler can resume.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Task {
    /// The demand loop of the store at this slot.
    Store(usize),
    /// The distribution center's periodic review.
    Review,
    Delivery(JobId),
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Three kinds of process share one virtual clock:
///
/// 1. **Stores** wake at each customer arrival and each midnight.
/// 2. **The review** wakes every `review_interval_days`, asks the policy
///    about every idle store and dispatches the most depleted first.
/// 3. **Delivery jobs** wait for a truck, travel out, unload, travel back and
///    release the truck to the next waiting job.
///
/// Exactly one process runs at a time and every mutation happens between two
/// suspension points, so shared state needs no locking.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Replenishment = ReplenishmentPolicy> {
    /// Run configuration, immutable once built.
    pub config: SimConfig,

    pub calendar: Calendar,

    /// Stores in construction order.
    pub stores: Vec<Store>,

    pub center: DistributionCenter,

    pub resolver: DemandResolver,

    pub policy: P,

    pub(crate) scheduler: Scheduler<Task>,

    /// The truck fleet.  Waiters are delivery tasks.
    pub(crate) pool: ResourcePool<Task>,

    pub(crate) slots:     FxHashMap<StoreId, usize>,
    /// One-way distance per store slot.
    pub(crate) store_km:  Vec<f64>,
    pub(crate) jobs:      FxHashMap<JobId, DeliveryJob>,
    pub(crate) next_job:  u32,
    pub(crate) fleet_rng: SimRng,
    pub(crate) fallback_fuel_price: f64,
    /// Day whose end has not been reported yet.
    pub(crate) day_cursor: u64,
    pub(crate) finished:   bool,
}

impl<P: Replenishment> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the horizon.  Events due at or after the horizon never
    /// execute.  A second call is a no-op.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.finished {
            return Ok(());
        }
        let horizon = self.config.horizon();
        info!(
            stores = self.stores.len(),
            trucks = self.pool.capacity(),
            horizon_days = horizon.days(),
            "simulation start"
        );

        while let Some(task) = self.scheduler.advance(horizon) {
            let now = self.scheduler.now();
            while now.day_index() > self.day_cursor {
                self.close_day(observer);
            }
            if let Some(record) = self.resume(task, now)? {
                observer.on_delivery(&record);
            }
            observer.on_step(now, &self.stores, self.pool.in_use());
        }

        let last_day = (horizon.days().ceil() as u64).saturating_sub(1);
        while self.day_cursor < last_day {
            self.close_day(observer);
        }
        self.report_day(observer);
        self.scheduler.finish(horizon);
        self.finished = true;
        observer.on_sim_end(self.scheduler.now());

        let metrics = self.metrics();
        info!(
            deliveries = metrics.deliveries,
            sales = metrics.total_sales,
            stockouts = metrics.total_stockouts,
            final_profit = metrics.final_profit,
            net_profit = metrics.net_profit,
            "simulation end"
        );
        Ok(())
    }

    /// Aggregate the counters accumulated so far.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics::collect(&self.stores, &self.center, self.pool.peak_in_use())
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.scheduler.now()
    }

    pub fn store(&self, id: StoreId) -> Option<&Store> {
        self.slots.get(&id).map(|&i| &self.stores[i])
    }

    pub fn trucks_in_use(&self) -> usize {
        self.pool.in_use()
    }

    pub fn peak_trucks_in_use(&self) -> usize {
        self.pool.peak_in_use()
    }

    /// Jobs dispatched but not yet back at the center.
    pub fn jobs_in_flight(&self) -> usize {
        self.jobs.len()
    }

    // ── Day boundaries ────────────────────────────────────────────────────

    /// Report the end of the current day and open the next one.
    fn close_day<O: SimObserver>(&mut self, observer: &mut O) {
        self.report_day(observer);
        self.day_cursor += 1;
        self.open_day(self.day_cursor);
    }

    fn report_day<O: SimObserver>(&self, observer: &mut O) {
        let date = self.calendar.date_of_day(self.day_cursor);
        observer.on_day_end(self.day_cursor, date, &self.stores, &self.center);
    }

    /// Center-side bookkeeping at the start of `day`.
    pub(crate) fn open_day(&mut self, day: u64) {
        if day % self.config.costs.rent_period_days == 0 {
            self.center.fleet_rent += self.pool.capacity() as f64 * self.config.truck.monthly_rent;
        }
    }

    // ── Processes ─────────────────────────────────────────────────────────

    fn resume(&mut self, task: Task, now: SimTime) -> SimResult<Option<DeliveryRecord>> {
        match task {
            Task::Store(slot) => self.resume_store(slot, now)?,
            Task::Review      => self.review(now)?,
            Task::Delivery(id) => return self.resume_job(id, now),
        }
        Ok(None)
    }

    fn resume_store(&mut self, slot: usize, now: SimTime) -> SimResult<()> {
        let env = StoreEnv {
            resolver: &self.resolver,
            calendar: self.calendar,
            costs:    &self.config.costs,
        };
        let step = self.stores[slot].resume(now, &env);
        self.center.storage_cost += step.storage_accrued;
        self.scheduler.schedule_at(step.next_wake, Task::Store(slot))?;
        Ok(())
    }

    /// Periodic review: flag, filter, order, dispatch, sleep.
    fn review(&mut self, now: SimTime) -> SimResult<()> {
        self.center.reviews += 1;
        let week_start = self.calendar.week_start_at(now);

        let mut flagged: Vec<usize> = (0..self.stores.len())
            .filter(|&slot| {
                let store = &self.stores[slot];
                if store.delivery.in_progress() {
                    return false;
                }
                let ctx = PolicyContext {
                    now,
                    week_start,
                    distance_km: self.store_km[slot],
                    truck:       &self.config.truck,
                    resolver:    &self.resolver,
                };
                self.policy.decide(store, &ctx)
            })
            .collect();

        // Most depleted first; ties by store id.
        flagged.sort_by_key(|&slot| (self.stores[slot].inventory, self.stores[slot].id));

        for slot in flagged {
            if !self.pool.can_admit() {
                debug!(%now, "truck queue full; remaining stores wait for the next review");
                break;
            }
            self.dispatch(slot, now);
        }

        self.scheduler.schedule_after(self.config.review_interval_days, Task::Review)?;
        Ok(())
    }

    /// Create a job for the store at `slot` and request its truck.
    fn dispatch(&mut self, slot: usize, now: SimTime) {
        let id = JobId(self.next_job);
        let task = Task::Delivery(id);
        let store = &mut self.stores[slot];

        match self.pool.request(task) {
            Acquire::Granted => self.scheduler.spawn(task),
            Acquire::Queued  => {}
            Acquire::Rejected => return,
        }
        self.next_job += 1;
        store.delivery = DeliveryState::Queued;
        self.jobs.insert(id, DeliveryJob::new(id, store.id, self.store_km[slot], now));
        self.center.dispatched += 1;
        debug!(
            job = %id, store = %store.id, inventory = store.inventory,
            trucks_free = self.pool.available(), %now, "dispatched"
        );
    }

    fn resume_job(&mut self, id: JobId, now: SimTime) -> SimResult<Option<DeliveryRecord>> {
        let Some((phase, store_id)) = self.jobs.get(&id).map(|j| (j.phase, j.store)) else {
            return Ok(None);
        };
        let slot = *self.slots.get(&store_id).ok_or(ScError::StoreNotFound(store_id))?;
        let fuel_price = match phase {
            JobPhase::Outbound => self.fuel_price(store_id, now),
            _ => 0.0,
        };

        let mut fleet = Fleet {
            truck:                 &self.config.truck,
            costs:                 &self.config.costs,
            breakdown_probability: self.config.breakdown_probability,
            flag_clearing:         self.config.flag_clearing,
            rng:                   &mut self.fleet_rng,
        };
        let store = &mut self.stores[slot];

        match phase {
            JobPhase::WaitingForTruck | JobPhase::Outbound => {
                let Some(job) = self.jobs.get_mut(&id) else {
                    return Ok(None);
                };
                let days = if phase == JobPhase::WaitingForTruck {
                    job.acquire(now, store, &mut self.center, &mut fleet)
                } else {
                    job.arrive(now, fuel_price, store, &mut self.center, &mut fleet)
                };
                self.scheduler.schedule_after(days, Task::Delivery(id))?;
                Ok(None)
            }
            JobPhase::Returning => {
                let Some(job) = self.jobs.remove(&id) else {
                    return Ok(None);
                };
                let record = job.finish(now, store, self.config.flag_clearing);
                if let Some(next) = self.pool.release()? {
                    self.scheduler.spawn(next);
                }
                debug!(job = %id, store = %store_id, %now, "truck released");
                self.center.deliveries.push(record);
                Ok(Some(record))
            }
        }
    }

    /// Fuel price for a store this week, or the run-wide fallback.
    fn fuel_price(&self, store: StoreId, now: SimTime) -> f64 {
        let week = self.calendar.week_start_at(now);
        self.resolver.fuel_price(store, week).unwrap_or_else(|| {
            debug!(%store, %week, fallback = self.fallback_fuel_price, "no fuel price; using fallback");
            self.fallback_fuel_price
        })
    }
}
