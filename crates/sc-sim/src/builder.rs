//! Fluent builder for constructing a [`Sim`].

use rustc_hash::{FxHashMap, FxHashSet};
use sc_core::{ReplenishmentPolicy, ScError, SimConfig, SimRng, SimTime, StoreId};
use sc_demand::DemandResolver;
use sc_schedule::{ResourcePool, Scheduler};

use crate::sim::Task;
use crate::{
    DistanceTable, DistributionCenter, Replenishment, Sim, SimError, SimResult, Store, StoreSpec,
};

/// Seed offset of the breakdown stream.
const FLEET_STREAM: u64 = 1;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: horizon, seed, tiers, costs, policy, …
/// - [`DemandResolver`]: weekly demand and fuel prices
/// - [`DistanceTable`]: one entry per store
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                                |
/// |--------------------|--------------------------------------------------------|
/// | `.stores(v)`       | One store per distance-table entry, configured tier    |
/// | `.store_ids(ids)`  | (same, for an explicit id list)                        |
/// | `.policy(p)`       | `config.policy`                                        |
///
/// # Example
///
/// ```rust,ignore
/// let resolver = DemandResolver::new(Box::new(table), DemandSource::Historical, 100.0);
/// let mut sim = SimBuilder::new(config, resolver, distances).build()?;
/// sim.run(&mut NoopObserver)?;
/// let metrics = sim.metrics();
/// ```
pub struct SimBuilder<P: Replenishment = ReplenishmentPolicy> {
    config:    SimConfig,
    resolver:  DemandResolver,
    distances: DistanceTable,
    stores:    Option<Vec<StoreSpec>>,
    policy:    P,
}

impl SimBuilder<ReplenishmentPolicy> {
    /// Create a builder with all required inputs.  The policy comes from the
    /// configuration.
    pub fn new(config: SimConfig, resolver: DemandResolver, distances: DistanceTable) -> Self {
        let policy = config.policy;
        Self { config, resolver, distances, stores: None, policy }
    }
}

impl<P: Replenishment> SimBuilder<P> {
    /// Supply explicit per-store specs, possibly of mixed storage tiers.
    pub fn stores(mut self, specs: Vec<StoreSpec>) -> Self {
        self.stores = Some(specs);
        self
    }

    /// Stores with these ids, all of the configured storage tier.
    pub fn store_ids<I: IntoIterator<Item = StoreId>>(self, ids: I) -> Self {
        let tier = self.config.storage;
        let specs = ids
            .into_iter()
            .map(|id| StoreSpec { id, capacity: tier.capacity, monthly_rent: tier.monthly_rent })
            .collect();
        self.stores(specs)
    }

    /// Replace the replenishment policy with any other implementation.
    pub fn policy<Q: Replenishment>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:    self.config,
            resolver:  self.resolver,
            distances: self.distances,
            stores:    self.stores,
            policy,
        }
    }

    /// Validate inputs, seed every process, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        // ── Resolve and validate stores ───────────────────────────────────
        let specs = match self.stores {
            Some(specs) => specs,
            None => {
                let tier = self.config.storage;
                self.distances
                    .stores()
                    .into_iter()
                    .map(|id| StoreSpec {
                        id,
                        capacity: tier.capacity,
                        monthly_rent: tier.monthly_rent,
                    })
                    .collect()
            }
        };
        if specs.is_empty() {
            return Err(SimError::NoStores);
        }

        let mut seen = FxHashSet::default();
        let mut store_km = Vec::with_capacity(specs.len());
        for spec in &specs {
            if !seen.insert(spec.id) {
                return Err(SimError::DuplicateStore(spec.id));
            }
            if spec.capacity == 0 {
                return Err(ScError::NonPositive { field: "store capacity", value: 0.0 }.into());
            }
            if !(spec.monthly_rent.is_finite() && spec.monthly_rent >= 0.0) {
                return Err(SimError::Config(format!(
                    "monthly rent of store {} must be a non-negative number, got {}",
                    spec.id, spec.monthly_rent
                )));
            }
            let km = self.distances.get(spec.id).ok_or(SimError::MissingDistance(spec.id))?;
            store_km.push(km);
        }

        let fallback_fuel_price = self
            .config
            .fallback_fuel_price
            .or_else(|| self.resolver.average_fuel_price())
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or(SimError::NoFuelFallback)?;

        // ── Processes ─────────────────────────────────────────────────────
        let pool = ResourcePool::new(self.config.fleet.trucks, self.config.queue_limit)?;
        let mut scheduler = Scheduler::new();
        for slot in 0..specs.len() {
            scheduler.spawn(Task::Store(slot));
        }
        scheduler.schedule_at(SimTime::from_days(self.config.review_interval_days), Task::Review)?;

        let seed = self.config.seed;
        let stores: Vec<Store> = specs.iter().map(|&spec| Store::new(spec, seed)).collect();
        let slots: FxHashMap<StoreId, usize> =
            stores.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        let fleet_rng = SimRng::new(seed).child(FLEET_STREAM);

        let mut sim = Sim {
            calendar: self.config.calendar(),
            config: self.config,
            stores,
            center: DistributionCenter::new(self.distances),
            resolver: self.resolver,
            policy: self.policy,
            scheduler,
            pool,
            slots,
            store_km,
            jobs: FxHashMap::default(),
            next_job: 0,
            fleet_rng,
            fallback_fuel_price,
            day_cursor: 0,
            finished: false,
        };
        sim.open_day(0);
        Ok(sim)
    }
}
