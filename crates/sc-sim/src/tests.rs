//! Unit and scenario tests for sc-sim.

#[cfg(test)]
mod support {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::NaiveDate;
    use sc_core::{FleetTier, ReplenishmentPolicy, SimConfig, StorageTier, StoreId};
    use sc_demand::{DemandResolver, DemandService, DemandSource, WeekRecord};

    use crate::{DistanceTable, NoopObserver, Sim, SimBuilder};

    /// Every store-week sells the same revenue at the same fuel price.
    pub struct ConstantDemand {
        pub weekly_sales: f64,
        pub fuel_price:   f64,
        pub lookups:      Rc<Cell<u64>>,
    }

    impl DemandService for ConstantDemand {
        fn record(&self, _store: StoreId, _week_start: NaiveDate) -> Option<WeekRecord> {
            self.lookups.set(self.lookups.get() + 1);
            Some(WeekRecord {
                weekly_sales: self.weekly_sales,
                holiday:      false,
                temperature:  60.0,
                fuel_price:   self.fuel_price,
                cpi:          210.0,
                unemployment: 8.0,
            })
        }

        fn average_fuel_price(&self) -> Option<f64> {
            Some(self.fuel_price)
        }
    }

    /// `weekly_units` units per week at 100 revenue per unit.
    pub fn resolver(weekly_units: f64) -> DemandResolver {
        counting_resolver(weekly_units).0
    }

    pub fn counting_resolver(weekly_units: f64) -> (DemandResolver, Rc<Cell<u64>>) {
        let lookups = Rc::new(Cell::new(0));
        let service = ConstantDemand {
            weekly_sales: weekly_units * 100.0,
            fuel_price:   2.5,
            lookups:      Rc::clone(&lookups),
        };
        (DemandResolver::new(Box::new(service), DemandSource::Historical, 100.0), lookups)
    }

    /// Small deterministic config: no breakdowns, 400-unit stores.
    pub fn config(horizon_days: f64, trucks: usize, policy: ReplenishmentPolicy) -> SimConfig {
        SimConfig {
            horizon_days,
            review_interval_days: 1.0,
            storage: StorageTier { capacity: 400, monthly_rent: 500.0 },
            fleet: FleetTier { trucks },
            breakdown_probability: 0.0,
            policy,
            ..SimConfig::default()
        }
    }

    pub fn distances(pairs: &[(u32, f64)]) -> DistanceTable {
        DistanceTable::from_pairs(pairs.iter().map(|&(id, km)| (StoreId(id), km))).unwrap()
    }

    pub fn run(config: SimConfig, weekly_units: f64, pairs: &[(u32, f64)]) -> Sim {
        let mut sim = SimBuilder::new(config, resolver(weekly_units), distances(pairs))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        sim
    }
}

// ── Store process ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use sc_core::{ReplenishmentPolicy, StoreId};

    use super::support::{config, counting_resolver, distances, run};
    use crate::{NoopObserver, SimBuilder};

    const NEVER: ReplenishmentPolicy = ReplenishmentPolicy::FixedReorderPoint { reorder_point: 0 };

    #[test]
    fn scenario_a_single_store_daily_arrivals() {
        let cfg = config(
            60.0,
            1_000,
            ReplenishmentPolicy::FixedReorderPoint { reorder_point: 10 },
        );
        let sim = run(cfg, 7.0, &[(1, 0.0)]);
        let store = sim.store(StoreId(1)).unwrap();
        let c = store.counters;

        assert_eq!(store.interval_days(), 1.0);
        assert_eq!(c.sales + c.stockouts, c.arrivals);
        // Poisson(60) arrivals; 3σ ≈ 23.
        assert!((37..=83).contains(&c.sales), "sales = {}", c.sales);
        assert_eq!(c.stockouts, 0);
        assert_eq!(c.rent_paid, 2.0 * 500.0);
        assert_eq!(store.inventory as u64 + c.sales, 200 + c.units_received);
        assert_eq!(c.revenue, c.sales as f64 * 10.0);
    }

    #[test]
    fn rent_is_charged_at_the_start_of_each_period() {
        for (horizon, periods) in [(30.0, 1.0), (31.0, 2.0), (45.0, 2.0), (60.0, 2.0), (61.0, 3.0)] {
            let sim = run(config(horizon, 1, NEVER), 0.0, &[(1, 0.0)]);
            assert_eq!(sim.stores[0].counters.rent_paid, periods * 500.0, "horizon {horizon}");
        }
    }

    #[test]
    fn empty_store_records_stockouts() {
        let cfg = config(30.0, 1, NEVER);
        let sim = run(cfg, 70.0, &[(1, 0.0)]);
        let c = sim.stores[0].counters;

        assert_eq!(sim.stores[0].inventory, 0);
        assert_eq!(c.sales, 200);
        assert!(c.stockouts > 0);
        assert_eq!(c.lost_profit, c.stockouts as f64 * 10.0);
        assert_eq!(c.sales + c.stockouts, c.arrivals);
    }

    #[test]
    fn zero_demand_suppresses_arrivals() {
        let sim = run(config(30.0, 1, NEVER), 0.0, &[(1, 0.0)]);
        let c = sim.stores[0].counters;
        assert_eq!(c.arrivals, 0);
        assert!(sim.stores[0].interval_days().is_infinite());
        // Daily bookkeeping still happens.
        assert!((c.storage_cost - 30.0 * 200.0 * 0.02).abs() < 1e-9);
        assert_eq!(c.rent_paid, 500.0);
    }

    #[test]
    fn rate_is_recomputed_once_per_week() {
        let (resolver, lookups) = counting_resolver(7.0);
        let mut sim = SimBuilder::new(
            config(28.0, 1, NEVER),
            resolver,
            distances(&[(1, 10.0), (2, 20.0)]),
        )
        .build()
        .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        assert_eq!(lookups.get(), 8);
        for store in &sim.stores {
            assert_eq!(store.counters.rate_updates, 4);
        }
    }

    #[test]
    fn storage_is_mirrored_at_the_center() {
        let sim = run(config(45.0, 2, NEVER), 14.0, &[(1, 0.0), (2, 0.0)]);
        let m = sim.metrics();
        assert!(m.total_storage > 0.0);
        assert!((m.center_storage - m.total_storage).abs() < 1e-6);
    }
}

// ── Replenishment policies ────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use chrono::NaiveDate;
    use sc_core::{ReplenishmentPolicy, SimTime, StoreId, TruckTier};

    use super::support::{config, resolver, run};
    use crate::{PolicyContext, Replenishment, Store, StoreSpec};

    fn store(capacity: u32) -> Store {
        Store::new(StoreSpec { id: StoreId(1), capacity, monthly_rent: 0.0 }, 1)
    }

    fn decide(policy: ReplenishmentPolicy, store: &Store, weekly_units: f64, km: f64) -> bool {
        let truck = TruckTier::named("low").unwrap();
        let resolver = resolver(weekly_units);
        let ctx = PolicyContext {
            now:         SimTime::ZERO,
            week_start:  NaiveDate::from_ymd_opt(2010, 2, 5).unwrap(),
            distance_km: km,
            truck:       &truck,
            resolver:    &resolver,
        };
        policy.decide(store, &ctx)
    }

    #[test]
    fn fixed_reorder_point_is_strict() {
        let s = store(400); // inventory 200
        let at = |rp| decide(ReplenishmentPolicy::FixedReorderPoint { reorder_point: rp }, &s, 7.0, 0.0);
        assert!(at(201));
        assert!(!at(200));
    }

    #[test]
    fn safety_stock_uses_hourly_demand_times_lead_time() {
        // 1 680 units/week = 10/hour; lead = 12 h dock + 60 km / 60 km/h = 13 h.
        let policy = ReplenishmentPolicy::SafetyStockForecast { dock_hours: 12.0 };
        assert!(decide(policy, &store(200), 1_680.0, 60.0)); // 100 < 130
        assert!(!decide(policy, &store(400), 1_680.0, 60.0)); // 200 >= 130
    }

    #[test]
    fn scenario_c_zero_demand_is_never_flagged() {
        let policy = ReplenishmentPolicy::SafetyStockForecast { dock_hours: 12.0 };
        let mut empty = store(400);
        empty.inventory = 0;
        assert!(!decide(policy, &empty, 0.0, 300.0));

        let sim = run(config(30.0, 5, policy), 0.0, &[(1, 300.0), (2, 50.0)]);
        assert_eq!(sim.metrics().deliveries, 0);
        assert_eq!(sim.center.dispatched, 0);
    }

    #[test]
    fn truckload_headroom() {
        let low_truck = 3_000;
        let policy = ReplenishmentPolicy::TruckloadHeadroom;
        assert!(decide(policy, &store(2 * low_truck), 0.0, 0.0)); // headroom 3 000
        assert!(!decide(policy, &store(2 * low_truck - 2), 0.0, 0.0)); // headroom 2 999
    }

    #[test]
    fn closures_are_policies() {
        let always = |_: &Store, _: &PolicyContext<'_>| true;
        let truck = TruckTier::named("low").unwrap();
        let resolver = resolver(0.0);
        let ctx = PolicyContext {
            now:         SimTime::ZERO,
            week_start:  NaiveDate::from_ymd_opt(2010, 2, 5).unwrap(),
            distance_km: 0.0,
            truck:       &truck,
            resolver:    &resolver,
        };
        assert!(always.decide(&store(10), &ctx));
    }
}

// ── Distribution center and deliveries ────────────────────────────────────────

#[cfg(test)]
mod delivery_tests {
    use sc_core::{CostRates, FlagClearing, ReplenishmentPolicy, StoreId, TruckTier};
    use sc_demand::{DemandResolver, DemandSource, SalesTable};

    use super::support::{config, distances, resolver, run};
    use crate::{DeliveryState, NoopObserver, SimBuilder, SimError, StoreSpec, transport_cost};

    const ALWAYS: ReplenishmentPolicy = ReplenishmentPolicy::FixedReorderPoint { reorder_point: 1_000 };

    #[test]
    fn scenario_b_single_truck_never_overlaps() {
        let sim = run(config(3.0, 1, ALWAYS), 0.0, &[(1, 60.0), (2, 60.0)]);
        let log = &sim.center.deliveries;

        assert!(log.len() >= 2);
        assert_eq!(log[0].requested_at, log[1].requested_at);
        assert_ne!(log[0].store, log[1].store);
        for pair in log.windows(2) {
            assert!(pair[1].acquired_at >= pair[0].released_at, "{pair:?}");
        }
        assert_eq!(sim.metrics().peak_trucks_in_use, 1);
    }

    #[test]
    fn equal_inventory_ties_break_by_store_id() {
        let mut sim = SimBuilder::new(config(1.5, 1, ALWAYS), resolver(0.0), distances(&[(1, 60.0), (2, 60.0)]))
            .store_ids([StoreId(2), StoreId(1)])
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.center.deliveries[0].store, StoreId(1));
    }

    #[test]
    fn most_depleted_store_is_served_first() {
        let specs = vec![
            StoreSpec { id: StoreId(1), capacity: 400, monthly_rent: 0.0 },
            StoreSpec { id: StoreId(2), capacity: 100, monthly_rent: 0.0 },
        ];
        let mut sim = SimBuilder::new(config(1.5, 1, ALWAYS), resolver(0.0), distances(&[(1, 60.0), (2, 60.0)]))
            .stores(specs)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let first = sim.center.deliveries[0];
        assert_eq!(first.store, StoreId(2));
        assert_eq!(first.quantity, 50);
        assert_eq!(sim.store(StoreId(2)).unwrap().inventory, 100);
    }

    #[test]
    fn delivery_fills_to_capacity_and_charges_both_ledgers() {
        let sim = run(config(1.5, 1, ALWAYS), 0.0, &[(1, 120.0)]);
        let record = sim.center.deliveries[0];
        let truck = TruckTier::named("low").unwrap();

        assert_eq!(record.quantity, 200);
        assert_eq!(record.fuel_price, 2.5);
        assert!((record.arrived_at - record.acquired_at - 2.0 / 24.0).abs() < 1e-12);
        let expected = transport_cost(120.0, 2.5, 200, &truck, &CostRates::default());
        assert_eq!(record.cost, expected);
        assert_eq!(sim.stores[0].counters.transport_cost, expected);
        assert_eq!(sim.center.transport_cost, expected);
        assert_eq!(sim.stores[0].inventory, 400);
    }

    #[test]
    fn transport_cost_formula() {
        let truck = TruckTier::named("low").unwrap();
        let cost = transport_cost(100.0, 2.5, 200, &truck, &CostRates::default());
        assert!((cost - (100.0 + 250.0 + 0.2)).abs() < 1e-9);
    }

    #[test]
    fn breakdown_doubles_each_leg() {
        let mut cfg = config(1.5, 1, ALWAYS);
        cfg.breakdown_probability = 1.0;
        let sim = run(cfg, 0.0, &[(1, 60.0)]);
        let record = sim.center.deliveries[0];

        assert!(record.outbound_breakdown && record.return_breakdown);
        assert!((record.arrived_at - record.acquired_at - 2.0 / 24.0).abs() < 1e-12);
        assert!((record.released_at - record.arrived_at - 2.0 / 24.0).abs() < 1e-12);
        assert_eq!(sim.metrics().breakdowns, 2 * sim.metrics().deliveries);
    }

    #[test]
    fn truck_returning_at_horizon_counts_as_delivered() {
        // 600 km at 60 km/h: unloads at 1.42, back at 1.83.
        let sim = run(config(1.5, 1, ALWAYS), 0.0, &[(1, 600.0)]);
        let m = sim.metrics();
        let store = &m.stores[0];

        assert!(sim.center.deliveries.is_empty());
        assert_eq!(sim.jobs_in_flight(), 1);
        assert_eq!(sim.trucks_in_use(), 1);
        assert_eq!(m.deliveries, 1);
        assert_eq!(m.deliveries_completed, 0);
        assert_eq!(m.deliveries, store.deliveries);
        assert_eq!(m.units_delivered, 200);
        assert_eq!(m.units_delivered, store.units_received);
        assert_eq!(m.total_transport, store.transport_cost);
        assert!(m.total_transport > 0.0);
    }

    #[test]
    fn breakdowns_count_when_each_leg_is_rolled() {
        let mut cfg = config(1.2, 1, ALWAYS);
        cfg.breakdown_probability = 1.0;
        // Outbound doubled to 0.83 days: still on the road at the horizon.
        let sim = run(cfg, 0.0, &[(1, 600.0)]);
        let m = sim.metrics();

        assert_eq!(m.deliveries, 0);
        assert_eq!(m.units_delivered, 0);
        assert_eq!(m.breakdowns, 1);
    }

    #[test]
    fn flag_cleared_after_return_keeps_one_truck_per_store() {
        let mut cfg = config(10.0, 10, ALWAYS);
        cfg.review_interval_days = 0.25;
        cfg.flag_clearing = FlagClearing::AfterReturn;
        let sim = run(cfg, 0.0, &[(1, 1_440.0)]);

        assert_eq!(sim.metrics().peak_trucks_in_use, 1);
        for pair in sim.center.deliveries.windows(2) {
            assert!(pair[1].acquired_at >= pair[0].released_at);
        }
    }

    #[test]
    fn flag_cleared_after_outbound_allows_overlap() {
        let mut cfg = config(10.0, 10, ALWAYS);
        cfg.review_interval_days = 0.25;
        cfg.flag_clearing = FlagClearing::AfterOutbound;
        let sim = run(cfg, 0.0, &[(1, 1_440.0)]);

        assert!(sim.metrics().peak_trucks_in_use >= 2);
    }

    #[test]
    fn queue_limit_zero_dispatches_only_to_free_trucks() {
        let mut cfg = config(1.5, 1, ALWAYS);
        cfg.queue_limit = Some(0);
        let sim = run(cfg, 0.0, &[(1, 1_440.0), (2, 1_440.0)]);

        assert_eq!(sim.center.dispatched, 1);
        assert_eq!(sim.jobs_in_flight(), 1);
        assert_eq!(sim.trucks_in_use(), 1);
        assert_eq!(sim.store(StoreId(1)).unwrap().delivery, DeliveryState::InTransit);
        assert_eq!(sim.store(StoreId(2)).unwrap().delivery, DeliveryState::Idle);
    }

    #[test]
    fn queued_store_is_not_dispatched_twice() {
        // One truck busy for two days; store 2 waits in the queue through
        // several reviews.
        let mut cfg = config(2.5, 1, ALWAYS);
        cfg.flag_clearing = FlagClearing::AfterReturn;
        let sim = run(cfg, 0.0, &[(1, 1_440.0), (2, 1_440.0)]);
        assert_eq!(sim.center.dispatched, 2);
        assert_eq!(sim.store(StoreId(2)).unwrap().delivery, DeliveryState::Queued);
    }

    #[test]
    fn missing_fuel_price_uses_configured_fallback() {
        let mut cfg = config(1.5, 1, ALWAYS);
        cfg.fallback_fuel_price = Some(3.0);
        let resolver = DemandResolver::new(Box::new(SalesTable::new()), DemandSource::Historical, 100.0);
        let mut sim = SimBuilder::new(cfg, resolver, distances(&[(1, 60.0)])).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();

        assert_eq!(sim.center.deliveries[0].fuel_price, 3.0);
    }

    #[test]
    fn no_fuel_fallback_is_a_build_error() {
        let resolver = DemandResolver::new(Box::new(SalesTable::new()), DemandSource::Historical, 100.0);
        let err = SimBuilder::new(config(1.5, 1, ALWAYS), resolver, distances(&[(1, 60.0)]))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::NoFuelFallback));
    }
}

// ── Run loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use chrono::NaiveDate;
    use sc_core::{ReplenishmentPolicy, ScError, SimTime, StoreId};

    use super::support::{config, distances, resolver, run};
    use crate::{
        DeliveryRecord, DistributionCenter, SimBuilder, SimError, SimObserver, Store, StoreSpec,
    };

    const ALWAYS: ReplenishmentPolicy = ReplenishmentPolicy::FixedReorderPoint { reorder_point: 1_000 };

    #[derive(Default)]
    struct Invariants {
        fleet:       usize,
        violations:  Vec<String>,
        days:        Vec<u64>,
        last_costs:  (f64, f64, f64),
        deliveries:  usize,
        ended:       bool,
    }

    impl SimObserver for Invariants {
        fn on_step(&mut self, now: SimTime, stores: &[Store], trucks_in_use: usize) {
            if trucks_in_use > self.fleet {
                self.violations.push(format!("{now}: {trucks_in_use} trucks in use"));
            }
            for s in stores {
                if s.inventory > s.capacity {
                    self.violations.push(format!("{now}: {} over capacity", s.id));
                }
                if s.counters.sales + s.counters.stockouts != s.counters.arrivals {
                    self.violations.push(format!("{now}: {} arrivals mismatch", s.id));
                }
            }
        }

        fn on_day_end(&mut self, day: u64, _date: NaiveDate, _stores: &[Store], center: &DistributionCenter) {
            let costs = (center.transport_cost, center.storage_cost, center.fleet_rent);
            if costs.0 < self.last_costs.0 || costs.1 < self.last_costs.1 || costs.2 < self.last_costs.2 {
                self.violations.push(format!("day {day}: a cost total decreased"));
            }
            self.last_costs = costs;
            self.days.push(day);
        }

        fn on_delivery(&mut self, _record: &DeliveryRecord) {
            self.deliveries += 1;
        }

        fn on_sim_end(&mut self, _now: SimTime) {
            self.ended = true;
        }
    }

    fn busy_config() -> sc_core::SimConfig {
        let mut cfg = config(40.0, 2, ReplenishmentPolicy::FixedReorderPoint { reorder_point: 150 });
        cfg.breakdown_probability = 0.3;
        cfg
    }

    const BUSY_STORES: &[(u32, f64)] = &[(1, 80.0), (2, 200.0), (3, 35.0), (4, 500.0)];

    #[test]
    fn invariants_hold_at_every_step() {
        let mut sim = SimBuilder::new(busy_config(), resolver(60.0), distances(BUSY_STORES))
            .build()
            .unwrap();
        let mut obs = Invariants { fleet: 2, ..Default::default() };
        sim.run(&mut obs).unwrap();

        assert!(obs.violations.is_empty(), "{:?}", obs.violations);
        assert_eq!(obs.days, (0..40).collect::<Vec<_>>());
        assert_eq!(obs.deliveries, sim.center.deliveries.len());
        assert!(obs.deliveries > 0);
        assert!(obs.ended);
        assert_eq!(sim.now(), SimTime::from_days(40.0));
    }

    #[test]
    fn same_seed_same_results() {
        let a = run(busy_config(), 60.0, BUSY_STORES);
        let b = run(busy_config(), 60.0, BUSY_STORES);
        assert_eq!(a.metrics(), b.metrics());
        assert_eq!(a.center.deliveries, b.center.deliveries);
    }

    #[test]
    fn different_seed_different_demand() {
        let a = run(busy_config(), 60.0, BUSY_STORES);
        let mut cfg = busy_config();
        cfg.seed = 7;
        let b = run(cfg, 60.0, BUSY_STORES);
        assert_ne!(a.metrics(), b.metrics());
    }

    #[test]
    fn metrics_are_idempotent() {
        let mut sim = run(busy_config(), 60.0, BUSY_STORES);
        let first = sim.metrics();
        assert_eq!(first, sim.metrics());

        // A finished run does not advance again.
        sim.run(&mut crate::NoopObserver).unwrap();
        assert_eq!(first, sim.metrics());
    }

    #[test]
    fn profit_identities() {
        let m = run(busy_config(), 60.0, BUSY_STORES).metrics();
        assert_eq!(m.total_rent, m.store_rent + m.fleet_rent);
        assert_eq!(m.final_profit, m.total_revenue - m.total_transport - m.total_storage - m.total_rent);
        assert_eq!(m.net_profit, m.final_profit - m.total_lost_profit);
        assert_eq!(m.stores.len(), 4);
        // Rent falls due on days 0 and 30.
        assert_eq!(m.store_rent, 4.0 * 2.0 * 500.0);
        assert_eq!(m.fleet_rent, 2.0 * 2.0 * 2_000.0);
    }

    #[test]
    fn events_at_the_horizon_never_run() {
        let sim = run(config(5.0, 1, ReplenishmentPolicy::FixedReorderPoint { reorder_point: 0 }), 0.0, &[(1, 0.0)]);
        assert_eq!(sim.center.reviews, 4);
    }

    #[test]
    fn builder_rejects_bad_inputs() {
        let cfg = || config(10.0, 1, ALWAYS);

        let missing = SimBuilder::new(cfg(), resolver(7.0), distances(&[(1, 10.0)]))
            .store_ids([StoreId(1), StoreId(2)])
            .build();
        assert!(matches!(missing, Err(SimError::MissingDistance(StoreId(2)))));

        let dup = SimBuilder::new(cfg(), resolver(7.0), distances(&[(1, 10.0)]))
            .store_ids([StoreId(1), StoreId(1)])
            .build();
        assert!(matches!(dup, Err(SimError::DuplicateStore(StoreId(1)))));

        let none = SimBuilder::new(cfg(), resolver(7.0), distances(&[])).build();
        assert!(matches!(none, Err(SimError::NoStores)));

        let zero_cap = SimBuilder::new(cfg(), resolver(7.0), distances(&[(1, 10.0)]))
            .stores(vec![StoreSpec { id: StoreId(1), capacity: 0, monthly_rent: 0.0 }])
            .build();
        assert!(matches!(zero_cap, Err(SimError::Core(ScError::NonPositive { .. }))));

        let mut bad = cfg();
        bad.horizon_days = 0.0;
        let horizon = SimBuilder::new(bad, resolver(7.0), distances(&[(1, 10.0)])).build();
        assert!(matches!(horizon, Err(SimError::Core(ScError::NonPositive { field: "horizon_days", .. }))));
    }

    #[test]
    fn distances_are_clipped_to_range() {
        let ids: Vec<StoreId> = (1..=200).map(StoreId).collect();
        let mut rng = sc_core::SimRng::new(3);
        let table = crate::DistanceTable::clipped_normal(&ids, 10.0, 300.0, &mut rng).unwrap();
        assert_eq!(table.len(), 200);
        for id in ids {
            let d = table.get(id).unwrap();
            assert!((10.0..=300.0).contains(&d));
        }
        assert!(crate::DistanceTable::clipped_normal(&[StoreId(1)], 5.0, 1.0, &mut rng).is_err());
    }
}
