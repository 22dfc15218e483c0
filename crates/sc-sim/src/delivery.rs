//! Delivery jobs: one truck, one store, there and back.
//!
//! # Phases
//!
//! ```text
//! WaitingForTruck ──acquire──▶ Outbound ──arrive──▶ Returning ──release──▶ done
//!   (queued on the pool)        (travel)   unload     (travel)    record
//! ```
//!
//! Each leg rolls its own breakdown; a breakdown doubles that leg's travel
//! time and never aborts the job.

use sc_core::{CostRates, FlagClearing, JobId, SimRng, SimTime, StoreId, TruckTier};
use tracing::debug;

use crate::{DeliveryState, DistributionCenter, Store};

/// Transport cost of one delivery.
///
/// `base fee + distance × fuel_price × fuel_per_km + quantity × distance × load rate`
pub fn transport_cost(
    distance_km: f64,
    fuel_price:  f64,
    quantity:    u32,
    truck:       &TruckTier,
    costs:       &CostRates,
) -> f64 {
    costs.delivery_base_fee
        + distance_km * fuel_price * truck.fuel_per_km
        + quantity as f64 * distance_km * costs.load_per_unit_km
}

/// A completed delivery.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DeliveryRecord {
    pub job:                JobId,
    pub store:              StoreId,
    pub requested_at:       SimTime,
    pub acquired_at:        SimTime,
    pub arrived_at:         SimTime,
    pub released_at:        SimTime,
    pub quantity:           u32,
    pub distance_km:        f64,
    pub fuel_price:         f64,
    pub cost:               f64,
    pub outbound_breakdown: bool,
    pub return_breakdown:   bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum JobPhase {
    WaitingForTruck,
    Outbound,
    Returning,
}

/// Knobs shared by every leg of every job.
pub(crate) struct Fleet<'a> {
    pub truck:                 &'a TruckTier,
    pub costs:                 &'a CostRates,
    pub breakdown_probability: f64,
    pub flag_clearing:         FlagClearing,
    pub rng:                   &'a mut SimRng,
}

impl Fleet<'_> {
    /// Travel time of one leg in days, and whether it broke down.
    fn leg(&mut self, distance_km: f64) -> (f64, bool) {
        let days = self.truck.travel_hours(distance_km) / 24.0;
        let breakdown = self.rng.gen_bool(self.breakdown_probability);
        (if breakdown { days * 2.0 } else { days }, breakdown)
    }
}

pub(crate) struct DeliveryJob {
    pub id:             JobId,
    pub store:          StoreId,
    pub phase:          JobPhase,
    distance_km:        f64,
    requested_at:       SimTime,
    acquired_at:        SimTime,
    arrived_at:         SimTime,
    quantity:           u32,
    fuel_price:         f64,
    cost:               f64,
    outbound_breakdown: bool,
    return_breakdown:   bool,
}

impl DeliveryJob {
    pub fn new(id: JobId, store: StoreId, distance_km: f64, requested_at: SimTime) -> Self {
        Self {
            id,
            store,
            phase: JobPhase::WaitingForTruck,
            distance_km,
            requested_at,
            acquired_at: requested_at,
            arrived_at: requested_at,
            quantity: 0,
            fuel_price: 0.0,
            cost: 0.0,
            outbound_breakdown: false,
            return_breakdown: false,
        }
    }

    /// The truck is ours.  Returns the outbound travel time in days.
    pub fn acquire(
        &mut self,
        now:    SimTime,
        store:  &mut Store,
        center: &mut DistributionCenter,
        fleet:  &mut Fleet<'_>,
    ) -> f64 {
        self.acquired_at = now;
        store.delivery = DeliveryState::InTransit;
        let (days, breakdown) = fleet.leg(self.distance_km);
        self.outbound_breakdown = breakdown;
        center.breakdowns += breakdown as u64;
        self.phase = JobPhase::Outbound;
        debug!(job = %self.id, store = %self.store, %now, days, breakdown, "truck acquired");
        days
    }

    /// Unload at the store.  Returns the return travel time in days.
    pub fn arrive(
        &mut self,
        now:        SimTime,
        fuel_price: f64,
        store:      &mut Store,
        center:     &mut DistributionCenter,
        fleet:      &mut Fleet<'_>,
    ) -> f64 {
        self.arrived_at = now;
        self.fuel_price = fuel_price;
        self.quantity = store.receive(fleet.truck.capacity.min(store.headroom()));
        self.cost = transport_cost(self.distance_km, fuel_price, self.quantity, fleet.truck, fleet.costs);

        store.counters.transport_cost += self.cost;
        store.counters.deliveries += 1;
        center.transport_cost += self.cost;
        center.unloaded += 1;
        center.units_delivered += self.quantity as u64;
        if fleet.flag_clearing == FlagClearing::AfterOutbound {
            store.delivery = DeliveryState::Idle;
        }

        let (days, breakdown) = fleet.leg(self.distance_km);
        self.return_breakdown = breakdown;
        center.breakdowns += breakdown as u64;
        self.phase = JobPhase::Returning;
        debug!(
            job = %self.id, store = %self.store, %now,
            quantity = self.quantity, cost = self.cost, "delivery unloaded"
        );
        days
    }

    /// Back at the center.  The caller releases the truck.
    pub fn finish(self, now: SimTime, store: &mut Store, flag_clearing: FlagClearing) -> DeliveryRecord {
        if flag_clearing == FlagClearing::AfterReturn {
            store.delivery = DeliveryState::Idle;
        }
        DeliveryRecord {
            job:                self.id,
            store:              self.store,
            requested_at:       self.requested_at,
            acquired_at:        self.acquired_at,
            arrived_at:         self.arrived_at,
            released_at:        now,
            quantity:           self.quantity,
            distance_km:        self.distance_km,
            fuel_price:         self.fuel_price,
            cost:               self.cost,
            outbound_breakdown: self.outbound_breakdown,
            return_breakdown:   self.return_breakdown,
        }
    }
}
