//! Run configuration: named tiers, cost rates and the replenishment policy.
//!
//! A `SimConfig` is immutable once a run starts.  [`SimConfig::validate`] is
//! called by the simulation builder; any error there is fatal and the run
//! never begins.

use chrono::{NaiveDate, Weekday};

use crate::{Calendar, ScError, ScResult, SimTime};

// ── Tiers ─────────────────────────────────────────────────────────────────────

/// Store back-room size and what it costs per month.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageTier {
    /// Maximum units a store can hold.
    pub capacity:     u32,
    pub monthly_rent: f64,
}

impl StorageTier {
    /// Look up a storage tier by name.
    ///
    /// | Name     | Capacity | Monthly rent |
    /// |----------|----------|--------------|
    /// | `small`  | 100      | 500          |
    /// | `medium` | 200      | 1 000        |
    /// | `large`  | 400      | 2 000        |
    /// | `low`    | 15 000   | 15 000       |
    /// | `high`   | 30 000   | 24 000       |
    pub fn named(name: &str) -> ScResult<Self> {
        let (capacity, monthly_rent) = match name {
            "small"  => (100, 500.0),
            "medium" => (200, 1_000.0),
            "large"  => (400, 2_000.0),
            "low"    => (15_000, 15_000.0),
            "high"   => (30_000, 24_000.0),
            other => {
                return Err(ScError::UnknownTier { kind: "storage", name: other.to_owned() });
            }
        };
        Ok(Self { capacity, monthly_rent })
    }
}

/// One truck model: load, speed, fuel burn, monthly lease.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruckTier {
    /// Units per delivery.
    pub capacity:     u32,
    pub speed_kmh:    f64,
    /// Fuel units burned per kilometre; multiplied by the weekly fuel price.
    pub fuel_per_km:  f64,
    pub monthly_rent: f64,
}

impl TruckTier {
    /// `low` carries 3 000 units, `high` carries 5 000 at 1.8× the fuel burn.
    pub fn named(name: &str) -> ScResult<Self> {
        match name {
            "low" => Ok(Self {
                capacity:     3_000,
                speed_kmh:    60.0,
                fuel_per_km:  1.0,
                monthly_rent: 2_000.0,
            }),
            "high" => Ok(Self {
                capacity:     5_000,
                speed_kmh:    60.0,
                fuel_per_km:  1.8,
                monthly_rent: 4_000.0,
            }),
            other => Err(ScError::UnknownTier { kind: "truck", name: other.to_owned() }),
        }
    }

    /// One-way travel time in hours over `distance_km`.
    #[inline]
    pub fn travel_hours(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh
    }
}

/// Size of the distribution center's truck fleet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetTier {
    pub trucks: usize,
}

impl FleetTier {
    /// `low` = 15 trucks, `high` = 35 trucks.
    pub fn named(name: &str) -> ScResult<Self> {
        match name {
            "low"  => Ok(Self { trucks: 15 }),
            "high" => Ok(Self { trucks: 35 }),
            other  => Err(ScError::UnknownTier { kind: "fleet", name: other.to_owned() }),
        }
    }
}

// ── Cost model ────────────────────────────────────────────────────────────────

/// Prices and rates that turn simulated activity into money.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostRates {
    /// Revenue per unit sold; also the lost profit per stockout.
    pub unit_price:           f64,
    pub storage_per_unit_day: f64,
    /// Fixed fee per delivery.
    pub delivery_base_fee:    f64,
    /// Charged per unit carried per kilometre.
    pub load_per_unit_km:     f64,
    /// Rent falls due on every day index divisible by this.
    pub rent_period_days:     u64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            unit_price:           10.0,
            storage_per_unit_day: 0.02,
            delivery_base_fee:    100.0,
            load_per_unit_km:     0.000_01,
            rent_period_days:     30,
        }
    }
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// How the distribution center decides a store needs a delivery.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ReplenishmentPolicy {
    /// Flag when inventory drops below a fixed threshold.
    FixedReorderPoint { reorder_point: u32 },

    /// Flag when inventory drops below hourly demand × lead time, where lead
    /// time = `dock_hours` + one-way travel hours.
    SafetyStockForecast { dock_hours: f64 },

    /// Flag when free capacity can absorb a full truckload.
    TruckloadHeadroom,
}

/// When a store's "delivery in progress" flag is cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlagClearing {
    /// As soon as the goods are unloaded; the truck may still be returning.
    #[default]
    AfterOutbound,
    /// Only once the truck is back and released.
    AfterReturn,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// With the `serde` feature, fields missing from the input take their
/// [`Default`] values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Run length in days.  Events at or after the horizon never execute.
    pub horizon_days:          f64,
    /// Days between distribution-center reviews.
    pub review_interval_days:  f64,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed:                  u64,
    /// Calendar date of day 0.
    pub start_date:            NaiveDate,
    /// Weekday on which data weeks start.
    pub week_anchor:           Weekday,
    /// Default tier for stores not given an explicit spec.
    pub storage:               StorageTier,
    pub truck:                 TruckTier,
    pub fleet:                 FleetTier,
    pub costs:                 CostRates,
    /// Weekly sales are divided by this to obtain weekly units.
    pub revenue_per_unit:      f64,
    /// Chance that a single delivery leg takes twice as long.
    pub breakdown_probability: f64,
    /// Used when a (store, week) fuel price is missing.  `None` falls back to
    /// the demand service's global average.
    pub fallback_fuel_price:   Option<f64>,
    /// Maximum jobs waiting for a truck.  `None` = unbounded.
    pub queue_limit:           Option<usize>,
    pub policy:                ReplenishmentPolicy,
    pub flag_clearing:         FlagClearing,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon_days:          100.0,
            review_interval_days:  1.0,
            seed:                  42,
            start_date:            NaiveDate::from_ymd_opt(2010, 2, 5).unwrap_or_default(),
            week_anchor:           Weekday::Fri,
            storage:               StorageTier { capacity: 15_000, monthly_rent: 15_000.0 },
            truck:                 TruckTier {
                capacity:     3_000,
                speed_kmh:    60.0,
                fuel_per_km:  1.0,
                monthly_rent: 2_000.0,
            },
            fleet:                 FleetTier { trucks: 15 },
            costs:                 CostRates::default(),
            revenue_per_unit:      100.0,
            breakdown_probability: 0.005,
            fallback_fuel_price:   None,
            queue_limit:           None,
            policy:                ReplenishmentPolicy::TruckloadHeadroom,
            flag_clearing:         FlagClearing::AfterOutbound,
        }
    }
}

impl SimConfig {
    /// Default configuration with the three tiers chosen by name.
    pub fn from_tiers(storage: &str, truck: &str, fleet: &str) -> ScResult<Self> {
        Ok(Self {
            storage: StorageTier::named(storage)?,
            truck:   TruckTier::named(truck)?,
            fleet:   FleetTier::named(fleet)?,
            ..Self::default()
        })
    }

    /// The instant the run stops (exclusive).
    #[inline]
    pub fn horizon(&self) -> SimTime {
        SimTime::from_days(self.horizon_days)
    }

    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.start_date, self.week_anchor)
    }

    /// Reject configurations the run cannot start with.
    pub fn validate(&self) -> ScResult<()> {
        positive("horizon_days", self.horizon_days)?;
        positive("review_interval_days", self.review_interval_days)?;
        positive("storage.capacity", self.storage.capacity as f64)?;
        non_negative("storage.monthly_rent", self.storage.monthly_rent)?;
        positive("truck.capacity", self.truck.capacity as f64)?;
        positive("truck.speed_kmh", self.truck.speed_kmh)?;
        non_negative("truck.fuel_per_km", self.truck.fuel_per_km)?;
        non_negative("truck.monthly_rent", self.truck.monthly_rent)?;
        positive("fleet.trucks", self.fleet.trucks as f64)?;
        non_negative("costs.unit_price", self.costs.unit_price)?;
        non_negative("costs.storage_per_unit_day", self.costs.storage_per_unit_day)?;
        non_negative("costs.delivery_base_fee", self.costs.delivery_base_fee)?;
        non_negative("costs.load_per_unit_km", self.costs.load_per_unit_km)?;
        positive("costs.rent_period_days", self.costs.rent_period_days as f64)?;
        positive("revenue_per_unit", self.revenue_per_unit)?;

        if !(0.0..=1.0).contains(&self.breakdown_probability) {
            return Err(ScError::OutOfUnitRange {
                field: "breakdown_probability",
                value: self.breakdown_probability,
            });
        }
        if let Some(price) = self.fallback_fuel_price {
            non_negative("fallback_fuel_price", price)?;
        }
        if let ReplenishmentPolicy::SafetyStockForecast { dock_hours } = self.policy {
            non_negative("policy.dock_hours", dock_hours)?;
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> ScResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> ScResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScError::Config(format!("{field} must be a non-negative number, got {value}")))
    }
}
