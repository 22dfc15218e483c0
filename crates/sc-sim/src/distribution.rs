//! The distribution center's state and the store distance table.

use rand_distr::{Distribution, Normal};
use rustc_hash::FxHashMap;
use sc_core::{SimRng, StoreId};

use crate::{DeliveryRecord, SimError, SimResult};

// ── DistanceTable ─────────────────────────────────────────────────────────────

/// One-way distance in km from the center to each store, fixed for a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceTable {
    km: FxHashMap<StoreId, f64>,
}

impl DistanceTable {
    /// Fixed distances.  Later pairs overwrite earlier ones.
    pub fn from_pairs<I>(pairs: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (StoreId, f64)>,
    {
        let mut km = FxHashMap::default();
        for (store, d) in pairs {
            if !d.is_finite() || d < 0.0 {
                return Err(SimError::Config(format!(
                    "distance for store {store} must be a non-negative number, got {d}"
                )));
            }
            km.insert(store, d);
        }
        Ok(Self { km })
    }

    /// Draw one distance per store from a normal distribution centred on the
    /// middle of `[min_km, max_km]` with σ = range / 6, clipped to the range.
    pub fn clipped_normal(
        stores: &[StoreId],
        min_km: f64,
        max_km: f64,
        rng:    &mut SimRng,
    ) -> SimResult<Self> {
        if !(min_km.is_finite() && max_km.is_finite() && 0.0 <= min_km && min_km <= max_km) {
            return Err(SimError::Config(format!(
                "distance range must satisfy 0 <= min <= max, got [{min_km}, {max_km}]"
            )));
        }
        let normal = Normal::new((min_km + max_km) / 2.0, (max_km - min_km) / 6.0)
            .map_err(|e| SimError::Config(format!("distance distribution: {e}")))?;

        let km = stores
            .iter()
            .map(|&s| (s, normal.sample(rng.inner()).clamp(min_km, max_km)))
            .collect();
        Ok(Self { km })
    }

    /// Stores in the table, ascending.
    pub fn stores(&self) -> Vec<StoreId> {
        let mut ids: Vec<StoreId> = self.km.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[inline]
    pub fn get(&self, store: StoreId) -> Option<f64> {
        self.km.get(&store).copied()
    }

    pub fn len(&self) -> usize {
        self.km.len()
    }

    pub fn is_empty(&self) -> bool {
        self.km.is_empty()
    }
}

// ── DistributionCenter ────────────────────────────────────────────────────────

/// Running totals and the delivery log of the single distribution center.
///
/// The review loop itself lives in [`Sim`][crate::Sim], which owns the truck
/// pool and the scheduler the center dispatches onto.
#[derive(Debug, Default)]
pub struct DistributionCenter {
    pub distances:      DistanceTable,
    /// Sum of every delivery's transport cost.
    pub transport_cost: f64,
    /// Mirrors every storage accrual at the stores.
    pub storage_cost:   f64,
    /// Monthly lease paid for the whole fleet.
    pub fleet_rent:     f64,
    pub reviews:        u64,
    pub dispatched:     u64,
    /// Jobs that have unloaded, whether or not the truck is back.
    pub unloaded:       u64,
    pub units_delivered: u64,
    /// Legs that broke down, counted when rolled.
    pub breakdowns:     u64,
    /// Completed jobs, in release order.
    pub deliveries:     Vec<DeliveryRecord>,
}

impl DistributionCenter {
    pub fn new(distances: DistanceTable) -> Self {
        Self { distances, ..Self::default() }
    }
}
