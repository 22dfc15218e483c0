//! `DemandResolver`: turns raw lookups into weekly unit demand with fallback.

use chrono::{Days, NaiveDate};
use sc_core::StoreId;
use tracing::debug;

use crate::{DemandPredictor, DemandService, PredictorInput};

/// Where weekly unit demand comes from.
pub enum DemandSource {
    /// Weekly sales as recorded in the dataset.
    Historical,
    /// Weekly sales predicted from the week's features.
    Predicted(Box<dyn DemandPredictor>),
}

impl std::fmt::Debug for DemandSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandSource::Historical   => f.write_str("Historical"),
            DemandSource::Predicted(_) => f.write_str("Predicted(..)"),
        }
    }
}

/// Wraps an injected [`DemandService`] with the demand source and the
/// revenue-to-units conversion.
///
/// Every answer is a pure function of `(store, week_start)`.
pub struct DemandResolver {
    service:          Box<dyn DemandService>,
    source:           DemandSource,
    revenue_per_unit: f64,
}

impl DemandResolver {
    pub fn new(
        service:          Box<dyn DemandService>,
        source:           DemandSource,
        revenue_per_unit: f64,
    ) -> Self {
        Self { service, source, revenue_per_unit }
    }

    /// Weekly unit demand for a store-week.
    ///
    /// `None` means "no realistic demand": the row is missing, the value is
    /// zero, negative or non-finite, or the predictor failed.
    pub fn weekly_units(&self, store: StoreId, week_start: NaiveDate) -> Option<f64> {
        let sales = match &self.source {
            DemandSource::Historical => self.service.record(store, week_start)?.weekly_sales,
            DemandSource::Predicted(predictor) => {
                self.predicted_sales(predictor.as_ref(), store, week_start)?
            }
        };
        let units = sales / self.revenue_per_unit;
        (units.is_finite() && units > 0.0).then_some(units)
    }

    fn predicted_sales(
        &self,
        predictor:  &dyn DemandPredictor,
        store:      StoreId,
        week_start: NaiveDate,
    ) -> Option<f64> {
        let Some(current) = self.service.record(store, week_start) else {
            debug!(%store, %week_start, "no feature row; treating as no demand");
            return None;
        };
        // Prior week's actual sales, or this week's when the dataset starts here.
        let prior_week_sales = week_start
            .checked_sub_days(Days::new(7))
            .and_then(|prior| self.service.record(store, prior))
            .map_or(current.weekly_sales, |r| r.weekly_sales);

        let input = PredictorInput {
            store,
            holiday:      current.holiday,
            temperature:  current.temperature,
            fuel_price:   current.fuel_price,
            cpi:          current.cpi,
            unemployment: current.unemployment,
            prior_week_sales,
        };
        match predictor.predict_weekly_sales(&input) {
            Ok(sales) if sales.is_finite() => Some(sales),
            Ok(sales) => {
                debug!(%store, %week_start, sales, "prediction not finite; treating as no demand");
                None
            }
            Err(e) => {
                debug!(%store, %week_start, error = %e, "prediction failed; treating as no demand");
                None
            }
        }
    }

    /// Fuel price for a store-week, if recorded.
    pub fn fuel_price(&self, store: StoreId, week_start: NaiveDate) -> Option<f64> {
        self.service
            .fuel_price(store, week_start)
            .filter(|p| p.is_finite() && *p >= 0.0)
    }

    pub fn average_fuel_price(&self) -> Option<f64> {
        self.service.average_fuel_price()
    }
}

/// Mean days between customer arrivals for a weekly unit demand.
///
/// No realistic demand maps to an infinite interval, which suppresses
/// arrivals rather than failing.
pub fn interarrival_days(weekly_units: Option<f64>) -> f64 {
    match weekly_units {
        Some(units) if units.is_finite() && units > 0.0 => 7.0 / units,
        _ => f64::INFINITY,
    }
}
