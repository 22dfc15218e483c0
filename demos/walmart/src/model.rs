//! Log-linear weekly sales model fitted on the Walmart dataset.
//!
//! `ln(sales) = intercept + store offset + Σ coefficient × feature`

use sc_demand::{DemandPredictor, PredictError, PredictorInput};

const INTERCEPT:       f64 = 13.47;
const HOLIDAY:         f64 = 0.021_12;
const TEMPERATURE:     f64 = -2.251e-5;
const FUEL_PRICE:      f64 = -0.021_68;
const CPI:             f64 = 0.002_658;
const UNEMPLOYMENT:    f64 = -0.016_12;
const LAST_WEEK_SALES: f64 = 2.605e-7;

/// Per-store offsets relative to store 1.  Stores without an offset use 0.
const STORE_OFFSETS: [(u32, f64); 9] = [
    (2, 0.1180),
    (3, -1.0700),
    (4, 0.3601),
    (5, -1.2900),
    (6, -0.017_06),
    (7, -0.6854),
    (8, -0.4046),
    (9, -0.8236),
    (10, 0.3595),
];

pub struct LogLinearModel;

impl DemandPredictor for LogLinearModel {
    fn predict_weekly_sales(&self, input: &PredictorInput) -> Result<f64, PredictError> {
        let features = [
            ("temperature", input.temperature),
            ("fuel_price", input.fuel_price),
            ("cpi", input.cpi),
            ("unemployment", input.unemployment),
            ("prior_week_sales", input.prior_week_sales),
        ];
        if let Some((name, _)) = features.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PredictError::MissingFeature(*name));
        }

        let offset = STORE_OFFSETS
            .iter()
            .find(|(id, _)| *id == input.store.0)
            .map_or(0.0, |(_, o)| *o);

        let log_sales = INTERCEPT
            + offset
            + HOLIDAY * f64::from(u8::from(input.holiday))
            + TEMPERATURE * input.temperature
            + FUEL_PRICE * input.fuel_price
            + CPI * input.cpi
            + UNEMPLOYMENT * input.unemployment
            + LAST_WEEK_SALES * input.prior_week_sales;

        let sales = log_sales.exp();
        if sales.is_finite() { Ok(sales) } else { Err(PredictError::NotFinite(sales)) }
    }
}
