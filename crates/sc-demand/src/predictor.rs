//! The demand-prediction seam.
//!
//! The regression model itself lives outside this workspace.  The simulation
//! only needs a function from a week's features to predicted weekly revenue,
//! and tolerates that function failing.

use sc_core::StoreId;
use thiserror::Error;

/// Why a prediction could not be produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictError {
    #[error("missing feature {0}")]
    MissingFeature(&'static str),

    #[error("prediction is not a usable number: {0}")]
    NotFinite(f64),

    #[error("model error: {0}")]
    Model(String),
}

/// Features for one store-week, in the order the model was fitted on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PredictorInput {
    pub store:            StoreId,
    pub holiday:          bool,
    pub temperature:      f64,
    pub fuel_price:       f64,
    pub cpi:              f64,
    pub unemployment:     f64,
    pub prior_week_sales: f64,
}

/// An opaque weekly-revenue oracle.
///
/// Any `Fn(&PredictorInput) -> Result<f64, PredictError>` closure is a
/// predictor, so tests and callers rarely need a named type.
pub trait DemandPredictor {
    fn predict_weekly_sales(&self, input: &PredictorInput) -> Result<f64, PredictError>;
}

impl<F> DemandPredictor for F
where
    F: Fn(&PredictorInput) -> Result<f64, PredictError>,
{
    fn predict_weekly_sales(&self, input: &PredictorInput) -> Result<f64, PredictError> {
        self(input)
    }
}
