use sc_core::{ScError, StoreId};
use sc_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] ScError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("a run needs at least one store")]
    NoStores,

    #[error("store {0} is listed more than once")]
    DuplicateStore(StoreId),

    #[error("no distance from the distribution center for store {0}")]
    MissingDistance(StoreId),

    #[error("no fuel price fallback: set `fallback_fuel_price` or supply fuel data")]
    NoFuelFallback,
}

pub type SimResult<T> = Result<T, SimError>;
