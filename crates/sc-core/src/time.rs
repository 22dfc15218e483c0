//! Simulated time and the calendar that keys weekly data.
//!
//! # Design
//!
//! Simulated time is a real-valued count of days since the run start, held in
//! [`SimTime`].  Customer arrivals are drawn from a continuous distribution,
//! so unlike a tick counter the clock can stop anywhere inside a day.
//!
//! The "day index" of an instant is `floor(days)`.  Day-level bookkeeping
//! (storage cost, rent, weekly demand refresh) keys off day indices, never off
//! raw floating-point comparisons.
//!
//! [`Calendar`] maps day indices onto real dates so that weekly sales and fuel
//! records, keyed by the date their week starts, can be looked up.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An instant on the virtual clock, in days since the run start.
///
/// Ordered with `f64::total_cmp`, so it can key a `BinaryHeap`.  Constructors
/// never produce NaN.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Build an instant from a day count.  NaN is mapped to zero.
    #[inline]
    pub fn from_days(days: f64) -> SimTime {
        if days.is_nan() { SimTime::ZERO } else { SimTime(days) }
    }

    /// Midnight at the start of day `day`.
    #[inline]
    pub fn start_of_day(day: u64) -> SimTime {
        SimTime(day as f64)
    }

    #[inline]
    pub fn days(self) -> f64 {
        self.0
    }

    /// Index of the simulated day containing this instant.
    #[inline]
    pub fn day_index(self) -> u64 {
        self.0.max(0.0).floor() as u64
    }

    /// The midnight that ends the current day.
    #[inline]
    pub fn next_day_start(self) -> SimTime {
        SimTime::start_of_day(self.day_index() + 1)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;

    /// Offset by `rhs` days.  Negative or NaN offsets are treated as zero so
    /// the clock can never be asked to move backwards.
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        if rhs.is_nan() || rhs <= 0.0 { self } else { SimTime(self.0 + rhs) }
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}d", self.0)
    }
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// Maps simulated day indices to calendar dates and week keys.
///
/// A week starts on `week_anchor` (Friday for the Walmart sales data, whose
/// rows are dated on Fridays).  `week_start(date)` is the most recent anchor
/// weekday on or before `date`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    pub start_date:  NaiveDate,
    pub week_anchor: Weekday,
}

impl Calendar {
    pub fn new(start_date: NaiveDate, week_anchor: Weekday) -> Self {
        Self { start_date, week_anchor }
    }

    /// Calendar date of simulated day `day`.
    pub fn date_of_day(&self, day: u64) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(day))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Start of the week containing `date`.
    pub fn week_start(&self, date: NaiveDate) -> NaiveDate {
        let back = (date.weekday().num_days_from_monday() + 7
            - self.week_anchor.num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(back as u64))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Start of the week containing simulated day `day`.
    pub fn week_start_of_day(&self, day: u64) -> NaiveDate {
        self.week_start(self.date_of_day(day))
    }

    /// Week key for an arbitrary instant.
    pub fn week_start_at(&self, t: SimTime) -> NaiveDate {
        self.week_start_of_day(t.day_index())
    }
}
