//! Source of "today" for booking date validation.

use std::fmt::Debug;

use chrono::{Local, NaiveDate};

/// Supplies the current calendar day.
///
/// Bookings are compared at day precision, so the clock only ever hands out
/// dates. Tests pin the day with [`FixedClock`].
pub trait Clock: Debug {
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
