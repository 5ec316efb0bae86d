use std::fmt;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vehicle::Vehicle;

/// Date format used when showing and reading booking dates.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// One reservation of one vehicle for one calendar day.
///
/// Bookings are identified by `id`. Two bookings with the same vehicle and
/// date can never coexist in a ledger, but the ledger still looks them up by
/// id so that cancelling always removes exactly the entry the caller holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub plate: String,
    /// Vehicle description at booking time, used for display.
    pub vehicle_label: String,
    /// The booked calendar day.
    pub date: NaiveDate,
    /// First day after the booking (exclusive end of the window).
    pub ends_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// `None` when `date` is the last day the calendar can represent, since
    /// the window would have no end.
    pub(crate) fn new(vehicle: &Vehicle, date: NaiveDate) -> Option<Self> {
        let ends_on = date.checked_add_days(Days::new(1))?;
        Some(Self {
            id: Uuid::new_v4(),
            vehicle_id: vehicle.id(),
            plate: vehicle.plate().to_string(),
            vehicle_label: vehicle.to_string(),
            date,
            ends_on,
            created_at: Utc::now(),
        })
    }

    /// Start of the covered window: midnight of the booked day.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(chrono::NaiveTime::MIN)
    }

    /// End of the covered window (exclusive): one day after the start.
    pub fn ends_at(&self) -> NaiveDateTime {
        self.ends_on.and_time(chrono::NaiveTime::MIN)
    }

    pub fn covers(&self, moment: NaiveDateTime) -> bool {
        moment >= self.starts_at() && moment < self.ends_at()
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rental of {} on {}",
            self.vehicle_label,
            self.date.format(DATE_FORMAT)
        )
    }
}
