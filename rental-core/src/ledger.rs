//! The booking ledger: the only place bookings are created and cancelled.
//!
//! A vehicle can be booked on any number of distinct days, but never twice
//! on the same day. While the ledger holds at least one booking for a
//! vehicle, that vehicle's rented flag is set; the ledger is the only writer
//! of that flag.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::{RentalError, Result};
use crate::models::{Booking, Vehicle};

#[derive(Debug)]
pub struct Ledger {
    bookings: Vec<Booking>,
    clock: Box<dyn Clock>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            bookings: Vec::new(),
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Book `vehicle` for `date`.
    ///
    /// Today is a valid date. A failed call leaves the ledger and the
    /// vehicle untouched.
    pub fn reserve(&mut self, vehicle: &mut Vehicle, date: NaiveDate) -> Result<Booking> {
        let today = self.clock.today();
        if date < today {
            tracing::warn!(plate = vehicle.plate(), %date, %today, "Rejected booking in the past");
            return Err(RentalError::InvalidDate { date, today });
        }

        if self.is_booked(vehicle.id(), date) {
            tracing::warn!(plate = vehicle.plate(), %date, "Rejected double booking");
            return Err(RentalError::AlreadyBooked {
                plate: vehicle.plate().to_string(),
                date,
            });
        }

        let booking = Booking::new(vehicle, date).ok_or_else(|| {
            RentalError::InvalidArgument(format!(
                "no day follows {}, booking window has no end",
                date
            ))
        })?;
        vehicle.set_rented(true);
        self.bookings.push(booking.clone());

        tracing::info!(
            booking_id = %booking.id,
            plate = vehicle.plate(),
            %date,
            "Booking created"
        );
        Ok(booking)
    }

    /// Cancel the booking with `booking_id`, which must belong to `vehicle`.
    ///
    /// The removed booking is returned; its id no longer matches anything in
    /// the ledger.
    pub fn cancel(&mut self, vehicle: &mut Vehicle, booking_id: Uuid) -> Result<Booking> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == booking_id && b.vehicle_id == vehicle.id())
            .ok_or_else(|| RentalError::NotFound(format!("booking {}", booking_id)))?;

        let booking = self.bookings.remove(index);
        if !self.has_bookings(vehicle.id()) {
            vehicle.set_rented(false);
        }

        tracing::info!(
            booking_id = %booking.id,
            plate = vehicle.plate(),
            date = %booking.date,
            "Booking cancelled"
        );
        Ok(booking)
    }

    /// Drop every booking of a vehicle that is leaving the fleet.
    pub fn release_vehicle(&mut self, vehicle: &mut Vehicle) -> Vec<Booking> {
        let id = vehicle.id();
        let (released, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.bookings)
            .into_iter()
            .partition(|b| b.vehicle_id == id);
        self.bookings = kept;
        vehicle.set_rented(false);

        if !released.is_empty() {
            tracing::info!(
                plate = vehicle.plate(),
                count = released.len(),
                "Released bookings of removed vehicle"
            );
        }
        released
    }

    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, booking_id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    pub fn bookings_for(&self, vehicle_id: Uuid) -> impl Iterator<Item = &Booking> {
        self.bookings
            .iter()
            .filter(move |b| b.vehicle_id == vehicle_id)
    }

    pub fn is_booked(&self, vehicle_id: Uuid, date: NaiveDate) -> bool {
        self.bookings_for(vehicle_id).any(|b| b.date == date)
    }

    fn has_bookings(&self, vehicle_id: Uuid) -> bool {
        self.bookings_for(vehicle_id).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn ledger() -> Ledger {
        Ledger::with_clock(Box::new(FixedClock(today())))
    }

    #[test]
    fn test_today_is_bookable() {
        let mut ledger = ledger();
        let mut car = Vehicle::passenger("ABC-123", "Toyota Corolla", 12000, false);

        let booking = ledger.reserve(&mut car, today()).unwrap();
        assert_eq!(booking.date, today());
        assert!(car.is_rented());
    }

    #[test]
    fn test_last_representable_day_is_rejected() {
        let mut ledger = ledger();
        let mut car = Vehicle::passenger("ABC-123", "Toyota Corolla", 12000, false);

        let result = ledger.reserve(&mut car, NaiveDate::MAX);
        assert!(matches!(result, Err(RentalError::InvalidArgument(_))));
        assert!(ledger.is_empty());
        assert!(car.is_available());
    }

    #[test]
    fn test_flag_stays_set_until_last_booking_is_cancelled() {
        let mut ledger = ledger();
        let mut car = Vehicle::passenger("ABC-123", "Toyota Corolla", 12000, false);
        let first = ledger.reserve(&mut car, today()).unwrap();
        let second = ledger.reserve(&mut car, today().succ_opt().unwrap()).unwrap();

        ledger.cancel(&mut car, first.id).unwrap();
        assert!(car.is_rented());

        ledger.cancel(&mut car, second.id).unwrap();
        assert!(car.is_available());
    }

    #[test]
    fn test_cancel_with_wrong_vehicle_is_not_found() {
        let mut ledger = ledger();
        let mut car = Vehicle::passenger("ABC-123", "Toyota Corolla", 12000, false);
        let mut other = Vehicle::passenger("DEF-456", "Nissan Leaf", 15000, true);
        let booking = ledger.reserve(&mut car, today()).unwrap();

        let result = ledger.cancel(&mut other, booking.id);
        assert!(matches!(result, Err(RentalError::NotFound(_))));
        assert_eq!(ledger.len(), 1);
        assert!(car.is_rented());
    }

    #[test]
    fn test_release_vehicle_keeps_other_bookings() {
        let mut ledger = ledger();
        let mut car = Vehicle::passenger("ABC-123", "Toyota Corolla", 12000, false);
        let mut truck = Vehicle::truck("GHI-789", "Ford Transit", 20000, 1000);
        ledger.reserve(&mut car, today()).unwrap();
        let kept = ledger.reserve(&mut truck, today()).unwrap();
        ledger.reserve(&mut car, today().succ_opt().unwrap()).unwrap();

        let released = ledger.release_vehicle(&mut car);
        assert_eq!(released.len(), 2);
        assert_eq!(ledger.list(), &[kept]);
        assert!(car.is_available());
    }
}
