//! A rental company: one fleet plus one ledger.

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{RentalError, Result};
use crate::fleet::Fleet;
use crate::ledger::Ledger;
use crate::models::{Booking, CreateVehicleInput, Vehicle};

/// Owns a fleet and the ledger of bookings made on it.
///
/// Every booking operation first checks that the vehicle belongs to this
/// company, so the ledger never sees a vehicle the company does not own.
#[derive(Debug)]
pub struct RentalCompany {
    name: String,
    fleet: Fleet,
    ledger: Ledger,
}

impl RentalCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fleet: Fleet::new(),
            ledger: Ledger::new(),
        }
    }

    pub fn with_clock(name: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            fleet: Fleet::new(),
            ledger: Ledger::with_clock(clock),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn today(&self) -> NaiveDate {
        self.ledger.today()
    }

    // ============================================================
    // Fleet
    // ============================================================

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<Uuid> {
        self.fleet.add(vehicle)
    }

    pub fn add_vehicle_from_input(&mut self, input: CreateVehicleInput) -> Result<Uuid> {
        self.fleet.add_from_input(input)
    }

    /// Remove a vehicle, dropping any bookings it still has.
    pub fn remove_vehicle(&mut self, id: Uuid) -> Result<Vehicle> {
        let mut vehicle = self.fleet.remove(id)?;
        self.ledger.release_vehicle(&mut vehicle);
        Ok(vehicle)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.fleet.list()
    }

    /// Rental cost of a fleet vehicle for `days` days.
    pub fn quote(&self, vehicle_id: Uuid, days: i64) -> Result<u64> {
        self.owned(vehicle_id)?.rental_cost(days)
    }

    // ============================================================
    // Bookings
    // ============================================================

    pub fn rent_vehicle(&mut self, vehicle_id: Uuid, date: NaiveDate) -> Result<Booking> {
        let vehicle = self
            .fleet
            .get_mut(vehicle_id)
            .ok_or_else(|| not_owned(vehicle_id))?;
        self.ledger.reserve(vehicle, date)
    }

    pub fn cancel_rental(&mut self, booking_id: Uuid) -> Result<Booking> {
        let vehicle_id = self
            .ledger
            .get(booking_id)
            .map(|b| b.vehicle_id)
            .ok_or_else(|| RentalError::NotFound(format!("booking {}", booking_id)))?;
        let vehicle = self
            .fleet
            .get_mut(vehicle_id)
            .ok_or_else(|| not_owned(vehicle_id))?;
        self.ledger.cancel(vehicle, booking_id)
    }

    pub fn rentals(&self) -> &[Booking] {
        self.ledger.list()
    }

    pub fn list_rentals(&self) -> Vec<String> {
        self.ledger.list().iter().map(ToString::to_string).collect()
    }

    fn owned(&self, vehicle_id: Uuid) -> Result<&Vehicle> {
        self.fleet.get(vehicle_id).ok_or_else(|| not_owned(vehicle_id))
    }
}

fn not_owned(vehicle_id: Uuid) -> RentalError {
    RentalError::NotFound(format!("vehicle {} is not part of this fleet", vehicle_id))
}

impl fmt::Display for RentalCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
