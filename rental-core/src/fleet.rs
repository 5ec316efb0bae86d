//! The vehicle registry of one company.

use uuid::Uuid;

use crate::error::{RentalError, Result};
use crate::models::{CreateVehicleInput, Vehicle};

/// Ordered collection of vehicles owned by one company.
///
/// Insertion order is kept because the console numbers vehicles by position.
/// Plates are unique within a fleet.
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle. It must not carry bookings from another ledger.
    pub fn add(&mut self, vehicle: Vehicle) -> Result<Uuid> {
        if vehicle.is_rented() {
            return Err(RentalError::InvalidArgument(format!(
                "vehicle {} is still rented elsewhere",
                vehicle.plate()
            )));
        }
        if self.get_by_plate(vehicle.plate()).is_some() {
            return Err(RentalError::AlreadyRegistered(vehicle.plate().to_string()));
        }

        let id = vehicle.id();
        tracing::info!(plate = vehicle.plate(), %id, "Vehicle added to fleet");
        self.vehicles.push(vehicle);
        Ok(id)
    }

    pub fn add_from_input(&mut self, input: CreateVehicleInput) -> Result<Uuid> {
        self.add(Vehicle::from_input(input)?)
    }

    /// Remove the vehicle with `id` and hand it back.
    pub fn remove(&mut self, id: Uuid) -> Result<Vehicle> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v.id() == id)
            .ok_or_else(|| RentalError::NotFound(format!("vehicle {}", id)))?;

        let vehicle = self.vehicles.remove(index);
        tracing::info!(plate = vehicle.plate(), %id, "Vehicle removed from fleet");
        Ok(vehicle)
    }

    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: Uuid) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id() == id)
    }

    pub fn get_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.plate() == plate)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
