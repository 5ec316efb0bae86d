use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RentalError, Result};

/// A rentable vehicle.
///
/// The daily rate is fixed when the vehicle is built. The rented flag can be
/// read by anyone but is only written by the [`Ledger`](crate::Ledger), which
/// keeps it set while at least one booking for the vehicle is active.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    id: Uuid,
    plate: String,
    /// Make and model shown to customers, e.g. "Toyota Corolla".
    model: String,
    /// Base rate per day, in HUF.
    daily_rate: u64,
    kind: VehicleKind,
    rented: bool,
}

/// The category of a vehicle together with its category-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "category")]
pub enum VehicleKind {
    Passenger { electric: bool },
    Truck { load_capacity_kg: u32 },
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passenger { .. } => "passenger",
            Self::Truck { .. } => "truck",
        }
    }

    /// Total price for `days` days at `daily_rate`.
    ///
    /// Both current categories price linearly; a category with discounts
    /// gets its own arm here without touching any caller.
    fn price(&self, daily_rate: u64, days: u64) -> Option<u64> {
        match self {
            Self::Passenger { .. } | Self::Truck { .. } => daily_rate.checked_mul(days),
        }
    }
}

/// Untyped description of a vehicle, as found in a fleet file.
///
/// `category` selects the kind; the kind-specific fields are optional here
/// and checked by [`Vehicle::from_input`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVehicleInput {
    pub plate: String,
    pub model: String,
    pub daily_rate: u64,
    pub category: String,
    #[serde(default)]
    pub electric: Option<bool>,
    #[serde(default)]
    pub load_capacity_kg: Option<u32>,
}

impl Vehicle {
    pub fn new(
        plate: impl Into<String>,
        model: impl Into<String>,
        daily_rate: u64,
        kind: VehicleKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            plate: plate.into(),
            model: model.into(),
            daily_rate,
            kind,
            rented: false,
        }
    }

    pub fn passenger(
        plate: impl Into<String>,
        model: impl Into<String>,
        daily_rate: u64,
        electric: bool,
    ) -> Self {
        Self::new(plate, model, daily_rate, VehicleKind::Passenger { electric })
    }

    pub fn truck(
        plate: impl Into<String>,
        model: impl Into<String>,
        daily_rate: u64,
        load_capacity_kg: u32,
    ) -> Self {
        Self::new(
            plate,
            model,
            daily_rate,
            VehicleKind::Truck { load_capacity_kg },
        )
    }

    /// Build a vehicle from an untyped description.
    ///
    /// Fails with [`RentalError::TypeMismatch`] when the category is unknown
    /// or the field its kind requires is missing.
    pub fn from_input(input: CreateVehicleInput) -> Result<Self> {
        let kind = match input.category.trim().to_ascii_lowercase().as_str() {
            "passenger" | "car" => VehicleKind::Passenger {
                electric: input.electric.unwrap_or(false),
            },
            "truck" => {
                let load_capacity_kg = input.load_capacity_kg.ok_or_else(|| {
                    RentalError::TypeMismatch(format!(
                        "truck {} has no load_capacity_kg",
                        input.plate
                    ))
                })?;
                VehicleKind::Truck { load_capacity_kg }
            }
            other => {
                return Err(RentalError::TypeMismatch(format!(
                    "unknown vehicle category '{}' for {}",
                    other, input.plate
                )))
            }
        };

        Ok(Self::new(input.plate, input.model, input.daily_rate, kind))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn daily_rate(&self) -> u64 {
        self.daily_rate
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn is_rented(&self) -> bool {
        self.rented
    }

    pub fn is_available(&self) -> bool {
        !self.rented
    }

    pub(crate) fn set_rented(&mut self, rented: bool) {
        self.rented = rented;
    }

    /// Rental cost for `days` days, in HUF.
    pub fn rental_cost(&self, days: i64) -> Result<u64> {
        if days < 1 {
            return Err(RentalError::InvalidArgument(
                "Rental period must be at least 1 day".to_string(),
            ));
        }
        self.kind
            .price(self.daily_rate, days as u64)
            .ok_or_else(|| {
                RentalError::InvalidArgument(format!(
                    "Rental cost for {} days overflows",
                    days
                ))
            })
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} HUF/day",
            self.model, self.plate, self.daily_rate
        )?;
        match self.kind {
            VehicleKind::Passenger { electric } => write!(f, " | Electric: {}", electric),
            VehicleKind::Truck { load_capacity_kg } => {
                write!(f, " | Load Capacity: {} kg", load_capacity_kg)
            }
        }
    }
}
