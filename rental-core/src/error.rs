use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the fleet, the ledger and the company that coordinates them.
///
/// Every variant is raised at the point of violation and propagated unchanged;
/// nothing in this crate catches its own errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RentalError {
    /// A vehicle description does not match any known vehicle kind.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("The vehicle {plate} is already booked for {date}.")]
    AlreadyBooked { plate: String, date: NaiveDate },

    #[error("The rental date {date} cannot be in the past (today is {today}).")]
    InvalidDate { date: NaiveDate, today: NaiveDate },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("A vehicle with plate {0} is already registered")]
    AlreadyRegistered(String),
}

pub type Result<T> = std::result::Result<T, RentalError>;
