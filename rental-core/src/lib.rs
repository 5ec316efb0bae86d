//! Core of fleet-rental: vehicles, the fleet registry, the booking ledger and
//! the company that ties them together.

pub mod clock;
pub mod company;
pub mod error;
pub mod fleet;
pub mod ledger;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use company::RentalCompany;
pub use error::{RentalError, Result};
pub use fleet::Fleet;
pub use ledger::Ledger;
pub use models::*;
