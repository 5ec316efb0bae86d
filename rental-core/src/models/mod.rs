//! Domain models for fleet rental.
//!
//! - [`Vehicle`]: a rentable asset with a fixed daily rate. Its category is a
//!   [`VehicleKind`] carrying the category-specific data.
//! - [`Booking`]: one vehicle reserved for one calendar day. Bookings live in
//!   the [`Ledger`](crate::Ledger) and are dropped when cancelled.

mod booking;
mod vehicle;

pub use booking::*;
pub use vehicle::*;
