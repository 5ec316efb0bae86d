//! Demo fleet used when the console starts without a fleet of its own.

use chrono::Days;
use rental_core::{RentalCompany, RentalError, Result, Vehicle};

/// Register three demo vehicles and book them for the coming days:
/// all three tomorrow, the Nissan Leaf also the day after.
pub fn seed_demo(company: &mut RentalCompany) -> Result<()> {
    let corolla =
        company.add_vehicle(Vehicle::passenger("ABC-123", "Toyota Corolla", 12000, false))?;
    let leaf = company.add_vehicle(Vehicle::passenger("DEF-456", "Nissan Leaf", 15000, true))?;
    let transit =
        company.add_vehicle(Vehicle::truck("GHI-789", "Ford Transit", 20000, 1000))?;

    let today = company.today();
    let tomorrow = today
        .checked_add_days(Days::new(1))
        .ok_or_else(|| RentalError::InvalidArgument("calendar overflow".to_string()))?;
    let day_after = today
        .checked_add_days(Days::new(2))
        .ok_or_else(|| RentalError::InvalidArgument("calendar overflow".to_string()))?;

    company.rent_vehicle(corolla, tomorrow)?;
    company.rent_vehicle(leaf, tomorrow)?;
    company.rent_vehicle(transit, tomorrow)?;
    company.rent_vehicle(leaf, day_after)?;

    tracing::debug!(vehicles = company.vehicles().len(), "Seeded demo fleet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rental_core::FixedClock;

    #[test]
    fn test_seed_books_four_days() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut company = RentalCompany::with_clock("Demo", Box::new(FixedClock(today)));
        seed_demo(&mut company).unwrap();

        assert_eq!(company.vehicles().len(), 3);
        assert_eq!(company.rentals().len(), 4);
        assert!(company.vehicles().iter().all(|v| v.is_rented()));
        assert_eq!(
            company.rentals()[3].to_string(),
            "Rental of Nissan Leaf (DEF-456) - 15000 HUF/day | Electric: true on 10/20/2026"
        );
    }
}
