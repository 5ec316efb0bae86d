use chrono::{Days, NaiveDate};
use rental_core::*;
use speculate2::speculate;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

fn days_from_today(days: i64) -> NaiveDate {
    if days >= 0 {
        today().checked_add_days(Days::new(days as u64))
    } else {
        today().checked_sub_days(Days::new(days.unsigned_abs()))
    }
    .expect("date in range")
}

fn corolla() -> Vehicle {
    Vehicle::passenger("ABC-123", "Toyota Corolla", 12000, false)
}

fn leaf() -> Vehicle {
    Vehicle::passenger("DEF-456", "Nissan Leaf", 15000, true)
}

speculate! {
    before {
        let mut ledger = Ledger::with_clock(Box::new(FixedClock(today())));
        let mut car = corolla();
    }

    describe "reserve" {
        it "books a future day and marks the vehicle rented" {
            let booking = ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");

            assert_eq!(booking.vehicle_id, car.id());
            assert_eq!(booking.date, days_from_today(1));
            assert!(!car.is_available());
            assert_eq!(ledger.list(), &[booking]);
        }

        it "accepts today" {
            ledger.reserve(&mut car, today()).expect("Failed to reserve today");
            assert_eq!(ledger.len(), 1);
        }

        it "rejects a day in the past and creates nothing" {
            let result = ledger.reserve(&mut car, days_from_today(-1));

            assert_eq!(
                result,
                Err(RentalError::InvalidDate { date: days_from_today(-1), today: today() })
            );
            assert!(ledger.is_empty());
            assert!(car.is_available());
        }

        it "rejects a second booking of the same vehicle on the same day" {
            let first = ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");
            let result = ledger.reserve(&mut car, days_from_today(1));

            assert!(matches!(result, Err(RentalError::AlreadyBooked { .. })));
            assert_eq!(ledger.list(), &[first]);
        }

        it "allows the same vehicle on different days" {
            ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");
            ledger.reserve(&mut car, days_from_today(2)).expect("Failed to reserve");

            assert_eq!(ledger.bookings_for(car.id()).count(), 2);
            assert!(ledger.is_booked(car.id(), days_from_today(2)));
            assert!(!ledger.is_booked(car.id(), days_from_today(3)));
        }

        it "allows different vehicles on the same day" {
            let mut other = leaf();
            ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");
            ledger.reserve(&mut other, days_from_today(1)).expect("Failed to reserve");

            assert_eq!(ledger.len(), 2);
        }
    }

    describe "cancel" {
        it "makes the vehicle available again" {
            let booking = ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");
            let cancelled = ledger.cancel(&mut car, booking.id).expect("Failed to cancel");

            assert_eq!(cancelled, booking);
            assert!(car.is_available());
            assert!(ledger.is_empty());
        }

        it "fails for an unknown booking" {
            ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");
            let result = ledger.cancel(&mut car, Uuid::new_v4());

            assert!(matches!(result, Err(RentalError::NotFound(_))));
            assert_eq!(ledger.len(), 1);
        }

        it "fails when the same booking is cancelled twice" {
            let booking = ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");
            ledger.cancel(&mut car, booking.id).expect("Failed to cancel");

            let result = ledger.cancel(&mut car, booking.id);
            assert!(matches!(result, Err(RentalError::NotFound(_))));
        }

        it "removes exactly one entry and keeps the rest in order" {
            let mut other = leaf();
            let a = ledger.reserve(&mut car, days_from_today(1)).expect("Failed to reserve");
            let b = ledger.reserve(&mut other, days_from_today(1)).expect("Failed to reserve");
            let c = ledger.reserve(&mut car, days_from_today(2)).expect("Failed to reserve");

            ledger.cancel(&mut car, a.id).expect("Failed to cancel");

            assert_eq!(ledger.list(), &[b, c]);
            assert!(car.is_rented());
        }
    }
}
