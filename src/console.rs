//! Interactive menu over a line reader and a writer.
//!
//! The console only talks to [`RentalCompany`]'s public operations and is the
//! one place where booking errors are caught: they are printed and the menu
//! comes back.

use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use rental_core::{RentalCompany, DATE_FORMAT};

const INVALID_CHOICE: &str = "Invalid choice.";
const NO_RENTALS: &str = "No active rentals.";

pub struct Console<'a, R, W> {
    company: &'a mut RentalCompany,
    input: R,
    output: W,
}

/// What the user picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Rent,
    Cancel,
    List,
    Exit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::Rent),
            "2" => Some(Self::Cancel),
            "3" => Some(Self::List),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(company: &'a mut RentalCompany, input: R, output: W) -> Self {
        Self {
            company,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(line) = self.prompt("Select an option (1-4): ")? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Rent) => self.rent()?,
                Some(MenuChoice::Cancel) => self.cancel()?,
                Some(MenuChoice::List) => self.list()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                None => writeln!(self.output, "{}", INVALID_CHOICE)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {} ---", self.company)?;
        writeln!(self.output, "1. Rent a vehicle")?;
        writeln!(self.output, "2. Cancel a rental")?;
        writeln!(self.output, "3. List active rentals")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    fn rent(&mut self) -> Result<()> {
        writeln!(self.output, "Available vehicles:")?;
        for (idx, vehicle) in self.company.vehicles().iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, vehicle)?;
        }

        let Some(line) = self.prompt("Please provide the id of the vehicle you would like to rent: ")?
        else {
            return Ok(());
        };
        let Some(index) = parse_index(&line, self.company.vehicles().len()) else {
            writeln!(self.output, "{}", INVALID_CHOICE)?;
            return Ok(());
        };
        let vehicle = &self.company.vehicles()[index];
        let (vehicle_id, label) = (vehicle.id(), vehicle.to_string());

        let Some(line) = self.prompt("When would you like to rent the vehicle (mm/dd/YYYY): ")?
        else {
            return Ok(());
        };
        let date = match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                writeln!(self.output, "Error: invalid date '{}': {}", line, e)?;
                return Ok(());
            }
        };

        match self.company.rent_vehicle(vehicle_id, date) {
            Ok(_) => writeln!(self.output, "{} booked successfully.", label)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        if self.company.rentals().is_empty() {
            writeln!(self.output, "{}", NO_RENTALS)?;
            return Ok(());
        }

        writeln!(self.output, "Active rentals:")?;
        for (idx, rental) in self.company.rentals().iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, rental)?;
        }

        let Some(line) = self.prompt("Select the rental you would like to cancel: ")? else {
            return Ok(());
        };
        let Some(index) = parse_index(&line, self.company.rentals().len()) else {
            writeln!(self.output, "Invalid choice. Please use a valid number.")?;
            return Ok(());
        };

        let booking_id = self.company.rentals()[index].id;
        match self.company.cancel_rental(booking_id) {
            Ok(_) => writeln!(self.output, "Successful cancellation.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let rentals = self.company.list_rentals();
        if rentals.is_empty() {
            writeln!(self.output, "{}", NO_RENTALS)?;
            return Ok(());
        }

        writeln!(self.output, "Active rentals:")?;
        for rental in rentals {
            writeln!(self.output, "{}", rental)?;
        }
        Ok(())
    }

    /// Print `message` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Turn a 1-based menu number into an index below `len`.
fn parse_index(input: &str, len: usize) -> Option<usize> {
    let number: usize = input.parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}
