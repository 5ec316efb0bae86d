//! Fleet rental: configuration, demo data and the interactive console on top
//! of [`rental_core`].

pub mod config;
pub mod console;
pub mod seed;

use anyhow::{Context, Result};
use rental_core::RentalCompany;

use crate::config::RentalConfig;

/// Build the company described by `config`: the demo fleet when enabled,
/// then every vehicle from the configured fleet file.
pub fn build_company(config: &RentalConfig) -> Result<RentalCompany> {
    let mut company = RentalCompany::new(&config.company_name);

    if config.seed_demo_fleet {
        seed::seed_demo(&mut company).context("Failed to seed demo fleet")?;
    }

    for input in config.fleet_inputs()? {
        let plate = input.plate.clone();
        company
            .add_vehicle_from_input(input)
            .with_context(|| format!("Failed to register vehicle {}", plate))?;
    }

    tracing::info!(
        company = company.name(),
        vehicles = company.vehicles().len(),
        rentals = company.rentals().len(),
        "Company ready"
    );
    Ok(company)
}
