use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_rental::config::RentalConfig;
use fleet_rental::console::Console;

#[derive(Parser)]
#[command(name = "rental")]
#[command(about = "Vehicle rental desk with a double-booking-safe ledger")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Start without the demo fleet
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive rental console (default)
    Console,
    /// Print the fleet
    Fleet {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Price a rental of one vehicle
    Quote {
        /// License plate of the vehicle
        #[arg(short, long)]
        plate: String,

        /// Number of days
        #[arg(short, long, default_value = "1")]
        days: i64,
    },
}

/// Initialize tracing on stderr so stdout stays clean for the console
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "fleet_rental=info,rental_core=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => RentalConfig::load_from(path)?,
        None => RentalConfig::load(),
    };
    if cli.no_seed {
        config.seed_demo_fleet = false;
    }

    let mut company = fleet_rental::build_company(&config)?;

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Console => {
            let stdin = io::stdin();
            Console::new(&mut company, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Fleet { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(company.vehicles())?);
            } else {
                for vehicle in company.vehicles() {
                    let state = if vehicle.is_rented() { "rented" } else { "available" };
                    println!("{} [{}]", vehicle, state);
                }
            }
        }
        Commands::Quote { plate, days } => {
            let vehicle = company
                .fleet()
                .get_by_plate(&plate)
                .ok_or_else(|| anyhow::anyhow!("No vehicle with plate {}", plate))?;
            let cost = company.quote(vehicle.id(), days)?;
            println!("{} for {} day(s): {} HUF", vehicle, days, cost);
        }
    }

    Ok(())
}
