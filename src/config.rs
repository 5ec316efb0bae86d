use anyhow::{Context, Result};
use dirs::config_dir;
use rental_core::CreateVehicleInput;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "fleet-rental";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalConfig {
    /// Name shown in the console header.
    pub company_name: String,
    /// Start with the demo fleet and its demo bookings.
    pub seed_demo_fleet: bool,
    /// JSON file with extra vehicles to register at startup.
    pub fleet_file: Option<PathBuf>,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            company_name: "Awesome Car Rental Company".to_string(),
            seed_demo_fleet: true,
            fleet_file: None,
        }
    }
}

impl RentalConfig {
    /// Load configuration from the user's config directory.
    /// Returns default config if file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match get_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path. A missing file yields the
    /// defaults; an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Vehicles listed in the configured fleet file, if any.
    pub fn fleet_inputs(&self) -> Result<Vec<CreateVehicleInput>> {
        let Some(path) = &self.fleet_file else {
            return Ok(Vec::new());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fleet file {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse fleet file")
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
