// Command line arguments
use crate::domain::alert::AlertThresholds;
use crate::infrastructure::config::DEFAULT_CONFIG_BASE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fleet-telemetry")]
#[command(version, about = "Summarise vehicle telemetry and raise threshold alerts")]
pub struct Cli {
    /// CSV file with id, speed, temperature and fuel columns
    #[arg(default_value = "vehicles.csv")]
    pub input: PathBuf,

    /// Configuration file base name (extension is detected)
    #[arg(long, default_value = DEFAULT_CONFIG_BASE)]
    pub config: String,

    /// Raise alerts for readings exactly at a threshold
    #[arg(long)]
    pub inclusive_edges: bool,
}

impl Cli {
    /// Apply command line overrides on top of the configured thresholds
    pub fn thresholds(&self, configured: AlertThresholds) -> AlertThresholds {
        if self.inclusive_edges {
            AlertThresholds {
                temperature_edge_inclusive: true,
                fuel_edge_inclusive: true,
                ..configured
            }
        } else {
            configured
        }
    }
}
