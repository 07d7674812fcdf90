// Main entry point - Configuration, dependency wiring and report output
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::fleet_service::FleetReportService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::csv_source::CsvTelemetrySource;
use crate::presentation::cli::Cli;
use crate::presentation::report::render_report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; row warnings are visible by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let app_config = load_app_config(&cli.config)?;
    let thresholds = cli.thresholds(app_config.alerts);
    tracing::debug!("Using alert thresholds {:?}", thresholds);

    // Create source (infrastructure layer) and service (application layer)
    let source = Arc::new(CsvTelemetrySource::new(cli.input.clone()));
    let service = FleetReportService::new(source, thresholds);

    let report = service.build_report().await?;
    tracing::debug!("Rendering report for {} vehicles", report.vehicle_count);
    println!("{}", render_report(&report));

    Ok(())
}
