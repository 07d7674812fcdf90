// Infrastructure layer - File and configuration adapters
pub mod config;
pub mod csv_source;
