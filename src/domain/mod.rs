// Domain layer - Telemetry records, alert rules and fleet aggregation
pub mod alert;
pub mod errors;
pub mod fleet;
pub mod telemetry;
