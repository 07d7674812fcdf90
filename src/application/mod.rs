// Application layer - Use cases over fleet telemetry
pub mod fleet_service;
pub mod telemetry_source;
