// Domain error types
use std::fmt;
use thiserror::Error;

/// The numeric readings carried by a telemetry record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryField {
    Speed,
    Temperature,
    Fuel,
}

impl TelemetryField {
    pub fn name(&self) -> &'static str {
        match self {
            TelemetryField::Speed => "speed",
            TelemetryField::Temperature => "temperature",
            TelemetryField::Fuel => "fuel",
        }
    }
}

impl fmt::Display for TelemetryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a telemetry record is constructed from invalid readings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Vehicle id must be a non-empty string")]
    EmptyId,

    #[error("{field} {value} outside range [{min}, {max}]")]
    OutOfRange {
        field: TelemetryField,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: TelemetryField, value: f64 },
}

/// Raised when a fleet aggregator cannot be built
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Fleet requires at least one vehicle")]
    EmptyFleet,

    #[error("Alert threshold {name} must be a finite number, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_field_and_bounds() {
        let err = ValidationError::OutOfRange {
            field: TelemetryField::Fuel,
            value: 101.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "fuel 101 outside range [0, 100]");
    }
}
