// Alert domain model and threshold policy
use super::errors::ConfigurationError;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_MAX_TEMPERATURE: f64 = 110.0;
pub const DEFAULT_MIN_FUEL: f64 = 15.0;
pub const DEFAULT_TEMPERATURE_EDGE_INCLUSIVE: bool = false;
pub const DEFAULT_FUEL_EDGE_INCLUSIVE: bool = false;

/// Alert sensitivity.
///
/// With the edge flags off the comparisons are strict: a reading exactly at
/// a threshold does not raise an alert.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AlertThresholds {
    pub max_temperature: f64,
    pub min_fuel: f64,
    pub temperature_edge_inclusive: bool,
    pub fuel_edge_inclusive: bool,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            max_temperature: DEFAULT_MAX_TEMPERATURE,
            min_fuel: DEFAULT_MIN_FUEL,
            temperature_edge_inclusive: DEFAULT_TEMPERATURE_EDGE_INCLUSIVE,
            fuel_edge_inclusive: DEFAULT_FUEL_EDGE_INCLUSIVE,
        }
    }
}

impl AlertThresholds {
    /// Default thresholds with both edges inclusive (`>=` / `<=`)
    pub fn edge_inclusive() -> Self {
        Self {
            temperature_edge_inclusive: true,
            fuel_edge_inclusive: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.max_temperature.is_finite() {
            return Err(ConfigurationError::InvalidThreshold {
                name: "max_temperature",
                value: self.max_temperature,
            });
        }
        if !self.min_fuel.is_finite() {
            return Err(ConfigurationError::InvalidThreshold {
                name: "min_fuel",
                value: self.min_fuel,
            });
        }
        Ok(())
    }

    pub fn is_overheating(&self, temperature: f64) -> bool {
        if self.temperature_edge_inclusive {
            temperature >= self.max_temperature
        } else {
            temperature > self.max_temperature
        }
    }

    pub fn is_low_fuel(&self, fuel: f64) -> bool {
        if self.fuel_edge_inclusive {
            fuel <= self.min_fuel
        } else {
            fuel < self.min_fuel
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    CriticalOverheating,
    LowFuel,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::CriticalOverheating => "Critical Overheating",
            AlertKind::LowFuel => "Low Fuel Warning",
        }
    }
}

/// An alert raised for one vehicle, rendered as `"{vehicle_id}: {label}"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub vehicle_id: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn new(vehicle_id: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            kind,
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.vehicle_id, self.kind.label())
    }
}
