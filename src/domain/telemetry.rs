// Telemetry record domain model
use super::errors::{TelemetryField, ValidationError};
use std::ops::RangeInclusive;

/// Plausible speed in km/h
pub const SPEED_RANGE: RangeInclusive<f64> = 0.0..=300.0;
/// Plausible engine temperature in °C
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -50.0..=200.0;
/// Remaining fuel as a percentage
pub const FUEL_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// One vehicle's current readings.
///
/// Fields are private: a record can only be obtained through
/// [`TelemetryRecord::new`], so every instance satisfies the range checks.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    id: String,
    speed: f64,
    temperature: f64,
    fuel: f64,
}

impl TelemetryRecord {
    pub fn new(
        id: impl Into<String>,
        speed: f64,
        temperature: f64,
        fuel: f64,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Self::check(TelemetryField::Fuel, fuel, &FUEL_RANGE)?;
        Self::check(TelemetryField::Speed, speed, &SPEED_RANGE)?;
        Self::check(TelemetryField::Temperature, temperature, &TEMPERATURE_RANGE)?;

        Ok(Self {
            id,
            speed,
            temperature,
            fuel,
        })
    }

    fn check(
        field: TelemetryField,
        value: f64,
        range: &RangeInclusive<f64>,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field, value });
        }
        if !range.contains(&value) {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of_range_field(result: Result<TelemetryRecord, ValidationError>) -> TelemetryField {
        match result {
            Err(ValidationError::OutOfRange { field, .. }) => field,
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_record() {
        let record = TelemetryRecord::new("V1", 80.0, 90.0, 50.0).unwrap();
        assert_eq!(record.id(), "V1");
        assert_eq!(record.speed(), 80.0);
        assert_eq!(record.temperature(), 90.0);
        assert_eq!(record.fuel(), 50.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(TelemetryRecord::new("lo", 0.0, -50.0, 0.0).is_ok());
        assert!(TelemetryRecord::new("hi", 300.0, 200.0, 100.0).is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!(
            TelemetryRecord::new("", 50.0, 80.0, 50.0),
            Err(ValidationError::EmptyId)
        );
    }

    #[test]
    fn test_fuel_out_of_range() {
        assert_eq!(
            out_of_range_field(TelemetryRecord::new("V", 50.0, 80.0, -1.0)),
            TelemetryField::Fuel
        );
        assert_eq!(
            TelemetryRecord::new("V", 50.0, 80.0, 101.0),
            Err(ValidationError::OutOfRange {
                field: TelemetryField::Fuel,
                value: 101.0,
                min: 0.0,
                max: 100.0,
            })
        );
    }

    #[test]
    fn test_speed_out_of_range() {
        assert_eq!(
            out_of_range_field(TelemetryRecord::new("V", -1.0, 80.0, 50.0)),
            TelemetryField::Speed
        );
        assert_eq!(
            out_of_range_field(TelemetryRecord::new("V", 301.0, 80.0, 50.0)),
            TelemetryField::Speed
        );
    }

    #[test]
    fn test_temperature_out_of_range() {
        assert_eq!(
            out_of_range_field(TelemetryRecord::new("V", 50.0, -51.0, 50.0)),
            TelemetryField::Temperature
        );
        assert_eq!(
            out_of_range_field(TelemetryRecord::new("V", 50.0, 201.0, 50.0)),
            TelemetryField::Temperature
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = TelemetryRecord::new("V", f64::NAN, 80.0, 50.0);
        assert!(matches!(
            result,
            Err(ValidationError::NotFinite {
                field: TelemetryField::Speed,
                ..
            })
        ));

        let result = TelemetryRecord::new("V", 50.0, f64::INFINITY, 50.0);
        assert!(matches!(
            result,
            Err(ValidationError::NotFinite {
                field: TelemetryField::Temperature,
                ..
            })
        ));
    }

    #[test]
    fn test_fuel_checked_before_speed() {
        assert_eq!(
            out_of_range_field(TelemetryRecord::new("V", 999.0, 80.0, 999.0)),
            TelemetryField::Fuel
        );
    }
}
