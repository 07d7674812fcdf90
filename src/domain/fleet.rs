// Fleet aggregation - statistics and alerts over one batch of records
use super::alert::{Alert, AlertKind, AlertThresholds};
use super::errors::ConfigurationError;
use super::telemetry::TelemetryRecord;

/// Read-only view over a non-empty batch of telemetry records
#[derive(Debug, Clone)]
pub struct FleetAggregator {
    records: Vec<TelemetryRecord>,
    thresholds: AlertThresholds,
}

impl FleetAggregator {
    pub fn new(
        records: Vec<TelemetryRecord>,
        thresholds: AlertThresholds,
    ) -> Result<Self, ConfigurationError> {
        if records.is_empty() {
            return Err(ConfigurationError::EmptyFleet);
        }
        thresholds.validate()?;
        Ok(Self {
            records,
            thresholds,
        })
    }

    pub fn from_records<I>(records: I, thresholds: AlertThresholds) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = TelemetryRecord>,
    {
        Self::new(records.into_iter().collect(), thresholds)
    }

    pub fn vehicle_count(&self) -> usize {
        self.records.len()
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    pub fn average_speed(&self) -> f64 {
        self.mean(TelemetryRecord::speed)
    }

    pub fn average_temperature(&self) -> f64 {
        self.mean(TelemetryRecord::temperature)
    }

    pub fn average_fuel(&self) -> f64 {
        self.mean(TelemetryRecord::fuel)
    }

    fn mean(&self, reading: fn(&TelemetryRecord) -> f64) -> f64 {
        // Unreachable through `new`, but never divide by zero
        if self.records.is_empty() {
            return 0.0;
        }
        let total: f64 = self.records.iter().map(reading).sum();
        total / self.records.len() as f64
    }

    /// Alerts in record order; overheating is checked before fuel for each vehicle.
    pub fn generate_alerts(&self) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for record in &self.records {
            if self.thresholds.is_overheating(record.temperature()) {
                alerts.push(Alert::new(record.id(), AlertKind::CriticalOverheating));
            }
            if self.thresholds.is_low_fuel(record.fuel()) {
                alerts.push(Alert::new(record.id(), AlertKind::LowFuel));
            }
        }
        alerts
    }

    pub fn summary(&self) -> String {
        format!(
            "Average Speed: {:.2} km/h\nAverage Temperature: {:.2} °C\nAverage Fuel: {:.2} %",
            self.average_speed(),
            self.average_temperature(),
            self.average_fuel()
        )
    }
}
