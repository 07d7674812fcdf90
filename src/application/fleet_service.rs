// Fleet report service - Use case for summarising one telemetry batch
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::alert::{Alert, AlertThresholds};
use crate::domain::fleet::FleetAggregator;
use anyhow::Context;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FleetReport {
    pub vehicle_count: usize,
    pub summary: String,
    pub alerts: Vec<Alert>,
}

#[derive(Clone)]
pub struct FleetReportService {
    source: Arc<dyn TelemetrySource>,
    thresholds: AlertThresholds,
}

impl FleetReportService {
    pub fn new(source: Arc<dyn TelemetrySource>, thresholds: AlertThresholds) -> Self {
        Self { source, thresholds }
    }

    pub async fn build_report(&self) -> anyhow::Result<FleetReport> {
        let records = self
            .source
            .load_records()
            .await
            .with_context(|| format!("Failed to load telemetry from {}", self.source.describe()))?;

        tracing::info!("Loaded {} vehicle records", records.len());

        let fleet = FleetAggregator::from_records(records, self.thresholds)?;
        let alerts = fleet.generate_alerts();

        tracing::debug!(
            "Evaluated {} vehicles against {:?}: {} alerts",
            fleet.vehicle_count(),
            fleet.thresholds(),
            alerts.len()
        );

        Ok(FleetReport {
            vehicle_count: fleet.vehicle_count(),
            summary: fleet.summary(),
            alerts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::AlertKind;
    use crate::domain::errors::ConfigurationError;
    use crate::domain::telemetry::TelemetryRecord;
    use async_trait::async_trait;

    struct StaticSource {
        records: Vec<TelemetryRecord>,
    }

    #[async_trait]
    impl TelemetrySource for StaticSource {
        fn describe(&self) -> String {
            "static batch".to_string()
        }

        async fn load_records(&self) -> anyhow::Result<Vec<TelemetryRecord>> {
            Ok(self.records.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TelemetrySource for FailingSource {
        fn describe(&self) -> String {
            "broken.csv".to_string()
        }

        async fn load_records(&self) -> anyhow::Result<Vec<TelemetryRecord>> {
            anyhow::bail!("CSV contains no valid data rows.")
        }
    }

    fn service(records: Vec<TelemetryRecord>, thresholds: AlertThresholds) -> FleetReportService {
        FleetReportService::new(Arc::new(StaticSource { records }), thresholds)
    }

    #[tokio::test]
    async fn test_build_report() {
        let records = vec![
            TelemetryRecord::new("V1", 50.0, 120.0, 50.0).unwrap(),
            TelemetryRecord::new("V2", 70.0, 80.0, 10.0).unwrap(),
        ];
        let report = service(records, AlertThresholds::default())
            .build_report()
            .await
            .unwrap();

        assert_eq!(report.vehicle_count, 2);
        assert_eq!(
            report.summary,
            "Average Speed: 60.00 km/h\nAverage Temperature: 100.00 °C\nAverage Fuel: 30.00 %"
        );
        assert_eq!(
            report.alerts,
            vec![
                Alert::new("V1", AlertKind::CriticalOverheating),
                Alert::new("V2", AlertKind::LowFuel),
            ]
        );
    }

    #[tokio::test]
    async fn test_thresholds_are_applied() {
        let records = vec![TelemetryRecord::new("V1", 50.0, 110.0, 15.0).unwrap()];

        let strict = service(records.clone(), AlertThresholds::default());
        assert!(strict.build_report().await.unwrap().alerts.is_empty());

        let inclusive = service(records, AlertThresholds::edge_inclusive());
        assert_eq!(inclusive.build_report().await.unwrap().alerts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch_is_configuration_error() {
        let err = service(Vec::new(), AlertThresholds::default())
            .build_report()
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::EmptyFleet)
        );
    }

    #[tokio::test]
    async fn test_source_error_gets_context() {
        let service = FleetReportService::new(Arc::new(FailingSource), AlertThresholds::default());
        let err = service.build_report().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load telemetry from broken.csv");
        assert_eq!(err.root_cause().to_string(), "CSV contains no valid data rows.");
    }
}
