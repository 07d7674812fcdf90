// Source trait for telemetry batches
use crate::domain::telemetry::TelemetryRecord;
use async_trait::async_trait;

#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Short description of where records come from, used in logs and error context
    fn describe(&self) -> String;

    /// Load one batch of validated records.
    /// Implementations skip invalid rows and fail only if the whole batch is unusable.
    async fn load_records(&self) -> anyhow::Result<Vec<TelemetryRecord>>;
}
