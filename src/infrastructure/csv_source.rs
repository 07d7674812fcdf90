// CSV telemetry source implementation
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::errors::{TelemetryField, ValidationError};
use crate::domain::telemetry::TelemetryRecord;
use async_trait::async_trait;
use csv::StringRecord;
use std::path::PathBuf;
use thiserror::Error;

const REQUIRED_HEADERS: [&str; 4] = ["id", "speed", "temperature", "fuel"];

/// Errors that make a whole CSV batch unusable
#[derive(Error, Debug)]
pub enum CsvLoadError {
    #[error("CSV file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV has no headers.")]
    NoHeaders,

    #[error("CSV missing required headers: {}", .0.join(", "))]
    MissingHeaders(Vec<&'static str>),

    #[error("CSV parsing error: {0}")]
    Parse(#[from] csv::Error),

    #[error("CSV contains no valid data rows.")]
    NoValidRows,
}

/// Why a single row was skipped
#[derive(Error, Debug)]
pub enum RowError {
    #[error("missing value for {0}")]
    MissingCell(&'static str),

    #[error("invalid {field} value '{value}'")]
    InvalidNumber { field: TelemetryField, value: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct CsvTelemetrySource {
    path: PathBuf,
}

impl CsvTelemetrySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TelemetrySource for CsvTelemetrySource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load_records(&self) -> anyhow::Result<Vec<TelemetryRecord>> {
        let is_file = tokio::fs::metadata(&self.path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(CsvLoadError::NotFound(self.path.clone()).into());
        }

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CsvLoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Read {} bytes from {}", bytes.len(), self.path.display());
        Ok(parse_records(&bytes)?)
    }
}

/// Positions of the required columns within the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    id: usize,
    speed: usize,
    temperature: usize,
    fuel: usize,
}

impl ColumnIndex {
    /// Header names match case-insensitively, in any order
    fn from_headers(headers: &StringRecord) -> Result<Self, CsvLoadError> {
        let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let position = |name: &str| normalized.iter().position(|h| h == name);

        let mut missing: Vec<&'static str> = REQUIRED_HEADERS
            .iter()
            .copied()
            .filter(|name| position(*name).is_none())
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            return Err(CsvLoadError::MissingHeaders(missing));
        }

        match (
            position("id"),
            position("speed"),
            position("temperature"),
            position("fuel"),
        ) {
            (Some(id), Some(speed), Some(temperature), Some(fuel)) => Ok(Self {
                id,
                speed,
                temperature,
                fuel,
            }),
            _ => Err(CsvLoadError::NoHeaders),
        }
    }

    fn parse_row(&self, row: &StringRecord) -> Result<TelemetryRecord, RowError> {
        let id = row.get(self.id).ok_or(RowError::MissingCell("id"))?.trim();
        let speed = parse_number(row, self.speed, TelemetryField::Speed)?;
        let temperature = parse_number(row, self.temperature, TelemetryField::Temperature)?;
        let fuel = parse_number(row, self.fuel, TelemetryField::Fuel)?;

        Ok(TelemetryRecord::new(id, speed, temperature, fuel)?)
    }
}

fn parse_number(row: &StringRecord, idx: usize, field: TelemetryField) -> Result<f64, RowError> {
    let raw = row.get(idx).ok_or(RowError::MissingCell(field.name()))?;
    raw.trim().parse::<f64>().map_err(|_| RowError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Parse CSV bytes into validated records, skipping rows that fail to convert
pub fn parse_records(input: &[u8]) -> Result<Vec<TelemetryRecord>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(CsvLoadError::NoHeaders);
    }
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        match columns.parse_row(&row) {
            Ok(record) => records.push(record),
            Err(e) => {
                let line = row.position().map(|p| p.line()).unwrap_or_default();
                let cells: Vec<&str> = row.iter().collect();
                tracing::warn!("Skipping invalid row at line {} {:?}: {}", line, cells, e);
            }
        }
    }

    if records.is_empty() {
        return Err(CsvLoadError::NoValidRows);
    }

    Ok(records)
}
