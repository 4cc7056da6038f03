use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::AppError;

/// Lookback window understood by the discussion search (`t=` parameter).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    Week,
}

pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::InvalidPayload(format!("timestamp out of range: {}ms", millis)))
}

/// Reddit reports `created_utc` as fractional seconds.
pub fn from_epoch_seconds(seconds: f64) -> Result<DateTime<Utc>, AppError> {
    if !seconds.is_finite() {
        return Err(AppError::InvalidPayload(format!(
            "timestamp is not a number: {}",
            seconds
        )));
    }
    from_epoch_millis((seconds * 1000.0).round() as i64)
}
