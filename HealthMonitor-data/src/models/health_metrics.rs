use serde::{Deserialize, Serialize};

/// Storage model for a row of the `health_metrics` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetricSample {
    /// Row identifier, increases with insertion order
    pub id: i64,

    /// Patient the sample belongs to (not checked against `patients`)
    pub pat_id: i64,

    /// Heart rate in beats per minute
    pub bpm: i64,

    /// Blood oxygen saturation in percent
    pub spo2: i64,

    /// Temperature in degrees
    pub temperature: f64,

    /// Relative humidity in percent
    pub humidity: f64,

    /// Photoplethysmogram reading
    pub ppg: f64,

    /// Insertion time as stored by SQLite (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub timestamp: String,
}

/// Input data for inserting a health metrics sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHealthMetricSampleRequest {
    pub pat_id: i64,
    pub bpm: i64,
    pub spo2: i64,
    pub temperature: f64,
    pub humidity: f64,
    pub ppg: f64,
}
