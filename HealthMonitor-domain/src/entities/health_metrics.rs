use serde::{Deserialize, Serialize};

/// The five sensor values carried by every sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Heart rate in beats per minute
    pub bpm: i64,

    /// Blood oxygen saturation in percent
    pub spo2: i64,

    /// Body temperature
    pub temperature: f64,

    /// Ambient relative humidity
    pub humidity: f64,

    /// Photoplethysmogram value
    pub ppg: f64,
}

/// Domain model for a stored health metrics sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetricSample {
    /// Row identifier
    pub id: i64,

    /// Patient the sample belongs to
    pub pat_id: i64,

    /// Sensor values
    pub metrics: HealthMetrics,

    /// When the sample was saved (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub timestamp: String,
}

/// Request payload for recording a sample. Values are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordHealthMetricsRequest {
    /// Patient identifier; not checked against registered patients
    pub pat_id: i64,

    /// Sensor values
    pub metrics: HealthMetrics,
}
