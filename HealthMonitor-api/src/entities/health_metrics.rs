use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::PublicMessageResponse;

/// Message returned after a sample is stored
pub const HEALTH_METRICS_SAVED_MESSAGE: &str = "Health metrics saved successfully";

/// Message returned when a patient has no samples
pub const NO_HEALTH_METRICS_AVAILABLE: &str = "No health metrics available.";

/// Request payload for recording a health metrics sample
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicRecordHealthMetricsRequest {
    /// Patient identifier
    #[schema(example = 1)]
    pub pat_id: i64,

    /// Heart rate in beats per minute
    #[schema(example = 72)]
    pub bpm: i64,

    /// Blood oxygen saturation in percent
    #[schema(example = 98)]
    pub spo2: i64,

    /// Body temperature
    #[schema(example = 36.6)]
    pub temperature: f64,

    /// Ambient relative humidity
    #[schema(example = 45.5)]
    pub humidity: f64,

    /// Photoplethysmogram value
    #[schema(example = 0.82)]
    pub ppg: f64,
}

/// The five values of the most recent sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicHealthMetricsReading {
    pub bpm: i64,
    pub spo2: i64,
    pub temperature: f64,
    pub humidity: f64,
    pub ppg: f64,
}

/// Body of `GET /health_metrics/{pat_id}`: either the latest reading or a
/// message when there is none. Clients tell them apart by field presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PublicLatestHealthMetricsResponse {
    Reading(PublicHealthMetricsReading),
    Unavailable(PublicMessageResponse),
}
