use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::{info, instrument};

use health_monitor_domain::entities::health_metrics::{
    HealthMetricSample, HealthMetrics, RecordHealthMetricsRequest,
};

use crate::api::error::ApiError;
use crate::api::state::HealthMetricsService;
use crate::entities::common::{PublicErrorResponse, PublicMessageResponse};
use crate::entities::health_metrics::{
    PublicHealthMetricsReading, PublicLatestHealthMetricsResponse,
    PublicRecordHealthMetricsRequest, HEALTH_METRICS_SAVED_MESSAGE, NO_HEALTH_METRICS_AVAILABLE,
};

/// Record a health metrics sample for a patient
#[utoipa::path(
    post,
    path = "/health_metrics",
    request_body = PublicRecordHealthMetricsRequest,
    responses(
        (status = 200, description = "Sample saved", body = PublicMessageResponse),
        (status = 400, description = "Malformed body", body = PublicErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "health_metrics"
)]
#[instrument(skip(service, payload))]
pub async fn save_health_metrics(
    State(service): State<HealthMetricsService>,
    payload: Result<Json<PublicRecordHealthMetricsRequest>, JsonRejection>,
) -> Result<Json<PublicMessageResponse>, ApiError> {
    let Json(request) = payload?;
    info!("Recording health metrics for patient {}", request.pat_id);

    service
        .record_sample(convert_to_domain_record_request(request))
        .await?;

    Ok(Json(PublicMessageResponse::new(HEALTH_METRICS_SAVED_MESSAGE)))
}

/// Get the most recent health metrics sample for a patient
#[utoipa::path(
    get,
    path = "/health_metrics/{pat_id}",
    params(
        ("pat_id" = i64, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Latest sample. When the patient has none the body is `{\"message\": \"No health metrics available.\"}` instead", body = PublicHealthMetricsReading),
        (status = 400, description = "Patient identifier is not an integer", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "health_metrics"
)]
#[instrument(skip(service, pat_id))]
pub async fn get_health_metrics(
    State(service): State<HealthMetricsService>,
    pat_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PublicLatestHealthMetricsResponse>, ApiError> {
    let Path(pat_id) = pat_id?;
    info!("Fetching latest health metrics for patient {}", pat_id);

    let response = match service.latest_sample(pat_id).await? {
        Some(sample) => PublicLatestHealthMetricsResponse::Reading(convert_to_public_reading(sample)),
        None => PublicLatestHealthMetricsResponse::Unavailable(PublicMessageResponse::new(
            NO_HEALTH_METRICS_AVAILABLE,
        )),
    };

    Ok(Json(response))
}

fn convert_to_domain_record_request(request: PublicRecordHealthMetricsRequest) -> RecordHealthMetricsRequest {
    RecordHealthMetricsRequest {
        pat_id: request.pat_id,
        metrics: HealthMetrics {
            bpm: request.bpm,
            spo2: request.spo2,
            temperature: request.temperature,
            humidity: request.humidity,
            ppg: request.ppg,
        },
    }
}

fn convert_to_public_reading(sample: HealthMetricSample) -> PublicHealthMetricsReading {
    let metrics = sample.metrics;
    PublicHealthMetricsReading {
        bpm: metrics.bpm,
        spo2: metrics.spo2,
        temperature: metrics.temperature,
        humidity: metrics.humidity,
        ppg: metrics.ppg,
    }
}
