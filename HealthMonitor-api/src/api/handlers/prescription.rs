use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::{info, instrument};

use health_monitor_domain::entities::prescription::SavePrescriptionRequest;

use crate::api::error::ApiError;
use crate::api::state::PrescriptionService;
use crate::entities::common::{PublicErrorResponse, PublicMessageResponse};
use crate::entities::prescription::{
    PublicPrescriptionResponse, PublicSavePrescriptionRequest, NO_PRESCRIPTION_AVAILABLE,
    PRESCRIPTION_SAVED_MESSAGE,
};

/// Save a prescription for a patient
#[utoipa::path(
    post,
    path = "/prescription",
    request_body = PublicSavePrescriptionRequest,
    responses(
        (status = 200, description = "Prescription saved", body = PublicMessageResponse),
        (status = 400, description = "Malformed body or empty prescription", body = PublicErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "prescriptions"
)]
#[instrument(skip(service, payload))]
pub async fn save_prescription(
    State(service): State<PrescriptionService>,
    payload: Result<Json<PublicSavePrescriptionRequest>, JsonRejection>,
) -> Result<Json<PublicMessageResponse>, ApiError> {
    let Json(request) = payload?;
    info!("Saving prescription for patient {}", request.pat_id);

    service
        .save_prescription(SavePrescriptionRequest {
            pat_id: request.pat_id,
            prescription: request.prescription,
        })
        .await?;

    Ok(Json(PublicMessageResponse::new(PRESCRIPTION_SAVED_MESSAGE)))
}

/// Get the most recent prescription for a patient
#[utoipa::path(
    get,
    path = "/prescription/{pat_id}",
    params(
        ("pat_id" = i64, Path, description = "Patient identifier")
    ),
    responses(
        (status = 200, description = "Latest prescription, or `No prescription available.` when there is none", body = PublicPrescriptionResponse),
        (status = 400, description = "Patient identifier is not an integer", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "prescriptions"
)]
#[instrument(skip(service, pat_id))]
pub async fn get_prescription(
    State(service): State<PrescriptionService>,
    pat_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PublicPrescriptionResponse>, ApiError> {
    let Path(pat_id) = pat_id?;
    info!("Fetching latest prescription for patient {}", pat_id);

    let prescription = service
        .latest_prescription(pat_id)
        .await?
        .map(|latest| latest.prescription)
        .unwrap_or_else(|| NO_PRESCRIPTION_AVAILABLE.to_string());

    Ok(Json(PublicPrescriptionResponse { prescription }))
}
