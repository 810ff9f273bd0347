use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, instrument};

use health_monitor_domain::entities::patient::{
    PatientRegistration, RegisterPatientRequest, RegistrationOutcome,
};

use crate::api::error::ApiError;
use crate::api::state::PatientService;
use crate::entities::common::PublicErrorResponse;
use crate::entities::patient::{
    PublicRegisterPatientRequest, PublicRegisterPatientResponse, EXISTING_PATIENT_MESSAGE,
    NEW_PATIENT_MESSAGE,
};

/// Register a patient, or look up the patient already using the mobile number
#[utoipa::path(
    post,
    path = "/register",
    request_body = PublicRegisterPatientRequest,
    responses(
        (status = 200, description = "Patient registered or found", body = PublicRegisterPatientResponse),
        (status = 400, description = "Malformed body or empty field", body = PublicErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = PublicErrorResponse),
        (status = 409, description = "Mobile number registered concurrently", body = PublicErrorResponse),
        (status = 500, description = "Internal server error", body = PublicErrorResponse),
    ),
    tag = "patients"
)]
#[instrument(skip(service, payload))]
pub async fn register_patient(
    State(service): State<PatientService>,
    payload: Result<Json<PublicRegisterPatientRequest>, JsonRejection>,
) -> Result<Json<PublicRegisterPatientResponse>, ApiError> {
    let Json(request) = payload?;
    info!("Registering patient");

    let registration = service
        .register(convert_to_domain_register_request(request))
        .await?;

    Ok(Json(convert_to_public_registration(registration)))
}

fn convert_to_domain_register_request(request: PublicRegisterPatientRequest) -> RegisterPatientRequest {
    RegisterPatientRequest {
        name: request.name,
        age: request.age,
        gender: request.gender,
        mobile: request.mobile,
    }
}

fn convert_to_public_registration(registration: PatientRegistration) -> PublicRegisterPatientResponse {
    let message = match registration.outcome {
        RegistrationOutcome::Registered => NEW_PATIENT_MESSAGE,
        RegistrationOutcome::ExistingPatient => EXISTING_PATIENT_MESSAGE,
    };

    PublicRegisterPatientResponse {
        message: message.to_string(),
        pat_id: registration.pat_id,
    }
}
