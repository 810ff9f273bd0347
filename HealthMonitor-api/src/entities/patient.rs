use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned when a registration creates a patient
pub const NEW_PATIENT_MESSAGE: &str = "New patient registered";

/// Message returned when the mobile number is already registered
pub const EXISTING_PATIENT_MESSAGE: &str = "Existing patient found";

/// Request payload for registering a patient
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicRegisterPatientRequest {
    /// Full name
    #[schema(example = "A")]
    pub name: String,

    /// Age in years
    #[schema(example = 30)]
    pub age: i64,

    /// Gender
    #[schema(example = "F")]
    pub gender: String,

    /// Mobile number; registering it again returns the same patient
    #[schema(example = "555")]
    pub mobile: String,
}

/// Response to a registration request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicRegisterPatientResponse {
    /// `New patient registered` or `Existing patient found`
    pub message: String,

    /// Identifier of the new or existing patient
    pub pat_id: i64,
}
