use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned after a prescription is stored
pub const PRESCRIPTION_SAVED_MESSAGE: &str = "Prescription saved successfully";

/// Value returned in place of a prescription when a patient has none
pub const NO_PRESCRIPTION_AVAILABLE: &str = "No prescription available.";

/// Request payload for saving a prescription
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicSavePrescriptionRequest {
    /// Patient identifier
    #[schema(example = 1)]
    pub pat_id: i64,

    /// Prescription text
    #[schema(example = "Paracetamol 500mg twice daily")]
    pub prescription: String,
}

/// Latest prescription for a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicPrescriptionResponse {
    /// Prescription text, or `No prescription available.`
    pub prescription: String,
}
