use serde::{Deserialize, Serialize};
use validator::Validate;

/// Domain model for a saved prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    /// Row identifier
    pub id: i64,

    /// Patient the prescription was written for
    pub pat_id: i64,

    /// Free-text prescription
    pub prescription: String,

    /// When the prescription was saved (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub timestamp: String,
}

/// Request payload for saving a prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SavePrescriptionRequest {
    /// Patient identifier; not checked against registered patients
    pub pat_id: i64,

    #[validate(length(min = 1, message = "Prescription must not be empty"))]
    pub prescription: String,
}
