use serde::{Deserialize, Serialize};

/// Storage model for a row of the `prescriptions` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    /// Row identifier, increases with insertion order
    pub id: i64,

    /// Patient the prescription belongs to (not checked against `patients`)
    pub pat_id: i64,

    /// Free-text prescription
    pub prescription: String,

    /// Insertion time as stored by SQLite (`YYYY-MM-DD HH:MM:SS`, UTC)
    pub timestamp: String,
}

/// Input data for inserting a prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePrescriptionRequest {
    pub pat_id: i64,
    pub prescription: String,
}
