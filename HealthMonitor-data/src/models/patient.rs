use serde::{Deserialize, Serialize};

/// Storage model for a row of the `patients` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Autoincrementing patient identifier
    pub pat_id: i64,

    /// Full name
    pub name: String,

    /// Age in years
    pub age: i64,

    /// Gender as entered at registration
    pub gender: String,

    /// Mobile number, unique across patients
    pub mobile: String,
}

/// Input data for inserting a new patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub mobile: String,
}
