use serde::{Deserialize, Serialize};
use validator::Validate;

/// Domain model for a registered patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Identifier assigned at registration
    pub pat_id: i64,

    /// Full name
    pub name: String,

    /// Age in years
    pub age: i64,

    /// Gender as entered at registration
    pub gender: String,

    /// Mobile number; identifies the patient on re-registration
    pub mobile: String,
}

/// Request payload for registering a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterPatientRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    pub age: i64,

    #[validate(length(min = 1, message = "Gender must not be empty"))]
    pub gender: String,

    #[validate(length(min = 1, message = "Mobile number must not be empty"))]
    pub mobile: String,
}

/// Whether a registration created a patient or matched an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationOutcome {
    /// A new patient row was created
    Registered,

    /// The mobile number was already registered
    ExistingPatient,
}

/// Result of a registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRegistration {
    /// Identifier of the new or existing patient
    pub pat_id: i64,

    /// How the identifier was obtained
    pub outcome: RegistrationOutcome,
}
