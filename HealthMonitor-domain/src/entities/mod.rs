// Domain entities and value objects
pub mod conversions;
pub mod health_metrics;
pub mod patient;
pub mod prescription;

// Re-export common types for easier imports
pub use health_metrics::{HealthMetricSample, HealthMetrics, RecordHealthMetricsRequest};
pub use patient::{Patient, PatientRegistration, RegisterPatientRequest, RegistrationOutcome};
pub use prescription::{Prescription, SavePrescriptionRequest};
