pub mod errors;
pub mod health_metrics;
pub mod patient;
pub mod prescription;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use errors::ServiceError;
pub use health_metrics::{create_default_health_metrics_service, HealthMetricsService, HealthMetricsServiceTrait};
pub use patient::{create_default_patient_service, PatientService, PatientServiceTrait};
pub use prescription::{create_default_prescription_service, PrescriptionService, PrescriptionServiceTrait};
