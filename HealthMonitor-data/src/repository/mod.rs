// Repository module structure
pub mod errors;
mod health_metrics;
mod patient;
mod prescription;
mod storage;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use health_metrics::{HealthMetricsRepository, HealthMetricsRepositoryTrait};
pub use patient::{PatientRepository, PatientRepositoryTrait};
pub use prescription::{PrescriptionRepository, PrescriptionRepositoryTrait};
