use async_trait::async_trait;
use tracing::{debug, info};
use validator::Validate;

use health_monitor_data::database::DatabasePool;
use health_monitor_data::repository::{PrescriptionRepository, PrescriptionRepositoryTrait};

use crate::entities::conversions;
use crate::entities::prescription::{Prescription, SavePrescriptionRequest};
use super::errors::{map_repo_error, ServiceError};

/// Trait for prescription operations
#[async_trait]
pub trait PrescriptionServiceTrait: Send + Sync {
    /// Append a prescription for a patient
    async fn save_prescription(&self, request: SavePrescriptionRequest) -> Result<Prescription, ServiceError>;

    /// Get the most recently saved prescription for a patient, if any
    async fn latest_prescription(&self, pat_id: i64) -> Result<Option<Prescription>, ServiceError>;
}

/// Prescription service for domain logic
pub struct PrescriptionService<R: PrescriptionRepositoryTrait> {
    repository: R,
}

impl<R: PrescriptionRepositoryTrait> PrescriptionService<R> {
    /// Create a new prescription service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PrescriptionRepositoryTrait> PrescriptionServiceTrait for PrescriptionService<R> {
    async fn save_prescription(&self, request: SavePrescriptionRequest) -> Result<Prescription, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::from_validation(&e))?;

        let data_request = conversions::convert_to_data_create_prescription(&request);
        let prescription = self
            .repository
            .create(data_request)
            .await
            .map(conversions::convert_to_domain_prescription)
            .map_err(map_repo_error)?;

        info!("Saved prescription {} for patient {}", prescription.id, prescription.pat_id);
        Ok(prescription)
    }

    async fn latest_prescription(&self, pat_id: i64) -> Result<Option<Prescription>, ServiceError> {
        let latest = self
            .repository
            .get_latest(pat_id)
            .await
            .map_err(map_repo_error)?
            .map(conversions::convert_to_domain_prescription);

        if latest.is_none() {
            debug!("No prescription on record for patient {}", pat_id);
        }
        Ok(latest)
    }
}

/// Create a prescription service backed by the SQLite repository
pub fn create_default_prescription_service(pool: DatabasePool) -> impl PrescriptionServiceTrait {
    PrescriptionService::new(PrescriptionRepository::new(pool))
}
