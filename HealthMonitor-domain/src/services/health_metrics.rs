use async_trait::async_trait;
use tracing::{debug, info};

use health_monitor_data::database::DatabasePool;
use health_monitor_data::repository::{HealthMetricsRepository, HealthMetricsRepositoryTrait};

use crate::entities::conversions;
use crate::entities::health_metrics::{HealthMetricSample, RecordHealthMetricsRequest};
use super::errors::{map_repo_error, ServiceError};

/// Trait for health metrics operations
#[async_trait]
pub trait HealthMetricsServiceTrait: Send + Sync {
    /// Append a sensor sample for a patient. No unit or range checks apply.
    async fn record_sample(&self, request: RecordHealthMetricsRequest) -> Result<HealthMetricSample, ServiceError>;

    /// Get the most recently recorded sample for a patient, if any
    async fn latest_sample(&self, pat_id: i64) -> Result<Option<HealthMetricSample>, ServiceError>;
}

/// Health metrics service for domain logic
pub struct HealthMetricsService<R: HealthMetricsRepositoryTrait> {
    repository: R,
}

impl<R: HealthMetricsRepositoryTrait> HealthMetricsService<R> {
    /// Create a new health metrics service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: HealthMetricsRepositoryTrait> HealthMetricsServiceTrait for HealthMetricsService<R> {
    async fn record_sample(&self, request: RecordHealthMetricsRequest) -> Result<HealthMetricSample, ServiceError> {
        let data_request = conversions::convert_to_data_create_sample(&request);
        let sample = self
            .repository
            .create(data_request)
            .await
            .map(conversions::convert_to_domain_sample)
            .map_err(map_repo_error)?;

        info!("Recorded health metrics sample {} for patient {}", sample.id, sample.pat_id);
        Ok(sample)
    }

    async fn latest_sample(&self, pat_id: i64) -> Result<Option<HealthMetricSample>, ServiceError> {
        let latest = self
            .repository
            .get_latest(pat_id)
            .await
            .map_err(map_repo_error)?
            .map(conversions::convert_to_domain_sample);

        if latest.is_none() {
            debug!("No health metrics on record for patient {}", pat_id);
        }
        Ok(latest)
    }
}

/// Create a health metrics service backed by the SQLite repository
pub fn create_default_health_metrics_service(pool: DatabasePool) -> impl HealthMetricsServiceTrait {
    HealthMetricsService::new(HealthMetricsRepository::new(pool))
}
