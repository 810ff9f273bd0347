use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::health_metrics::{CreateHealthMetricSampleRequest, HealthMetricSample};
use super::errors::RepositoryError;
use super::storage::DatabaseStorage;

/// Repository trait for health metric samples
#[async_trait]
pub trait HealthMetricsRepositoryTrait: Send + Sync {
    /// Append a sample stamped with the current time
    async fn create(&self, request: CreateHealthMetricSampleRequest) -> Result<HealthMetricSample, RepositoryError>;

    /// Get the most recent sample for a patient
    async fn get_latest(&self, pat_id: i64) -> Result<Option<HealthMetricSample>, RepositoryError>;
}

/// SQLite-backed health metrics repository
#[derive(Debug, Clone)]
pub struct HealthMetricsRepository {
    pool: DatabasePool,
}

impl HealthMetricsRepository {
    /// Create a new repository over a connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn sample_from_row(row: &Row<'_>) -> rusqlite::Result<HealthMetricSample> {
    Ok(HealthMetricSample {
        id: row.get("id")?,
        pat_id: row.get("pat_id")?,
        bpm: row.get("bpm")?,
        spo2: row.get("spo2")?,
        temperature: row.get("temperature")?,
        humidity: row.get("humidity")?,
        ppg: row.get("ppg")?,
        timestamp: row.get("timestamp")?,
    })
}

#[async_trait]
impl HealthMetricsRepositoryTrait for HealthMetricsRepository {
    async fn create(&self, request: CreateHealthMetricSampleRequest) -> Result<HealthMetricSample, RepositoryError> {
        DatabaseStorage::run(&self.pool, "create_health_metrics", move |conn| {
            let (id, timestamp): (i64, String) = conn
                .query_row(
                    "INSERT INTO health_metrics (pat_id, bpm, spo2, temperature, humidity, ppg)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     RETURNING id, timestamp",
                    params![
                        request.pat_id,
                        request.bpm,
                        request.spo2,
                        request.temperature,
                        request.humidity,
                        request.ppg,
                    ],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .map_err(RepositoryError::from_write)?;

            debug!("Inserted health metrics sample {} for patient {}", id, request.pat_id);
            Ok(HealthMetricSample {
                id,
                pat_id: request.pat_id,
                bpm: request.bpm,
                spo2: request.spo2,
                temperature: request.temperature,
                humidity: request.humidity,
                ppg: request.ppg,
                timestamp,
            })
        })
        .await
    }

    async fn get_latest(&self, pat_id: i64) -> Result<Option<HealthMetricSample>, RepositoryError> {
        DatabaseStorage::run(&self.pool, "get_latest_health_metrics", move |conn| {
            debug!("Getting latest health metrics for patient {}", pat_id);
            let sample = conn
                .query_row(
                    "SELECT id, pat_id, bpm, spo2, temperature, humidity, ppg, timestamp
                     FROM health_metrics
                     WHERE pat_id = ?1
                     ORDER BY timestamp DESC, id DESC
                     LIMIT 1",
                    params![pat_id],
                    sample_from_row,
                )
                .optional()?;
            Ok(sample)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pat_id: i64, bpm: i64) -> CreateHealthMetricSampleRequest {
        CreateHealthMetricSampleRequest {
            pat_id,
            bpm,
            spo2: 97,
            temperature: 36.6,
            humidity: 41.25,
            ppg: 0.8125,
        }
    }

    #[tokio::test]
    async fn test_sample_values_survive_storage_exactly() {
        let repo = HealthMetricsRepository::new(DatabasePool::in_memory().unwrap());

        let request = CreateHealthMetricSampleRequest {
            pat_id: 7,
            bpm: 72,
            spo2: 98,
            temperature: 36.6,
            humidity: 45.5,
            ppg: 1.2345678901234567,
        };
        repo.create(request.clone()).await.unwrap();

        let latest = repo.get_latest(7).await.unwrap().unwrap();
        assert_eq!(latest.bpm, request.bpm);
        assert_eq!(latest.spo2, request.spo2);
        assert_eq!(latest.temperature, request.temperature);
        assert_eq!(latest.humidity, request.humidity);
        assert_eq!(latest.ppg, request.ppg);
    }

    #[tokio::test]
    async fn test_latest_sample_is_last_saved() {
        let repo = HealthMetricsRepository::new(DatabasePool::in_memory().unwrap());

        repo.create(sample(1, 70)).await.unwrap();
        repo.create(sample(1, 80)).await.unwrap();
        repo.create(sample(2, 90)).await.unwrap();

        assert_eq!(repo.get_latest(1).await.unwrap().unwrap().bpm, 80);
        assert_eq!(repo.get_latest(2).await.unwrap().unwrap().bpm, 90);
    }

    #[tokio::test]
    async fn test_no_samples_returns_none() {
        let repo = HealthMetricsRepository::new(DatabasePool::in_memory().unwrap());
        assert!(repo.get_latest(1).await.unwrap().is_none());
    }
}
