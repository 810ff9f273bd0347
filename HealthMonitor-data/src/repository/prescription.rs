use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::prescription::{CreatePrescriptionRequest, Prescription};
use super::errors::RepositoryError;
use super::storage::DatabaseStorage;

/// Repository trait for prescriptions
#[async_trait]
pub trait PrescriptionRepositoryTrait: Send + Sync {
    /// Append a prescription stamped with the current time
    async fn create(&self, request: CreatePrescriptionRequest) -> Result<Prescription, RepositoryError>;

    /// Get the most recent prescription for a patient
    async fn get_latest(&self, pat_id: i64) -> Result<Option<Prescription>, RepositoryError>;
}

/// SQLite-backed prescription repository
#[derive(Debug, Clone)]
pub struct PrescriptionRepository {
    pool: DatabasePool,
}

impl PrescriptionRepository {
    /// Create a new repository over a connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn prescription_from_row(row: &Row<'_>) -> rusqlite::Result<Prescription> {
    Ok(Prescription {
        id: row.get("id")?,
        pat_id: row.get("pat_id")?,
        prescription: row.get("prescription")?,
        timestamp: row.get("timestamp")?,
    })
}

#[async_trait]
impl PrescriptionRepositoryTrait for PrescriptionRepository {
    async fn create(&self, request: CreatePrescriptionRequest) -> Result<Prescription, RepositoryError> {
        DatabaseStorage::run(&self.pool, "create_prescription", move |conn| {
            let (id, timestamp): (i64, String) = conn
                .query_row(
                    "INSERT INTO prescriptions (pat_id, prescription) VALUES (?1, ?2)
                     RETURNING id, timestamp",
                    params![request.pat_id, request.prescription],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .map_err(RepositoryError::from_write)?;

            debug!("Inserted prescription {} for patient {}", id, request.pat_id);
            Ok(Prescription {
                id,
                pat_id: request.pat_id,
                prescription: request.prescription,
                timestamp,
            })
        })
        .await
    }

    async fn get_latest(&self, pat_id: i64) -> Result<Option<Prescription>, RepositoryError> {
        DatabaseStorage::run(&self.pool, "get_latest_prescription", move |conn| {
            debug!("Getting latest prescription for patient {}", pat_id);
            // timestamps have one-second resolution; id breaks ties
            let prescription = conn
                .query_row(
                    "SELECT id, pat_id, prescription, timestamp FROM prescriptions
                     WHERE pat_id = ?1
                     ORDER BY timestamp DESC, id DESC
                     LIMIT 1",
                    params![pat_id],
                    prescription_from_row,
                )
                .optional()?;
            Ok(prescription)
        })
        .await
    }
}
