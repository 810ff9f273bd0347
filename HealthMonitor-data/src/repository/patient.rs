use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::patient::{CreatePatientRequest, Patient};
use super::errors::RepositoryError;
use super::storage::DatabaseStorage;

/// Repository trait for registered patients
#[async_trait]
pub trait PatientRepositoryTrait: Send + Sync {
    /// Find the patient registered with a mobile number
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<Patient>, RepositoryError>;

    /// Insert a new patient. Fails with [`RepositoryError::Conflict`] when the
    /// mobile number is already taken.
    async fn create(&self, request: CreatePatientRequest) -> Result<Patient, RepositoryError>;
}

/// SQLite-backed patient repository
#[derive(Debug, Clone)]
pub struct PatientRepository {
    pool: DatabasePool,
}

impl PatientRepository {
    /// Create a new repository over a connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        pat_id: row.get("pat_id")?,
        name: row.get("name")?,
        age: row.get("age")?,
        gender: row.get("gender")?,
        mobile: row.get("mobile")?,
    })
}

#[async_trait]
impl PatientRepositoryTrait for PatientRepository {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<Patient>, RepositoryError> {
        let mobile = mobile.to_string();

        DatabaseStorage::run(&self.pool, "find_patient_by_mobile", move |conn| {
            debug!("Looking up patient by mobile number");
            let patient = conn
                .query_row(
                    "SELECT pat_id, name, age, gender, mobile FROM patients WHERE mobile = ?1",
                    params![mobile],
                    patient_from_row,
                )
                .optional()?;
            Ok(patient)
        })
        .await
    }

    async fn create(&self, request: CreatePatientRequest) -> Result<Patient, RepositoryError> {
        DatabaseStorage::run(&self.pool, "create_patient", move |conn| {
            let pat_id: i64 = conn
                .query_row(
                    "INSERT INTO patients (name, age, gender, mobile) VALUES (?1, ?2, ?3, ?4)
                     RETURNING pat_id",
                    params![request.name, request.age, request.gender, request.mobile],
                    |row| row.get(0),
                )
                .map_err(RepositoryError::from_write)?;

            debug!("Inserted patient {}", pat_id);
            Ok(Patient {
                pat_id,
                name: request.name,
                age: request.age,
                gender: request.gender,
                mobile: request.mobile,
            })
        })
        .await
    }
}
