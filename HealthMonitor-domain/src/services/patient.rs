use async_trait::async_trait;
use tracing::{debug, info};
use validator::Validate;

use health_monitor_data::database::DatabasePool;
use health_monitor_data::repository::{PatientRepository, PatientRepositoryTrait};

use crate::entities::conversions;
use crate::entities::patient::{PatientRegistration, RegisterPatientRequest, RegistrationOutcome};
use super::errors::{map_repo_error, ServiceError};

/// Trait for patient registration
#[async_trait]
pub trait PatientServiceTrait: Send + Sync {
    /// Register a patient, or return the patient already registered with the
    /// same mobile number
    async fn register(&self, request: RegisterPatientRequest) -> Result<PatientRegistration, ServiceError>;
}

/// Patient service for domain logic
pub struct PatientService<R: PatientRepositoryTrait> {
    repository: R,
}

impl<R: PatientRepositoryTrait> PatientService<R> {
    /// Create a new patient service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PatientRepositoryTrait> PatientServiceTrait for PatientService<R> {
    async fn register(&self, request: RegisterPatientRequest) -> Result<PatientRegistration, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::from_validation(&e))?;

        // lookup and insert are separate statements; a concurrent insert of
        // the same mobile number surfaces as a conflict from the store
        if let Some(existing) = self
            .repository
            .find_by_mobile(&request.mobile)
            .await
            .map_err(map_repo_error)?
        {
            debug!("Mobile number already registered to patient {}", existing.pat_id);
            return Ok(PatientRegistration {
                pat_id: existing.pat_id,
                outcome: RegistrationOutcome::ExistingPatient,
            });
        }

        let data_request = conversions::convert_to_data_create_patient(&request);
        let patient = self
            .repository
            .create(data_request)
            .await
            .map(conversions::convert_to_domain_patient)
            .map_err(map_repo_error)?;

        info!("Registered new patient {}", patient.pat_id);
        Ok(PatientRegistration {
            pat_id: patient.pat_id,
            outcome: RegistrationOutcome::Registered,
        })
    }
}

/// Create a patient service backed by the SQLite repository
pub fn create_default_patient_service(pool: DatabasePool) -> impl PatientServiceTrait {
    PatientService::new(PatientRepository::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_monitor_data::models::patient::{CreatePatientRequest, Patient};
    use health_monitor_data::repository::RepositoryError;
    use mockall::mock;

    mock! {
        pub PatientRepo {}

        #[async_trait]
        impl PatientRepositoryTrait for PatientRepo {
            async fn find_by_mobile(&self, mobile: &str) -> Result<Option<Patient>, RepositoryError>;
            async fn create(&self, request: CreatePatientRequest) -> Result<Patient, RepositoryError>;
        }
    }

    fn request(mobile: &str) -> RegisterPatientRequest {
        RegisterPatientRequest {
            name: "A".to_string(),
            age: 30,
            gender: "F".to_string(),
            mobile: mobile.to_string(),
        }
    }

    fn stored(pat_id: i64, mobile: &str) -> Patient {
        Patient {
            pat_id,
            name: "A".to_string(),
            age: 30,
            gender: "F".to_string(),
            mobile: mobile.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_new_patient() {
        let mut repo = MockPatientRepo::new();
        repo.expect_find_by_mobile()
            .withf(|mobile: &str| mobile == "555")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|request: &CreatePatientRequest| request.mobile == "555" && request.age == 30)
            .times(1)
            .returning(|request| Ok(stored(1, &request.mobile)));

        let service = PatientService::new(repo);
        let registration = service.register(request("555")).await.unwrap();

        assert_eq!(registration.pat_id, 1);
        assert_eq!(registration.outcome, RegistrationOutcome::Registered);
    }

    #[tokio::test]
    async fn test_register_existing_mobile_returns_existing_id() {
        let mut repo = MockPatientRepo::new();
        repo.expect_find_by_mobile()
            .times(1)
            .returning(|mobile| Ok(Some(stored(7, mobile))));
        repo.expect_create().never();

        let service = PatientService::new(repo);
        let registration = service.register(request("555")).await.unwrap();

        assert_eq!(registration.pat_id, 7);
        assert_eq!(registration.outcome, RegistrationOutcome::ExistingPatient);
    }

    #[tokio::test]
    async fn test_register_lost_race_is_conflict() {
        let mut repo = MockPatientRepo::new();
        repo.expect_find_by_mobile().returning(|_| Ok(None));
        repo.expect_create().returning(|_| {
            Err(RepositoryError::Conflict(
                "UNIQUE constraint failed: patients.mobile".to_string(),
            ))
        });

        let service = PatientService::new(repo);
        let err = service.register(request("555")).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields_before_store() {
        let mut repo = MockPatientRepo::new();
        repo.expect_find_by_mobile().never();
        repo.expect_create().never();

        let service = PatientService::new(repo);
        let mut empty = request("");
        empty.name = String::new();

        match service.register(empty).await.unwrap_err() {
            ServiceError::ValidationError(message) => {
                assert!(message.starts_with("mobile:"), "fields not sorted: {}", message);
                assert!(message.contains("name: Name must not be empty"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_store_failure_is_repository_error() {
        let mut repo = MockPatientRepo::new();
        repo.expect_find_by_mobile()
            .returning(|_| Err(RepositoryError::Task("find_patient_by_mobile: cancelled".to_string())));

        let service = PatientService::new(repo);
        let err = service.register(request("555")).await.unwrap_err();

        assert!(matches!(err, ServiceError::RepositoryError(_)));
    }
}
