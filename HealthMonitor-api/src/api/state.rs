use std::sync::Arc;

use axum::extract::FromRef;

use health_monitor_data::database::DatabasePool;
use health_monitor_domain::health::HealthServiceTrait;
use health_monitor_domain::services::{
    create_default_health_metrics_service, create_default_patient_service,
    create_default_prescription_service, HealthMetricsServiceTrait, PatientServiceTrait,
    PrescriptionServiceTrait,
};

use crate::api::handlers::health::create_health_service;
use crate::config::DEFAULT_ENVIRONMENT;

/// Service types for dependency injection
pub type PatientService = Arc<dyn PatientServiceTrait + Send + Sync>;
pub type PrescriptionService = Arc<dyn PrescriptionServiceTrait + Send + Sync>;
pub type HealthMetricsService = Arc<dyn HealthMetricsServiceTrait + Send + Sync>;
pub type HealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

/// Deployment environment name reported by the health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEnvironment(pub Arc<str>);

impl Default for AppEnvironment {
    fn default() -> Self {
        Self(Arc::from(DEFAULT_ENVIRONMENT))
    }
}

impl AppEnvironment {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shared state handed to every handler
#[derive(Clone, FromRef)]
pub struct AppState {
    pub patients: PatientService,
    pub prescriptions: PrescriptionService,
    pub health_metrics: HealthMetricsService,
    pub health: HealthService,
    pub environment: AppEnvironment,
}

impl AppState {
    /// Wire the default SQLite-backed services over one connection pool
    pub fn new(pool: DatabasePool, environment: &str) -> Self {
        Self {
            patients: Arc::new(create_default_patient_service(pool.clone())),
            prescriptions: Arc::new(create_default_prescription_service(pool.clone())),
            health_metrics: Arc::new(create_default_health_metrics_service(pool.clone())),
            health: create_health_service(pool),
            environment: AppEnvironment(Arc::from(environment)),
        }
    }
}
