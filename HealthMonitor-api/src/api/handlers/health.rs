use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use health_monitor_data::database::DatabasePool;
use health_monitor_domain::health::{
    self, ComponentStatus as DomainComponentStatus, HealthServiceTrait, SystemHealth, SystemStatus,
};

use crate::api::state::{AppEnvironment, HealthService};

/// Health check response model
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Unix timestamp of when the response was generated
    pub timestamp: i64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<i64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Database connection status
    pub database: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

static SERVER_START_TIME: OnceCell<DateTime<Utc>> = OnceCell::new();

/// Record the server start time used for uptime reporting. Later calls keep
/// the first value.
pub fn initialize_server_start_time() {
    SERVER_START_TIME.get_or_init(Utc::now);
}

/// Health check endpoint to verify the API and its database are working
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 500, description = "API is not healthy", body = HealthResponse),
        (status = 503, description = "API is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(health_service, environment))]
pub async fn health_check(
    State(health_service): State<HealthService>,
    State(environment): State<AppEnvironment>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = Utc::now();
    let uptime = SERVER_START_TIME
        .get()
        .map(|started| (now - *started).num_seconds().max(0));

    let system_health = health_service.get_system_health().await;

    let (status_code, overall_status) = match system_health.status {
        SystemStatus::Healthy => (StatusCode::OK, "ok"),
        SystemStatus::Degraded => (StatusCode::SERVICE_UNAVAILABLE, "degraded"),
        SystemStatus::Unhealthy => (StatusCode::INTERNAL_SERVER_ERROR, "error"),
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now.timestamp(),
        uptime,
        components: ComponentStatus {
            database: component_status(&system_health, "database"),
            api: component_status(&system_health, "api"),
        },
        environment: environment.as_str().to_string(),
    };

    (status_code, Json(response))
}

fn component_status(system_health: &SystemHealth, name: &str) -> ComponentHealthStatus {
    match system_health.components.get(name) {
        Some(component) => ComponentHealthStatus {
            status: map_component_status(&component.status),
            message: component.details.clone(),
        },
        None => ComponentHealthStatus {
            status: map_component_status(&DomainComponentStatus::Healthy),
            message: None,
        },
    }
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }.to_string()
}

/// Health service that probes the connection pool
#[derive(Debug, Clone)]
pub struct PoolHealthService {
    pool: DatabasePool,
}

impl PoolHealthService {
    /// Create a new health service
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthServiceTrait for PoolHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        health::get_system_health(&self.pool).await
    }
}

/// Factory function to create a health service
pub fn create_health_service(pool: DatabasePool) -> HealthService {
    Arc::new(PoolHealthService::new(pool))
}
