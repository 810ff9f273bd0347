//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, warn};

use health_monitor_data::database::{DatabasePool, PoolStatus};

/// Probe latency above which the database is reported as degraded
pub const DEGRADED_PROBE_LATENCY: Duration = Duration::from_secs(1);

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Check if the database is available and functioning properly
///
/// Returns:
/// - Ok(true) if a pooled connection answered the probe query promptly
/// - Ok(false) if the probe succeeded but took longer than [`DEGRADED_PROBE_LATENCY`]
/// - Err if no connection could be acquired or the probe failed
pub async fn check_database_status(pool: &DatabasePool) -> Result<bool, String> {
    let pool = pool.clone();
    let status = tokio::task::spawn_blocking(move || pool.check())
        .await
        .map_err(|e| format!("Database health check did not complete: {}", e))?
        .map_err(|e| format!("Database connection error: {}", e))?;

    Ok(probe_is_prompt(&status))
}

fn probe_is_prompt(status: &PoolStatus) -> bool {
    if status.probe_latency > DEGRADED_PROBE_LATENCY {
        warn!(
            "Database probe against {} took {:?}",
            status.location, status.probe_latency
        );
        return false;
    }
    true
}

/// Build the system health report from the outcome of a database check
pub fn system_health_from(db_status: Result<bool, String>) -> SystemHealth {
    let db_component = match db_status {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Database is experiencing high latency".to_string()),
        },
        Err(e) => {
            error!("Database health check failed: {}", e);
            HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some("Database connection failed".to_string()),
            }
        }
    };

    // the API component is healthy whenever this code runs
    let api_component = HealthComponent {
        status: ComponentStatus::Healthy,
        details: None,
    };

    let overall_status = if db_component.status == ComponentStatus::Unhealthy {
        SystemStatus::Unhealthy
    } else if db_component.status == ComponentStatus::Degraded {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    };

    SystemHealth {
        status: overall_status,
        components: vec![
            ("database".to_string(), db_component),
            ("api".to_string(), api_component),
        ].into_iter().collect(),
    }
}

/// Get overall system health
pub async fn get_system_health(pool: &DatabasePool) -> SystemHealth {
    system_health_from(check_database_status(pool).await)
}
