use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // System endpoints
        crate::api::handlers::home::home,
        crate::api::handlers::health::health_check,

        // Patient endpoints
        crate::api::handlers::patient::register_patient,

        // Prescription endpoints
        crate::api::handlers::prescription::save_prescription,
        crate::api::handlers::prescription::get_prescription,

        // Health metrics endpoints
        crate::api::handlers::health_metrics::save_health_metrics,
        crate::api::handlers::health_metrics::get_health_metrics,
    ),
    components(
        schemas(
            // Entities
            crate::entities::common::PublicMessageResponse,
            crate::entities::common::PublicErrorResponse,
            crate::entities::patient::PublicRegisterPatientRequest,
            crate::entities::patient::PublicRegisterPatientResponse,
            crate::entities::prescription::PublicSavePrescriptionRequest,
            crate::entities::prescription::PublicPrescriptionResponse,
            crate::entities::health_metrics::PublicRecordHealthMetricsRequest,
            crate::entities::health_metrics::PublicHealthMetricsReading,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "system", description = "Service greeting"),
        (name = "health", description = "Health check endpoint"),
        (name = "patients", description = "Patient registration"),
        (name = "prescriptions", description = "Prescription storage and lookup"),
        (name = "health_metrics", description = "Health sensor samples")
    ),
    info(
        title = "Health Monitoring System API",
        version = "0.1.0",
        description = "API for registering patients and recording prescriptions and health sensor readings",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "Health Monitoring System API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags should be defined");
        for name in ["system", "health", "patients", "prescriptions", "health_metrics"] {
            assert!(tags.iter().any(|tag| tag.name == name), "missing tag {}", name);
        }

        for path in [
            "/",
            "/health",
            "/register",
            "/prescription",
            "/prescription/{pat_id}",
            "/health_metrics",
            "/health_metrics/{pat_id}",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_api_doc_serializes_to_json() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("PublicRegisterPatientRequest"));
        assert!(json.contains("PublicHealthMetricsReading"));
    }
}
