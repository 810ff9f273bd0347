use axum::{
    http::{header, HeaderName, HeaderValue},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::{health, health_metrics, home, patient, prescription};
use crate::api::state::AppState;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    let app = Router::new()
        .route("/", get(home::home))
        .route("/register", post(patient::register_patient))
        .route("/prescription", post(prescription::save_prescription))
        .route("/prescription/:pat_id", get(prescription::get_prescription))
        .route("/health_metrics", post(health_metrics::save_health_metrics))
        .route("/health_metrics/:pat_id", get(health_metrics::get_health_metrics))
        .route("/health", get(health::health_check))
        .with_state(state);

    debug!("Routes configured");

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    // Initialize health check service startup time
    health::initialize_server_start_time();

    configure_middleware(app)
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}

/// Apply request tracing, CORS and response security headers
pub fn configure_middleware(app: Router) -> Router {
    // any origin, method and header may call the API
    let cors = CorsLayer::permissive();

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    app.layer(security_headers)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
