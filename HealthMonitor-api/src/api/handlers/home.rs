use axum::Json;
use tracing::{info, instrument};

use crate::entities::common::PublicMessageResponse;

/// Greeting returned by the root endpoint
pub const WELCOME_MESSAGE: &str = "Welcome to the Health Monitoring System";

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = PublicMessageResponse)
    ),
    tag = "system"
)]
#[instrument]
pub async fn home() -> Json<PublicMessageResponse> {
    info!("Home endpoint called");
    Json(PublicMessageResponse::new(WELCOME_MESSAGE))
}
