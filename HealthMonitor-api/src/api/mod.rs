pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::Router;

use health_monitor_data::database::DatabasePool;

use self::state::AppState;

/// Create the application router over an initialized connection pool
pub fn create_application(pool: DatabasePool, environment: &str) -> Router {
    routes::create_app(AppState::new(pool, environment))
}
