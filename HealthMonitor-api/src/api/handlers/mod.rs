pub mod health;
pub mod health_metrics;
pub mod home;
pub mod patient;
pub mod prescription;


// Re-export handlers for easier imports
pub use health::health_check;
pub use health_metrics::{get_health_metrics, save_health_metrics};
pub use home::home;
pub use patient::register_patient;
pub use prescription::{get_prescription, save_prescription};
