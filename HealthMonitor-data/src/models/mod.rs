// Storage models, one module per table
pub mod health_metrics;
pub mod patient;
pub mod prescription;
