// Health Monitor Domain
// This crate contains the business logic for the Health Monitoring System

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the database module from the data crate for convenience
pub use health_monitor_data::database;
