// Public entities for the Health Monitoring System API
// This module contains the JSON bodies exchanged with clients

// Patient registration
pub mod patient;

// Prescriptions
pub mod prescription;

// Health sensor samples
pub mod health_metrics;

// Shared message and error bodies
pub mod common;
