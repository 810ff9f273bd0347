// Health Monitor Data
// This crate owns the SQLite store: connection pool, schema and repositories

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
