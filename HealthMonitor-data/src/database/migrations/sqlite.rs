use rusqlite::Connection;
use tracing::{debug, info};

use crate::database::DatabaseError;

/// Run SQLite migrations
///
/// Every statement is `IF NOT EXISTS`, so this is safe to run on each startup
/// against a database that already holds data.
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    info!("Running SQLite migrations");

    create_patients_table(conn)?;
    create_prescriptions_table(conn)?;
    create_health_metrics_table(conn)?;
    create_latest_record_indexes(conn)?;

    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Create the patients table. `mobile` is the registration dedup key.
fn create_patients_table(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Creating patients table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS patients (
            pat_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            age INTEGER,
            gender TEXT,
            mobile TEXT UNIQUE
        )",
        [],
    )
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create patients table: {}", e)))?;

    Ok(())
}

fn create_prescriptions_table(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Creating prescriptions table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS prescriptions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pat_id INTEGER,
            prescription TEXT,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .map_err(|e| {
        DatabaseError::MigrationError(format!("Failed to create prescriptions table: {}", e))
    })?;

    Ok(())
}

fn create_health_metrics_table(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Creating health_metrics table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS health_metrics (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pat_id INTEGER,
            bpm INTEGER,
            spo2 INTEGER,
            temperature REAL,
            humidity REAL,
            ppg REAL,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .map_err(|e| {
        DatabaseError::MigrationError(format!("Failed to create health_metrics table: {}", e))
    })?;

    Ok(())
}

/// Index the per-patient "latest record" lookups
fn create_latest_record_indexes(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Creating indexes on (pat_id, timestamp)");

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_prescriptions_pat_id_timestamp
            ON prescriptions (pat_id, timestamp DESC);
         CREATE INDEX IF NOT EXISTS idx_health_metrics_pat_id_timestamp
            ON health_metrics (pat_id, timestamp DESC);",
    )
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create index: {}", e)))?;

    Ok(())
}
