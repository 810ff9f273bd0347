// Database migrations module
// Schema creation is idempotent and runs every time a pool is opened.

mod sqlite;
pub use sqlite::run_migrations as run_sqlite_migrations;
