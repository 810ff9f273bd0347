use rusqlite::Connection;
use tracing::debug;

use crate::database::DatabasePool;
use super::errors::RepositoryError;

/// Scoped database access shared by the SQLite repositories
pub(crate) struct DatabaseStorage;

impl DatabaseStorage {
    /// Run `operation` against one pooled connection on the blocking thread pool.
    ///
    /// The connection is checked out inside the blocking task and returned to
    /// the pool when the task finishes, whether `operation` succeeds, fails or
    /// panics.
    pub(crate) async fn run<T, F>(
        pool: &DatabasePool,
        name: &'static str,
        operation: F,
    ) -> Result<T, RepositoryError>
    where
        F: FnOnce(&Connection) -> Result<T, RepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        debug!("Running storage operation: {}", name);

        let pool = pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            operation(&conn)
        })
        .await
        .map_err(|e| RepositoryError::Task(format!("{}: {}", name, e)))?
    }
}
