use std::fmt::Display;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::domain::error::DomainError;

/// Map any storage error to a domain database error.
pub fn db_err(e: impl Display) -> DomainError {
    DomainError::database(e.to_string())
}

fn is_in_memory(dsn: &str) -> bool {
    dsn.contains(":memory:") || dsn.contains("mode=memory")
}

/// Open a connection pool for `dsn`.
///
/// In-memory SQLite databases live only as long as their connection, so the
/// pool is pinned to a single connection that is never recycled.
///
/// # Errors
///
/// Returns the driver error when the database cannot be reached.
pub async fn connect(dsn: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(dsn.to_owned());
    opts.sqlx_logging(false);

    if is_in_memory(dsn) {
        let forever = Duration::from_secs(60 * 60 * 24 * 365);
        opts.max_connections(1)
            .min_connections(1)
            .idle_timeout(forever)
            .max_lifetime(forever);
    } else {
        opts.max_connections(max_connections.max(1));
    }

    Database::connect(opts).await
}
