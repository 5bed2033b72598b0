//! # trellis-db
//!
//! libSQL storage for the Trellis audit log.
//!
//! [`TrellisDb`] owns the connection and runs the embedded migration on open.
//! Repository methods live in [`repos`]; the only write path for audit entries
//! is [`recorder::AuditRecorder`], which attributes every entry to the actor
//! resolved for the current request.

pub mod error;
pub mod helpers;
mod migrations;
pub mod recorder;
pub mod repos;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use error::DatabaseError;
use libsql::Builder;

pub use recorder::{AuditError, AuditRecorder};
pub use repos::audit_logs::AuditLogFilter;

/// Database handle for audit log storage.
///
/// Cheap to clone: clones share the same underlying database and connection.
#[derive(Clone)]
pub struct TrellisDb {
    #[allow(dead_code)]
    db: Arc<libsql::Database>,
    conn: libsql::Connection,
}

impl TrellisDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let trellis_db = Self {
            db: Arc::new(db),
            conn,
        };
        trellis_db.run_migrations().await?;
        tracing::debug!(path, "opened audit log database");
        Ok(trellis_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
