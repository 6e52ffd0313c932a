//! # proj-db
//!
//! libSQL data access for the project tracker.
//!
//! Every public operation opens its own connection, runs inside exactly one
//! transaction and releases the connection before returning. Rows are mapped
//! through the [`binder`] module; project reads and writes live in
//! [`repos::project`] and the business-facing façade in [`service`].

pub mod binder;
pub mod error;
pub mod repos;
mod schema;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use futures::future::LocalBoxFuture;
use libsql::{Builder, Connection, Transaction};
use proj_config::ConnectionTarget;

/// Future returned by a [`ProjectsDb::with_transaction`] body.
pub type TxFuture<'tx, T> = LocalBoxFuture<'tx, Result<T, DatabaseError>>;

/// Handle to the relational store.
///
/// Holds the libSQL database, not a connection. Connections are opened per
/// operation by [`ProjectsDb::connect`].
pub struct ProjectsDb {
    db: libsql::Database,
}

impl ProjectsDb {
    /// Open a local database file, creating it and its parent directory if
    /// needed, and bootstrap the schema.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` if the file cannot be opened and
    /// `DatabaseError::Schema` if the bootstrap batch fails.
    pub async fn open_local(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        // Each operation connects anew, so an in-memory store would be empty
        // on every call.
        if path.as_os_str() == ":memory:" {
            return Err(DatabaseError::Unavailable(
                "in-memory databases are not supported; use a file path".into(),
            ));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::Unavailable(format!("{}: {e}", parent.display()))
                })?;
            }
        }

        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Unavailable(format!("{}: {e}", path.display())))?;
        let projects_db = Self { db };
        projects_db.bootstrap_schema().await?;
        tracing::debug!(path = %path.display(), "opened local database");
        Ok(projects_db)
    }

    /// Open a database served by a remote libSQL server.
    ///
    /// The schema is expected to exist already; no bootstrap runs.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` if the handle cannot be built.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await
            .map_err(|e| DatabaseError::Unavailable(format!("{url}: {e}")))?;
        tracing::debug!(url, "opened remote database");
        Ok(Self { db })
    }

    /// Open whichever store the configuration resolved to.
    ///
    /// # Errors
    ///
    /// See [`ProjectsDb::open_local`] and [`ProjectsDb::open_remote`].
    pub async fn open(target: &ConnectionTarget) -> Result<Self, DatabaseError> {
        match target {
            ConnectionTarget::Local(path) => Self::open_local(path).await,
            ConnectionTarget::Remote { url, auth_token } => {
                Self::open_remote(url, auth_token).await
            }
        }
    }

    /// Open a fresh connection with foreign keys enforced.
    ///
    /// The caller owns the connection; dropping it releases it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` if the store refuses the connection.
    pub async fn connect(&self) -> Result<Connection, DatabaseError> {
        let conn = self
            .db
            .connect()
            .map_err(|e| DatabaseError::Unavailable(e.to_string()))?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Unavailable(format!("PRAGMA foreign_keys: {e}")))?;
        Ok(conn)
    }

    /// Run `body` inside one transaction on a fresh connection.
    ///
    /// Commits when `body` returns `Ok` and rolls back when it returns `Err`.
    /// The original error is always the one returned; a failed rollback is
    /// logged and otherwise ignored. The connection is released on every path.
    ///
    /// ```ignore
    /// let count = db
    ///     .with_transaction(|tx| Box::pin(binder::execute_statement(tx, "DELETE FROM step", Parameters::new())))
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unavailable` when no connection can be opened,
    /// the error produced by `body`, or the commit failure.
    pub async fn with_transaction<T, F>(&self, body: F) -> Result<T, DatabaseError>
    where
        F: for<'tx> FnOnce(&'tx Transaction) -> TxFuture<'tx, T>,
    {
        let conn = self.connect().await?;
        let tx = conn.transaction().await?;

        let outcome = body(&tx).await;
        match outcome {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, %error, "rollback failed after error");
                } else {
                    tracing::debug!(%error, "transaction rolled back");
                }
                Err(error)
            }
        }
    }
}
