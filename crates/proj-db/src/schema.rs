//! Schema bootstrap.
//!
//! The DDL is embedded at compile time and applied on every open. All
//! statements use `IF NOT EXISTS`, so re-running against an existing store is
//! a no-op.

use crate::ProjectsDb;
use crate::error::DatabaseError;

/// Project, material, step, category and the project/category link table.
const SCHEMA_001: &str = include_str!("../schema/001_projects.sql");

impl ProjectsDb {
    pub(crate) async fn bootstrap_schema(&self) -> Result<(), DatabaseError> {
        let conn = self.connect().await?;
        conn.execute_batch(SCHEMA_001)
            .await
            .map_err(|e| DatabaseError::Schema(format!("001_projects: {e}")))?;
        Ok(())
    }
}
