//! Project repository: CRUD on `project` plus the by-id aggregate fetch.
//!
//! Materials, steps and categories are read-only here. They arrive with a
//! by-id fetch and are removed with their project through `ON DELETE CASCADE`.

use libsql::{Connection, Row};
use rust_decimal::Decimal;

use proj_core::entities::{Category, Material, Project, Step};
use proj_core::hours::normalize_hours;

use crate::ProjectsDb;
use crate::binder::{
    FromRow, Parameters, execute_statement, get_decimal, get_opt_i32, get_opt_string,
    last_insert_id, query_all, query_optional,
};
use crate::error::DatabaseError;

const INSERT_PROJECT: &str = "INSERT INTO project \
     (project_name, estimated_hours, actual_hours, difficulty, notes) \
     VALUES (?1, ?2, ?3, ?4, ?5)";

const SELECT_ALL_PROJECTS: &str = "SELECT project_id, project_name, estimated_hours, \
     actual_hours, difficulty, notes FROM project ORDER BY project_name, project_id";

const SELECT_PROJECT_BY_ID: &str = "SELECT project_id, project_name, estimated_hours, \
     actual_hours, difficulty, notes FROM project WHERE project_id = ?1";

const SELECT_MATERIALS: &str = "SELECT material_id, project_id, material_name, num_required, \
     cost FROM material WHERE project_id = ?1 ORDER BY material_id";

const SELECT_STEPS: &str = "SELECT step_id, project_id, step_text, step_order \
     FROM step WHERE project_id = ?1 ORDER BY step_order, step_id";

const SELECT_CATEGORIES: &str = "SELECT c.category_id, c.category_name \
     FROM project_category pc JOIN category c USING (category_id) \
     WHERE pc.project_id = ?1 ORDER BY c.category_id";

const UPDATE_PROJECT: &str = "UPDATE project SET project_name = ?1, estimated_hours = ?2, \
     actual_hours = ?3, difficulty = ?4, notes = ?5 WHERE project_id = ?6";

const DELETE_PROJECT: &str = "DELETE FROM project WHERE project_id = ?1";

impl FromRow for Project {
    fn from_row(row: &Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            name: row.get::<String>(1)?,
            estimated_hours: get_decimal(row, 2)?,
            actual_hours: get_decimal(row, 3)?,
            difficulty: get_opt_i32(row, 4)?,
            notes: get_opt_string(row, 5)?,
            ..Self::default()
        })
    }
}

impl FromRow for Material {
    fn from_row(row: &Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            project_id: row.get::<i64>(1)?,
            name: row.get::<String>(2)?,
            quantity: get_opt_i32(row, 3)?,
            cost: get_decimal(row, 4)?,
        })
    }
}

impl FromRow for Step {
    fn from_row(row: &Row) -> Result<Self, DatabaseError> {
        let order = row.get::<i64>(3)?;
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            project_id: row.get::<i64>(1)?,
            text: row.get::<String>(2)?,
            order: i32::try_from(order).map_err(|_| {
                DatabaseError::Query(format!("step_order {order} does not fit in i32"))
            })?,
        })
    }
}

impl FromRow for Category {
    fn from_row(row: &Row) -> Result<Self, DatabaseError> {
        Ok(Self {
            id: Some(row.get::<i64>(0)?),
            name: row.get::<String>(1)?,
        })
    }
}

/// Flat project columns bound to positions 1 through 5.
///
/// Hours are normalized before binding; a value that cannot carry two
/// fractional digits is rejected and nothing is bound.
fn project_params(project: &Project) -> Result<Parameters, DatabaseError> {
    let estimated_hours = checked_hours("estimated_hours", project.estimated_hours)?;
    let actual_hours = checked_hours("actual_hours", project.actual_hours)?;
    Ok(Parameters::new()
        .bind(1, &project.name)
        .bind(2, &estimated_hours)
        .bind(3, &actual_hours)
        .bind(4, &project.difficulty)
        .bind(5, &project.notes))
}

fn checked_hours(
    column: &str,
    value: Option<Decimal>,
) -> Result<Option<Decimal>, DatabaseError> {
    value
        .map(normalize_hours)
        .transpose()
        .map_err(|e| DatabaseError::InvalidState(format!("{column}: {e}")))
}

async fn insert_project_row(conn: &Connection, params: Parameters) -> Result<i64, DatabaseError> {
    execute_statement(conn, INSERT_PROJECT, params).await?;
    last_insert_id(conn).await
}

async fn load_project_aggregate(
    conn: &Connection,
    project_id: i64,
) -> Result<Option<Project>, DatabaseError> {
    let by_id = || Parameters::new().bind(1, &project_id);

    let Some(mut project) = query_optional::<Project>(conn, SELECT_PROJECT_BY_ID, by_id()).await?
    else {
        return Ok(None);
    };
    project.materials = query_all(conn, SELECT_MATERIALS, by_id()).await?;
    project.steps = query_all(conn, SELECT_STEPS, by_id()).await?;
    project.categories = query_all(conn, SELECT_CATEGORIES, by_id()).await?;
    Ok(Some(project))
}

impl ProjectsDb {
    /// Insert the flat fields of `project` and return it with its new id.
    ///
    /// Child collections on the input are ignored and returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails; nothing is written.
    pub async fn insert_project(&self, project: &Project) -> Result<Project, DatabaseError> {
        let params = project_params(project)?;
        let id = self
            .with_transaction(move |tx| Box::pin(insert_project_row(tx, params)))
            .await?;

        tracing::debug!(project_id = id, name = %project.name, "inserted project");
        let mut saved = project.clone();
        saved.id = Some(id);
        Ok(saved)
    }

    /// All projects as summaries, ordered by name. Child collections are empty.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query or a row mapping fails.
    pub async fn fetch_all_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        let projects = self
            .with_transaction(|tx| {
                Box::pin(query_all::<Project>(tx, SELECT_ALL_PROJECTS, Parameters::new()))
            })
            .await?;
        tracing::debug!(count = projects.len(), "fetched all projects");
        Ok(projects)
    }

    /// The project with its materials, steps and categories, or `None`.
    ///
    /// The project row and every child collection are read in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any of the four reads fails.
    pub async fn fetch_project_by_id(
        &self,
        project_id: i64,
    ) -> Result<Option<Project>, DatabaseError> {
        let project = self
            .with_transaction(move |tx| Box::pin(load_project_aggregate(tx, project_id)))
            .await?;
        tracing::debug!(project_id, found = project.is_some(), "fetched project");
        Ok(project)
    }

    /// Overwrite the flat fields of the stored project with `project.id`.
    ///
    /// Returns `true` when exactly one row changed, `false` when no project has
    /// that id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if `project.id` is `None`, or the
    /// statement failure.
    pub async fn modify_project_details(&self, project: &Project) -> Result<bool, DatabaseError> {
        let Some(project_id) = project.id else {
            return Err(DatabaseError::InvalidState(
                "cannot modify a project that has no id".into(),
            ));
        };

        let params = project_params(project)?.bind(6, &project_id);
        let affected = self
            .with_transaction(move |tx| Box::pin(execute_statement(tx, UPDATE_PROJECT, params)))
            .await?;

        tracing::debug!(project_id, affected, "modified project");
        Ok(affected == 1)
    }

    /// Delete the project and, through the cascade, all of its child rows.
    ///
    /// Returns `true` when a project was removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails; nothing is removed.
    pub async fn delete_project(&self, project_id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .with_transaction(move |tx| {
                Box::pin(execute_statement(
                    tx,
                    DELETE_PROJECT,
                    Parameters::new().bind(1, &project_id),
                ))
            })
            .await?;

        tracing::debug!(project_id, affected, "deleted project");
        Ok(affected == 1)
    }
}
