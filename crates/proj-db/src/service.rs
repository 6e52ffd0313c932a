//! Business façade over [`ProjectsDb`].
//!
//! Turns "no such row" outcomes into typed `CoreError` failures and passes
//! everything else through unchanged.

use std::path::Path;

use proj_config::ConnectionTarget;
use proj_core::entities::Project;
use proj_core::errors::CoreError;

use crate::ProjectsDb;
use crate::error::{DatabaseError, ServiceError};
use crate::updates::project::ProjectUpdate;

const PROJECT: &str = "Project";

pub struct ProjectsService {
    db: ProjectsDb,
}

impl ProjectsService {
    /// Open a service over a local database file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot be opened.
    pub async fn open_local(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(ProjectsDb::open_local(path).await?))
    }

    /// Open a service over whichever store the configuration resolved to.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot be opened.
    pub async fn open(target: &ConnectionTarget) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(ProjectsDb::open(target).await?))
    }

    #[must_use]
    pub const fn from_db(db: ProjectsDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &ProjectsDb {
        &self.db
    }

    /// Persist a new project and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Database` if the insert fails.
    pub async fn add_project(&self, project: &Project) -> Result<Project, ServiceError> {
        Ok(self.db.insert_project(project).await?)
    }

    /// Project summaries ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Database` if the query fails.
    pub async fn fetch_all_projects(&self) -> Result<Vec<Project>, ServiceError> {
        Ok(self.db.fetch_all_projects().await?)
    }

    /// The full project aggregate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no project has `project_id`.
    pub async fn fetch_project_by_id(&self, project_id: i64) -> Result<Project, ServiceError> {
        self.db
            .fetch_project_by_id(project_id)
            .await?
            .ok_or_else(|| CoreError::not_found(PROJECT, project_id).into())
    }

    /// Overwrite the flat fields of an existing project.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DoesNotExist` if no row was updated, and
    /// `DatabaseError::InvalidState` if `project.id` is `None`.
    pub async fn modify_project_details(&self, project: &Project) -> Result<(), ServiceError> {
        if self.db.modify_project_details(project).await? {
            return Ok(());
        }
        // modify_project_details rejects a missing id before touching the store.
        let project_id = project.id.unwrap_or_default();
        Err(CoreError::does_not_exist(PROJECT, project_id).into())
    }

    /// Delete a project and all of its child rows.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DoesNotExist` if no project has `project_id`.
    pub async fn delete_project(&self, project_id: i64) -> Result<(), ServiceError> {
        if self.db.delete_project(project_id).await? {
            Ok(())
        } else {
            Err(CoreError::does_not_exist(PROJECT, project_id).into())
        }
    }

    /// Apply a partial update to a stored project and return the merged result.
    ///
    /// Reads and writes are separate transactions; the last write wins.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DoesNotExist` if no project has `project_id`, or
    /// `CoreError::Validation` for an empty update.
    pub async fn update_project(
        &self,
        project_id: i64,
        update: &ProjectUpdate,
    ) -> Result<Project, ServiceError> {
        if update.is_empty() {
            return Err(CoreError::Validation("nothing to update".into()).into());
        }
        let current = self
            .db
            .fetch_project_by_id(project_id)
            .await?
            .ok_or_else(|| CoreError::does_not_exist(PROJECT, project_id))?;

        let merged = update.apply_to(&current);
        self.modify_project_details(&merged).await?;
        tracing::debug!(project_id, ?update, "updated project");
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{deck, seed_step, test_db};
    use crate::updates::project::ProjectUpdateBuilder;

    async fn test_service() -> (tempfile::TempDir, ProjectsService) {
        let (dir, db) = test_db().await;
        (dir, ProjectsService::from_db(db))
    }

    #[tokio::test]
    async fn fetch_missing_is_not_found() {
        let (_dir, svc) = test_service().await;

        let err = svc.fetch_project_by_id(12).await.unwrap_err();

        assert!(matches!(err, ServiceError::Core(CoreError::NotFound { id: 12, .. })));
        assert_eq!(err.to_string(), "Project with ID=12 was not found");
    }

    #[tokio::test]
    async fn modify_missing_is_does_not_exist() {
        let (_dir, svc) = test_service().await;
        let mut ghost = deck();
        ghost.id = Some(5);

        let err = svc.modify_project_details(&ghost).await.unwrap_err();

        assert_eq!(err.to_string(), "Project with ID=5 does not exist");
        assert!(svc.fetch_all_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn modify_unsaved_is_invalid_state() {
        let (_dir, svc) = test_service().await;
        let err = svc.modify_project_details(&deck()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Database(DatabaseError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn delete_missing_is_does_not_exist() {
        let (_dir, svc) = test_service().await;
        let err = svc.delete_project(3).await.unwrap_err();
        assert_eq!(err.missing_id(), Some(3));
        assert!(matches!(err, ServiceError::Core(CoreError::DoesNotExist { .. })));
    }

    #[tokio::test]
    async fn update_merges_and_keeps_children() {
        let (_dir, svc) = test_service().await;
        let id = svc.add_project(&deck()).await.unwrap().id.unwrap();
        seed_step(svc.db(), id, "Dig holes", 1).await;

        let update = ProjectUpdateBuilder::new()
            .name("Back deck")
            .notes(None)
            .build();
        let merged = svc.update_project(id, &update).await.unwrap();

        assert_eq!(merged.name, "Back deck");
        assert_eq!(merged.notes, None);
        assert_eq!(merged.steps.len(), 1);
        assert_eq!(svc.fetch_project_by_id(id).await.unwrap(), merged);
    }

    #[tokio::test]
    async fn update_missing_is_does_not_exist() {
        let (_dir, svc) = test_service().await;
        let update = ProjectUpdateBuilder::new().name("x").build();

        let err = svc.update_project(99, &update).await.unwrap_err();

        assert_eq!(err.to_string(), "Project with ID=99 does not exist");
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let (_dir, svc) = test_service().await;
        let id = svc.add_project(&deck()).await.unwrap().id.unwrap();

        let err = svc
            .update_project(id, &ProjectUpdate::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Core(CoreError::Validation(_))));
    }
}
